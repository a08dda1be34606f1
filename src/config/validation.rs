//! Configuration validation.
//!
//! Semantic validation on top of what serde enforces syntactically:
//! URL parsing, referential integrity for the priority endpoint, and
//! value ranges. All errors are reported, not just the first.

use thiserror::Error;
use url::Url;

use crate::config::schema::FailoverConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("candidate endpoint list is empty")]
    NoEndpoints,

    #[error("invalid endpoint URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("endpoint URL {0:?} must use http or https")]
    UnsupportedScheme(String),

    #[error("priority endpoint {0:?} is not in the candidate list")]
    PriorityNotCandidate(String),

    #[error("{0} must be greater than zero")]
    ZeroValue(&'static str),
}

/// Error type for configuration processing.
#[derive(Debug)]
pub enum ConfigError {
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Candidate list with URLs parsed, produced by a successful validation.
#[derive(Debug, Clone)]
pub struct ValidatedEndpoints {
    /// Parsed candidates, in configured order.
    pub candidates: Vec<Url>,
    /// Parsed priority endpoint, when configured.
    pub priority: Option<Url>,
}

/// Validate a configuration, returning parsed endpoints on success and
/// every detected problem on failure.
pub fn validate_config(config: &FailoverConfig) -> Result<ValidatedEndpoints, Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut candidates = Vec::with_capacity(config.endpoints.len());

    if config.endpoints.is_empty() {
        errors.push(ValidationError::NoEndpoints);
    }

    for raw in &config.endpoints {
        match Url::parse(raw) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => candidates.push(url),
            Ok(_) => errors.push(ValidationError::UnsupportedScheme(raw.clone())),
            Err(e) => errors.push(ValidationError::InvalidUrl {
                url: raw.clone(),
                reason: e.to_string(),
            }),
        }
    }

    let priority = match &config.priority_endpoint {
        None => None,
        Some(raw) => match Url::parse(raw) {
            Ok(url) if candidates.contains(&url) => Some(url),
            Ok(_) => {
                errors.push(ValidationError::PriorityNotCandidate(raw.clone()));
                None
            }
            Err(e) => {
                errors.push(ValidationError::InvalidUrl {
                    url: raw.clone(),
                    reason: e.to_string(),
                });
                None
            }
        },
    };

    let ranges: [(&'static str, u64); 6] = [
        ("chain_id", config.chain_id),
        ("probe_timeout_ms", config.probe_timeout_ms),
        ("failover_probe_timeout_ms", config.failover_probe_timeout_ms),
        ("probe_batch_size", config.probe_batch_size as u64),
        ("blacklist_window_ms", config.blacklist_window_ms),
        ("cache_validity_ms", config.cache_validity_ms),
    ];
    for (field, value) in ranges {
        if value == 0 {
            errors.push(ValidationError::ZeroValue(field));
        }
    }
    if config.max_failures == 0 {
        errors.push(ValidationError::ZeroValue("max_failures"));
    }

    if errors.is_empty() {
        Ok(ValidatedEndpoints {
            candidates,
            priority,
        })
    } else {
        Err(errors)
    }
}
