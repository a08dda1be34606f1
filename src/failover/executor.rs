//! Retry-with-rotation execution of RPC-dependent operations.

use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::config::{validate_config, ConfigError, FailoverConfig};
use crate::health::HealthTracker;
use crate::probe::Prober;
use crate::selection::EndpointSelector;

/// Terminal failure: retries and endpoint rotation were both exhausted.
///
/// This is the only error surfaced to callers; every per-attempt failure is
/// absorbed into tracker updates and rotation decisions.
#[derive(Debug, Error)]
#[error("all RPC endpoints failed after {attempts} attempts: {last_error}")]
pub struct FailoverExhausted {
    /// Number of operation invocations actually made.
    pub attempts: u32,
    /// The most recent underlying failure.
    pub last_error: String,
}

/// Executes RPC-dependent operations against the current best endpoint,
/// transparently rotating to alternates on failure.
///
/// Owns the tracker/prober/selector stack; construct once and share.
#[derive(Debug)]
pub struct FailoverExecutor {
    tracker: Arc<HealthTracker>,
    selector: EndpointSelector,
    max_retries: u32,
}

impl FailoverExecutor {
    /// Validate the configuration and build the executor.
    pub fn new(config: FailoverConfig) -> Result<Self, ConfigError> {
        let validated = validate_config(&config).map_err(ConfigError::Validation)?;

        let tracker = Arc::new(HealthTracker::new(
            config.max_failures,
            Duration::from_millis(config.blacklist_window_ms),
        ));
        let prober = Prober::new(tracker.clone(), config.chain_id);
        let selector =
            EndpointSelector::new(&config, validated.candidates, validated.priority, prober);

        Ok(Self {
            tracker,
            selector,
            max_retries: config.max_retries,
        })
    }

    /// The shared health tracker.
    pub fn tracker(&self) -> &HealthTracker {
        &self.tracker
    }

    /// The endpoint selector, for callers that only need an endpoint to
    /// bind their own client to.
    pub fn selector(&self) -> &EndpointSelector {
        &self.selector
    }

    /// Run `operation` against the best endpoint, rotating to alternates on
    /// failure, up to `max_retries` extra attempts.
    ///
    /// Success short-circuits and rehabilitates the serving endpoint. When
    /// rotation finds no viable alternate the remaining attempts are
    /// abandoned immediately.
    pub async fn execute<T, E, F, Fut>(&self, operation: F) -> Result<T, FailoverExhausted>
    where
        F: Fn(Url) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let mut current = self.selector.best_endpoint(false).await;
        let mut attempts = 0u32;
        let mut last_error = String::from("no attempt made");

        for attempt in 0..=self.max_retries {
            attempts += 1;
            tracing::debug!(
                endpoint = %current,
                attempt = attempt + 1,
                total = self.max_retries + 1,
                "Executing RPC operation"
            );

            match operation(current.clone()).await {
                Ok(value) => {
                    self.tracker.record_success(&current);
                    return Ok(value);
                }
                Err(e) => {
                    last_error = e.to_string();
                    tracing::warn!(
                        endpoint = %current,
                        attempt = attempt + 1,
                        error = %last_error,
                        "RPC operation failed"
                    );
                    self.tracker.record_failure(&current);

                    if attempt == self.max_retries {
                        break;
                    }
                    match self.selector.next_endpoint(&current).await {
                        Some(next) => current = next,
                        // No alternate responds; burning the remaining
                        // attempts against nothing helps nobody.
                        None => break,
                    }
                }
            }
        }

        tracing::error!(attempts, error = %last_error, "Failover exhausted");
        Err(FailoverExhausted {
            attempts,
            last_error,
        })
    }
}
