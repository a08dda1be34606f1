//! Probe result and error definitions.

use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Why a probe failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// The probe exceeded its timeout and was cancelled.
    #[error("timeout")]
    Timeout,

    /// The request could not be sent or the connection failed.
    #[error("transport error: {0}")]
    Transport(String),

    /// The endpoint answered with a non-2xx status.
    #[error("HTTP {0}")]
    Http(u16),

    /// The response was not a well-formed JSON-RPC chain-id answer.
    #[error("malformed JSON-RPC response: {0}")]
    BadResponse(String),

    /// The endpoint answered but reports the wrong network. Distinct from
    /// transport errors: this indicates a misconfigured or malicious node.
    #[error("chain id mismatch: endpoint reports {actual:#x}, expected {expected:#x}")]
    ChainMismatch { expected: u64, actual: u64 },

    /// The endpoint is currently blacklisted; no network call was made.
    #[error("endpoint is blacklisted")]
    Blacklisted,
}

/// Outcome of a single probe. Never mutated after creation.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    /// The probed endpoint.
    pub endpoint: Url,
    /// Wall-clock round trip. Zero when the network call was skipped.
    pub latency: Duration,
    /// Failure detail, absent on success.
    pub error: Option<ProbeError>,
}

impl ProbeResult {
    pub fn success(endpoint: Url, latency: Duration) -> Self {
        Self {
            endpoint,
            latency,
            error: None,
        }
    }

    pub fn failure(endpoint: Url, latency: Duration, error: ProbeError) -> Self {
        Self {
            endpoint,
            latency,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
