//! Chain-identity probing with bounded timeouts.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Deserialize;
use tokio::time::timeout;
use url::Url;

use crate::health::HealthTracker;
use crate::observability::metrics;
use crate::probe::types::{ProbeError, ProbeResult};

#[derive(Debug, Deserialize)]
struct ChainIdResponse {
    result: Option<String>,
    error: Option<serde_json::Value>,
}

/// Issues correctness+latency probes and feeds outcomes into the
/// health tracker.
#[derive(Debug, Clone)]
pub struct Prober {
    client: reqwest::Client,
    tracker: Arc<HealthTracker>,
    expected_chain_id: u64,
    request_id: Arc<AtomicU64>,
}

impl Prober {
    pub fn new(tracker: Arc<HealthTracker>, expected_chain_id: u64) -> Self {
        Self {
            client: reqwest::Client::new(),
            tracker,
            expected_chain_id,
            request_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// The tracker this prober reports into.
    pub fn tracker(&self) -> &HealthTracker {
        &self.tracker
    }

    /// Probe one endpoint for chain correctness and latency.
    ///
    /// A blacklisted endpoint is skipped without a network call. All other
    /// failure modes are captured in the returned result and recorded as
    /// tracker failures; nothing propagates to the caller.
    pub async fn probe(&self, endpoint: &Url, probe_timeout: Duration) -> ProbeResult {
        if self.tracker.is_blacklisted(endpoint) {
            tracing::debug!(endpoint = %endpoint, "Skipping probe, endpoint is blacklisted");
            return ProbeResult::failure(endpoint.clone(), Duration::ZERO, ProbeError::Blacklisted);
        }

        let start = Instant::now();
        let outcome = timeout(probe_timeout, self.request_chain_id(endpoint)).await;
        let latency = start.elapsed();

        let error = match outcome {
            Err(_) => Some(ProbeError::Timeout),
            Ok(Err(e)) => Some(e),
            Ok(Ok(actual)) if actual != self.expected_chain_id => Some(ProbeError::ChainMismatch {
                expected: self.expected_chain_id,
                actual,
            }),
            Ok(Ok(_)) => None,
        };

        match error {
            None => {
                self.tracker.record_success(endpoint);
                metrics::record_probe(endpoint, latency, true);
                tracing::debug!(
                    endpoint = %endpoint,
                    latency_ms = latency.as_millis() as u64,
                    "Probe succeeded"
                );
                ProbeResult::success(endpoint.clone(), latency)
            }
            Some(error) => {
                self.tracker.record_failure(endpoint);
                metrics::record_probe(endpoint, latency, false);
                tracing::warn!(endpoint = %endpoint, error = %error, "Probe failed");
                ProbeResult::failure(endpoint.clone(), latency, error)
            }
        }
    }

    async fn request_chain_id(&self, endpoint: &Url) -> Result<u64, ProbeError> {
        let id = self.request_id.fetch_add(1, Ordering::Relaxed);
        let payload = serde_json::json!({
            "jsonrpc": "2.0",
            "method": "eth_chainId",
            "params": [],
            "id": id,
        });

        let response = self
            .client
            .post(endpoint.clone())
            .json(&payload)
            .send()
            .await
            .map_err(|e| ProbeError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::Http(status.as_u16()));
        }

        let body: ChainIdResponse = response
            .json()
            .await
            .map_err(|e| ProbeError::BadResponse(e.to_string()))?;

        if let Some(err) = body.error {
            return Err(ProbeError::BadResponse(err.to_string()));
        }
        let result = body
            .result
            .ok_or_else(|| ProbeError::BadResponse("missing result field".into()))?;
        parse_chain_id(&result)
    }
}

/// Parse a hex chain id (`"0x38"`) into its numeric value.
fn parse_chain_id(hex: &str) -> Result<u64, ProbeError> {
    let digits = hex.strip_prefix("0x").unwrap_or(hex);
    u64::from_str_radix(digits, 16)
        .map_err(|_| ProbeError::BadResponse(format!("unparseable chain id {:?}", hex)))
}
