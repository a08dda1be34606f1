//! Configuration schema definitions.
//!
//! All types derive Serde traits so the embedding application can
//! deserialize this section from its own config file.

use serde::{Deserialize, Serialize};

/// Failover configuration: candidate endpoints, target chain, thresholds.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FailoverConfig {
    /// Ordered candidate endpoint URLs. The first entry doubles as the
    /// last-resort fallback when every probe fails.
    pub endpoints: Vec<String>,

    /// Operator-preferred endpoint. When healthy it is selected regardless
    /// of measured latency. Must appear in `endpoints`.
    pub priority_endpoint: Option<String>,

    /// Chain id every endpoint must report (56 = BSC mainnet).
    pub chain_id: u64,

    /// Timeout for routine probes, in milliseconds.
    pub probe_timeout_ms: u64,

    /// Shortened timeout for the quick probe during failover rotation.
    pub failover_probe_timeout_ms: u64,

    /// Number of probes issued concurrently per batch.
    pub probe_batch_size: usize,

    /// Failures within the blacklist window before an endpoint is excluded.
    pub max_failures: u32,

    /// How long a sufficiently-failing endpoint stays blacklisted,
    /// in milliseconds.
    pub blacklist_window_ms: u64,

    /// How long a selected best endpoint stays authoritative without
    /// re-probing, in milliseconds.
    pub cache_validity_ms: u64,

    /// Extra attempts after the first failure of an operation.
    pub max_retries: u32,
}

impl Default for FailoverConfig {
    fn default() -> Self {
        Self {
            endpoints: Vec::new(),
            priority_endpoint: None,
            chain_id: default_chain_id(),
            probe_timeout_ms: default_probe_timeout_ms(),
            failover_probe_timeout_ms: default_failover_probe_timeout_ms(),
            probe_batch_size: default_probe_batch_size(),
            max_failures: default_max_failures(),
            blacklist_window_ms: default_blacklist_window_ms(),
            cache_validity_ms: default_cache_validity_ms(),
            max_retries: default_max_retries(),
        }
    }
}

fn default_chain_id() -> u64 {
    56
}

fn default_probe_timeout_ms() -> u64 {
    3_000
}

fn default_failover_probe_timeout_ms() -> u64 {
    2_000
}

fn default_probe_batch_size() -> usize {
    5
}

fn default_max_failures() -> u32 {
    3
}

fn default_blacklist_window_ms() -> u64 {
    30_000
}

fn default_cache_validity_ms() -> u64 {
    300_000
}

fn default_max_retries() -> u32 {
    2
}
