//! Per-endpoint failure bookkeeping and blacklist decisions.

use std::time::{Duration, Instant};

use dashmap::DashMap;
use url::Url;

use crate::observability::metrics;

/// Failure history for a single endpoint.
///
/// Created lazily on the first observed failure, deleted on the first
/// observed success or once the blacklist window has elapsed.
#[derive(Debug, Clone)]
pub struct HealthRecord {
    /// Failures observed since the last success.
    pub failures: u32,
    /// Most recent failure observation.
    pub last_failure: Instant,
}

/// Tracks observed failures per endpoint and decides blacklist membership.
///
/// Safe to share across tasks; the record map is a concurrent map and all
/// operations take `&self`.
#[derive(Debug)]
pub struct HealthTracker {
    records: DashMap<Url, HealthRecord>,
    max_failures: u32,
    blacklist_window: Duration,
}

impl HealthTracker {
    pub fn new(max_failures: u32, blacklist_window: Duration) -> Self {
        Self {
            records: DashMap::new(),
            max_failures,
            blacklist_window,
        }
    }

    /// Record one failure observation. Returns the updated failure count.
    pub fn record_failure(&self, endpoint: &Url) -> u32 {
        let now = Instant::now();
        let failures = {
            let mut record = self
                .records
                .entry(endpoint.clone())
                .or_insert(HealthRecord {
                    failures: 0,
                    last_failure: now,
                });
            record.failures += 1;
            record.last_failure = now;
            record.failures
        };

        tracing::warn!(endpoint = %endpoint, failures, "Endpoint failure recorded");
        if failures >= self.max_failures {
            tracing::error!(endpoint = %endpoint, failures, "Endpoint blacklisted");
            metrics::record_endpoint_health(endpoint, false);
        }
        failures
    }

    /// Record a success. A single success fully rehabilitates the endpoint:
    /// its failure history is deleted. No-op when no record exists.
    pub fn record_success(&self, endpoint: &Url) {
        if self.records.remove(endpoint).is_some() {
            tracing::info!(endpoint = %endpoint, "Endpoint recovered, failure history cleared");
        }
        metrics::record_endpoint_health(endpoint, true);
    }

    /// True while the endpoint has reached the failure threshold within the
    /// blacklist window. An expired record is deleted here (lazy expiry) and
    /// the endpoint is no longer considered blacklisted.
    pub fn is_blacklisted(&self, endpoint: &Url) -> bool {
        let expired = match self.records.get(endpoint) {
            None => return false,
            Some(record) => {
                if record.last_failure.elapsed() <= self.blacklist_window {
                    return record.failures >= self.max_failures;
                }
                true
            }
        };

        // The read guard is dropped above; removal must not hold it.
        if expired {
            self.records.remove(endpoint);
            tracing::info!(endpoint = %endpoint, "Blacklist window elapsed, endpoint readmitted");
        }
        false
    }

    /// Current failure count for an endpoint (zero when no record exists).
    pub fn failure_count(&self, endpoint: &Url) -> u32 {
        self.records.get(endpoint).map(|r| r.failures).unwrap_or(0)
    }
}
