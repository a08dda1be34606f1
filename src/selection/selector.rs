//! Best-endpoint selection over a candidate list.

use std::time::Duration;

use futures_util::future::join_all;
use url::Url;

use crate::config::FailoverConfig;
use crate::observability::metrics;
use crate::probe::{ProbeResult, Prober};
use crate::selection::cache::SelectionCache;

/// Picks the single best endpoint from an ordered candidate list,
/// amortizing probe cost through a time-boxed cache.
#[derive(Debug)]
pub struct EndpointSelector {
    candidates: Vec<Url>,
    priority: Option<Url>,
    prober: Prober,
    cache: SelectionCache,
    batch_size: usize,
    probe_timeout: Duration,
    failover_probe_timeout: Duration,
}

impl EndpointSelector {
    /// Build a selector from a validated candidate list.
    ///
    /// `candidates` must be non-empty and `priority`, when present, must be
    /// one of the candidates; `validate_config` enforces both.
    pub fn new(
        config: &FailoverConfig,
        candidates: Vec<Url>,
        priority: Option<Url>,
        prober: Prober,
    ) -> Self {
        Self {
            candidates,
            priority,
            prober,
            cache: SelectionCache::new(Duration::from_millis(config.cache_validity_ms)),
            batch_size: config.probe_batch_size,
            probe_timeout: Duration::from_millis(config.probe_timeout_ms),
            failover_probe_timeout: Duration::from_millis(config.failover_probe_timeout_ms),
        }
    }

    /// The configured candidate list, in input order.
    pub fn candidates(&self) -> &[Url] {
        &self.candidates
    }

    /// The prober used for selection and rotation checks.
    pub fn prober(&self) -> &Prober {
        &self.prober
    }

    /// The selection cache.
    pub fn cache(&self) -> &SelectionCache {
        &self.cache
    }

    /// Return the best available endpoint.
    ///
    /// Serves the cached pick while it is valid unless `force_refresh` is
    /// set. Never fails: when every probe fails the first candidate is
    /// returned so callers can still attempt their operation.
    pub async fn best_endpoint(&self, force_refresh: bool) -> Url {
        if !force_refresh {
            if let Some(endpoint) = self.cache.get() {
                tracing::debug!(endpoint = %endpoint, "Using cached best endpoint");
                metrics::record_selection("cached");
                return endpoint;
            }
        }

        let results = self.probe_all().await;
        let chosen = match self.pick(&results) {
            Some(endpoint) => {
                metrics::record_selection("probed");
                endpoint
            }
            None => {
                // Total outage: hand back the first candidate rather than
                // erroring, and cache it so a dead list is not re-probed on
                // every call.
                let fallback = self.candidates[0].clone();
                tracing::warn!(
                    endpoint = %fallback,
                    "All candidate probes failed, falling back to first candidate"
                );
                metrics::record_selection("fallback");
                fallback
            }
        };

        self.cache.store(chosen.clone());
        chosen
    }

    /// Rotate to the first viable endpoint after `current`, wrapping around.
    ///
    /// Blacklisted candidates are skipped outright; the remainder get a
    /// quick probe. The first success becomes the new cached pick. Returns
    /// `None` when no alternate responds.
    pub async fn next_endpoint(&self, current: &Url) -> Option<Url> {
        let len = self.candidates.len();
        let current_index = self
            .candidates
            .iter()
            .position(|c| c == current)
            .unwrap_or(0);

        for offset in 1..len {
            let candidate = &self.candidates[(current_index + offset) % len];
            if self.prober.tracker().is_blacklisted(candidate) {
                tracing::debug!(endpoint = %candidate, "Skipping blacklisted candidate");
                continue;
            }

            let result = self.prober.probe(candidate, self.failover_probe_timeout).await;
            if result.is_success() {
                tracing::info!(
                    endpoint = %candidate,
                    latency_ms = result.latency.as_millis() as u64,
                    "Switched to alternate endpoint"
                );
                self.cache.store(candidate.clone());
                return Some(candidate.clone());
            }
        }

        tracing::error!(current = %current, "No viable alternate endpoint");
        None
    }

    /// Probe every candidate in sequential batches, each batch running
    /// concurrently. Results come back in candidate order.
    async fn probe_all(&self) -> Vec<ProbeResult> {
        let mut results = Vec::with_capacity(self.candidates.len());
        for batch in self.candidates.chunks(self.batch_size) {
            let probes = batch
                .iter()
                .map(|endpoint| self.prober.probe(endpoint, self.probe_timeout));
            results.extend(join_all(probes).await);
            tracing::debug!(
                probed = results.len(),
                total = self.candidates.len(),
                "Probe batch settled"
            );
        }
        results
    }

    /// Pick a winner among successful probes: the priority endpoint when it
    /// is healthy, otherwise the lowest latency. `None` when nothing
    /// succeeded.
    fn pick(&self, results: &[ProbeResult]) -> Option<Url> {
        let successes: Vec<&ProbeResult> = results.iter().filter(|r| r.is_success()).collect();

        if let Some(priority) = &self.priority {
            if successes.iter().any(|r| &r.endpoint == priority) {
                tracing::info!(endpoint = %priority, "Priority endpoint healthy, selected by policy");
                return Some(priority.clone());
            }
        }

        // min_by_key keeps the first of equal minima, so input order
        // breaks ties
        let best = successes.into_iter().min_by_key(|r| r.latency)?;
        tracing::info!(
            endpoint = %best.endpoint,
            latency_ms = best.latency.as_millis() as u64,
            "Fastest endpoint selected"
        );
        Some(best.endpoint.clone())
    }
}
