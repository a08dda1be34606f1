//! Time-boxed cache of the winning endpoint.

use std::sync::Arc;
use std::time::{Duration, Instant};

use arc_swap::ArcSwapOption;
use url::Url;

/// The most recent selection outcome.
#[derive(Debug)]
pub struct CachedSelection {
    pub endpoint: Url,
    pub selected_at: Instant,
}

/// Caches the best endpoint for a bounded validity window.
///
/// Reads are lock-free; a cache hit is the dominant, cheap path in
/// normal operation.
#[derive(Debug)]
pub struct SelectionCache {
    current: ArcSwapOption<CachedSelection>,
    validity: Duration,
}

impl SelectionCache {
    pub fn new(validity: Duration) -> Self {
        Self {
            current: ArcSwapOption::empty(),
            validity,
        }
    }

    /// Return the cached endpoint while it is still authoritative.
    pub fn get(&self) -> Option<Url> {
        let guard = self.current.load();
        let cached = guard.as_ref()?;
        if cached.selected_at.elapsed() < self.validity {
            Some(cached.endpoint.clone())
        } else {
            None
        }
    }

    /// Replace the cached pick, stamping it with the current time.
    pub fn store(&self, endpoint: Url) {
        self.current.store(Some(Arc::new(CachedSelection {
            endpoint,
            selected_at: Instant::now(),
        })));
    }

    /// Drop the cached pick, forcing the next selection to probe.
    pub fn invalidate(&self) {
        self.current.store(None);
    }
}
