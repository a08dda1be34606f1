//! Endpoint selection subsystem.
//!
//! # Data Flow
//! ```text
//! best_endpoint(force_refresh):
//!     cache valid and not forced → cached pick, zero network activity
//!     → otherwise probe all candidates in sequential batches
//!     → priority endpoint healthy? wins by policy
//!     → else lowest latency (ties: first in input order)
//!     → no success at all: fall back to the first candidate
//!     → store winner in cache.rs
//!
//! next_endpoint(current):
//!     scan candidates after `current`, wrapping around
//!     → skip blacklisted, quick-probe the rest
//!     → first success becomes the new cached pick
//! ```
//!
//! # Design Decisions
//! - Selection never fails; a total outage degrades to the first candidate
//!   so transaction flows always have something to attempt against
//! - Batched probing caps outstanding connections, trading probe-phase
//!   latency for resource safety
//! - The cached pick is authoritative for five minutes unless forced

pub mod cache;
pub mod selector;

pub use cache::{CachedSelection, SelectionCache};
pub use selector::EndpointSelector;
