//! Endpoint health subsystem.
//!
//! # Data Flow
//! ```text
//! Probe or operation outcome observed:
//!     failure → tracker.rs (increment count, stamp time)
//!     success → tracker.rs (delete record, full rehabilitation)
//!
//! Selection / rotation asks:
//!     is_blacklisted? → count >= threshold AND within window
//!     (expired records are deleted lazily during the check)
//! ```
//!
//! # Design Decisions
//! - A single success fully clears an endpoint's failure history instead of
//!   decaying the counter; public RPC nodes recover from blips quickly
//! - Short blacklist window (30s default) for fast re-admission
//! - Records are created lazily on first failure, never on success

pub mod tracker;

pub use tracker::{HealthRecord, HealthTracker};
