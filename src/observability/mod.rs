//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! probe / tracker / selection produce:
//!     → tracing events (structured fields, endpoint + outcome)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → whatever subscriber/recorder the embedding application installs
//! ```
//!
//! # Design Decisions
//! - The library records through the `metrics` facade and never installs an
//!   exporter; that is the embedding application's choice
//! - Metric updates are cheap enough to sit on the probe path

pub mod metrics;
