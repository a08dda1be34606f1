//! Failover execution subsystem.
//!
//! # Data Flow
//! ```text
//! execute(operation):
//!     current = selector.best_endpoint()
//!     loop up to max_retries + 1 attempts:
//!         operation(current) succeeded → record success, return
//!         failed → record failure
//!             → rotate via selector.next_endpoint(current)
//!             → nothing viable left: fail immediately
//!     all attempts spent → FailoverExhausted
//! ```
//!
//! # Design Decisions
//! - Per-attempt errors are absorbed into tracker updates; only total
//!   exhaustion propagates to the caller
//! - No backoff between attempts: the consumer is an interactive flow that
//!   expects immediate feedback, and rotation already probes the target
//! - The endpoint actually used may differ from the preferred one; logs are
//!   the way to observe which endpoint served a request

pub mod executor;

pub use executor::{FailoverExecutor, FailoverExhausted};
