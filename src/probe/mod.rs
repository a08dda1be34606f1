//! Endpoint probing subsystem.
//!
//! # Data Flow
//! ```text
//! probe(endpoint, timeout):
//!     blacklisted? → immediate failure, no network call
//!     → POST eth_chainId, bounded by timeout
//!     → classify: timeout / transport / HTTP status / chain mismatch / ok
//!     → feed outcome into the health tracker
//!     → ProbeResult (success + latency, or error detail)
//! ```
//!
//! # Design Decisions
//! - A probe never returns Err; every failure mode is captured in the result
//! - Chain-id verification guards against endpoints silently serving the
//!   wrong network, not just outages
//! - The timeout cancels the in-flight request at the boundary

pub mod prober;
pub mod types;

pub use prober::Prober;
pub use types::{ProbeError, ProbeResult};
