//! Latency-aware JSON-RPC endpoint selection and failover.
//!
//! Public RPC infrastructure is flaky: individual endpoints time out, rate
//! limit, or silently serve the wrong network. This crate probes a candidate
//! list for chain correctness and latency, temporarily blacklists failing
//! endpoints, caches the best pick, and transparently retries operations
//! against alternates when the current endpoint fails.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌────────────────────────────────────────────────┐
//!                    │                 RPC FAILOVER                   │
//!                    │                                                │
//!   operation        │  ┌──────────────┐       ┌──────────────────┐  │
//!   ─────────────────┼─▶│   failover   │──────▶│    selection     │  │
//!                    │  │   executor   │       │ cache + ranking  │  │
//!                    │  └──────┬───────┘       └────────┬─────────┘  │
//!                    │         │                        │            │
//!                    │         │ rotate on failure      │ batched    │
//!                    │         ▼                        ▼            │
//!                    │  ┌──────────────┐       ┌──────────────────┐  │    JSON-RPC
//!                    │  │    health    │◀──────│      probe       │──┼──▶ endpoints
//!                    │  │   tracker    │       │   eth_chainId    │  │
//!                    │  └──────────────┘       └──────────────────┘  │
//!                    │                                               │
//!                    │  ┌─────────────────────────────────────────┐  │
//!                    │  │          Cross-Cutting Concerns         │  │
//!                    │  │   ┌─────────┐       ┌───────────────┐   │  │
//!                    │  │   │ config  │       │ observability │   │  │
//!                    │  │   └─────────┘       └───────────────┘   │  │
//!                    │  └─────────────────────────────────────────┘  │
//!                    └────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use rpc_failover::{FailoverConfig, FailoverExecutor};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = FailoverConfig {
//!     endpoints: vec![
//!         "https://bsc-dataseed.binance.org/".into(),
//!         "https://bsc-dataseed1.defibit.io/".into(),
//!     ],
//!     ..FailoverConfig::default()
//! };
//! let executor = FailoverExecutor::new(config)?;
//!
//! let block = executor
//!     .execute(|endpoint| async move {
//!         // any RPC-dependent operation bound to `endpoint`
//!         fetch_block_number(endpoint).await
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! # async fn fetch_block_number(_e: url::Url) -> Result<u64, String> { Ok(0) }
//! ```

// Core subsystems
pub mod config;
pub mod failover;
pub mod health;
pub mod probe;
pub mod selection;

// Cross-cutting concerns
pub mod observability;

pub use config::{ConfigError, FailoverConfig, ValidationError};
pub use failover::{FailoverExecutor, FailoverExhausted};
pub use health::HealthTracker;
pub use probe::{ProbeError, ProbeResult, Prober};
pub use selection::{EndpointSelector, SelectionCache};
