//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! embedding application
//!     → FailoverConfig (plain record, serde-capable)
//!     → validation.rs (semantic checks, URL parsing)
//!     → validated endpoints handed to the executor
//! ```
//!
//! # Design Decisions
//! - Configuration is passed in programmatically; the crate reads no files
//!   and no environment variables. Serde derives exist so the embedding
//!   application can splice the config into its own file format.
//! - All fields have defaults matching BSC mainnet operation
//! - Validation collects all errors, not just the first

pub mod schema;
pub mod validation;

pub use schema::FailoverConfig;
pub use validation::{validate_config, ConfigError, ValidatedEndpoints, ValidationError};
