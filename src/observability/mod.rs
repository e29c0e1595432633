//! Observability module providing structured logging.
//!
//! Console logging is configured from [`LoggingConfig`](crate::config::LoggingConfig)
//! with pretty, compact and JSON formats. Requires the `logging` feature.

#[cfg(feature = "logging")]
mod tracing_init;

#[cfg(feature = "logging")]
pub use tracing_init::*;
