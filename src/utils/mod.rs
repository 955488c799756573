//! Utility modules for common functionality.
//!
//! Provides shared error handling, logging, and metrics support used across
//! the service.
//!
//! - [`error`]: Structured error context with metadata and trace IDs
//! - [`logging`]: Tracing subscriber setup
//! - [`metrics`]: Prometheus registry and application counters

mod error;
pub mod logging;
pub mod metrics;

pub use error::{format_error_chain, ErrorContext};
pub use logging::setup_logging;
