//! Security error types.
//!
//! Defines the errors that can occur while resolving or validating secret
//! values such as the server signing key.

use crate::utils::ErrorContext;
use std::collections::HashMap;
use thiserror::Error as ThisError;

/// Errors that can occur during secret operations
#[derive(ThisError, Debug)]
pub enum SecurityError {
	/// Error that occurs when a secret cannot be parsed
	#[error("Parse error: {0}")]
	ParseError(ErrorContext),

	/// Error that occurs when a secret fails validation
	#[error("Validation error: {0}")]
	ValidationError(ErrorContext),

	/// Other errors that don't fit into the categories above
	#[error(transparent)]
	Other(#[from] anyhow::Error),
}

impl SecurityError {
	/// Create a new parse error with optional source and metadata
	pub fn parse_error(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::ParseError(ErrorContext::new(msg, source, metadata))
	}

	/// Create a new validation error with optional source and metadata
	pub fn validation_error(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::ValidationError(ErrorContext::new(msg, source, metadata))
	}
}
