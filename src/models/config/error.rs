//! Configuration error types.
//!
//! This module defines the error types that can occur while resolving and
//! validating the application configuration from the environment.

use crate::utils::ErrorContext;
use std::collections::HashMap;
use thiserror::Error as ThisError;

/// Errors that can occur during configuration operations
#[derive(ThisError, Debug)]
pub enum ConfigError {
	/// A required variable is missing or a value failed validation
	#[error("Validation error: {0}")]
	ValidationError(ErrorContext),

	/// A variable is present but cannot be parsed into its target type
	#[error("Parse error: {0}")]
	ParseError(ErrorContext),

	/// Other errors that don't fit into the categories above
	#[error(transparent)]
	Other(#[from] anyhow::Error),
}

impl ConfigError {
	/// Create a new validation error with optional source and metadata
	pub fn validation_error(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::ValidationError(ErrorContext::new(msg, source, metadata))
	}

	/// Create a new parse error with optional source and metadata
	pub fn parse_error(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::ParseError(ErrorContext::new(msg, source, metadata))
	}
}
