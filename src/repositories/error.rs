//! Error types for repository operations.
//!
//! Defines the errors the profile store can produce. Handlers translate
//! these into HTTP responses, so variants distinguish "unknown id" from
//! "invalid operation".

use crate::utils::ErrorContext;
use std::collections::HashMap;
use thiserror::Error as ThisError;

/// Errors that can occur during repository operations
#[derive(ThisError, Debug)]
pub enum RepositoryError {
	/// A referenced profile or friend request does not exist
	#[error("Not found: {0}")]
	NotFoundError(ErrorContext),

	/// The operation is not valid for the current state
	#[error("Validation error: {0}")]
	ValidationError(ErrorContext),

	/// Error that occurs due to internal repository operations
	#[error("Internal error: {0}")]
	InternalError(ErrorContext),

	/// Other errors that don't fit into the categories above
	#[error(transparent)]
	Other(#[from] anyhow::Error),
}

impl RepositoryError {
	/// Create a new not-found error with optional metadata
	pub fn not_found_error(
		msg: impl Into<String>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::NotFoundError(ErrorContext::new(msg, None, metadata))
	}

	/// Create a new validation error with optional metadata
	pub fn validation_error(
		msg: impl Into<String>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::ValidationError(ErrorContext::new(msg, None, metadata))
	}

	/// Create a new internal error with optional source and metadata
	pub fn internal_error(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::InternalError(ErrorContext::new(msg, source, metadata))
	}
}
