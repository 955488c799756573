//! HTTP error mapping.
//!
//! Translates repository failures into JSON error responses. Chain-call
//! failures never reach this type; they are already converted to sentinel
//! values inside the award and token services.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error as ThisError;

use crate::repositories::RepositoryError;

/// Errors surfaced to HTTP clients
#[derive(ThisError, Debug)]
pub enum WebError {
	/// Profile store errors, mapped by variant
	#[error(transparent)]
	Repository(#[from] RepositoryError),

	/// Other errors that don't fit into the categories above
	#[error(transparent)]
	Other(#[from] anyhow::Error),
}

impl ResponseError for WebError {
	fn status_code(&self) -> StatusCode {
		match self {
			Self::Repository(RepositoryError::NotFoundError(_)) => StatusCode::NOT_FOUND,
			Self::Repository(RepositoryError::ValidationError(_)) => StatusCode::BAD_REQUEST,
			_ => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
	}
}
