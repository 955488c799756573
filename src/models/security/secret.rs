//! Secret management for sensitive configuration values.
//!
//! The server signing key never leaves this module unredacted: it is held in
//! a [`SecretString`] that zeroizes its memory on drop and redacts itself in
//! `Debug` and `Display` output. [`SecretValue`] describes where a secret is
//! sourced from (inline or an environment variable) and resolves it on
//! demand.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::models::security::error::SecurityError;

/// A string holding sensitive data, zeroized on drop.
///
/// Redacted in both `Debug` and `Display` so a signing key cannot leak
/// through logs or error messages.
#[derive(Clone, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(transparent)]
pub struct SecretString(String);

impl SecretString {
	/// Wraps a sensitive string value
	pub fn new(value: String) -> Self {
		Self(value)
	}

	/// Borrows the underlying secret
	///
	/// Callers must not persist or log the returned slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl fmt::Debug for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "SecretString(REDACTED)")
	}
}

impl fmt::Display for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "REDACTED")
	}
}

impl From<&str> for SecretString {
	fn from(value: &str) -> Self {
		Self::new(value.to_string())
	}
}

/// A secret and the place it is sourced from
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum SecretValue {
	/// Secret provided inline
	Plain(SecretString),
	/// Secret read from an environment variable at resolve time
	Environment(String),
}

impl SecretValue {
	/// Resolves the secret to its value
	///
	/// # Errors
	/// Returns a [`SecurityError::ParseError`] when an environment-sourced
	/// secret's variable is unset.
	pub fn resolve(&self) -> Result<SecretString, SecurityError> {
		match self {
			Self::Plain(secret) => Ok(secret.clone()),
			Self::Environment(name) => env::var(name).map(SecretString::new).map_err(|e| {
				SecurityError::parse_error(
					format!("Missing {} environment variable", name),
					Some(Box::new(e)),
					None,
				)
			}),
		}
	}
}
