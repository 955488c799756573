//! Security-related models for handling sensitive data.

mod error;
mod secret;

pub use error::SecurityError;
pub use secret::{SecretString, SecretValue};
