//! Domain models and configuration types.
//!
//! - [`config`]: Environment-driven application configuration
//! - [`profile`]: Profile and friend-request entities
//! - [`security`]: Secret handling for the signing key

pub mod config;
pub mod profile;
pub mod security;

pub use config::{AppConfig, ConfigError};
pub use profile::{FriendRequest, FriendRequestStatus, Profile};
pub use security::{SecretString, SecretValue, SecurityError};
