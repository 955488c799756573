//! Application configuration.
//!
//! The portal is configured entirely through environment variables (loaded
//! via `dotenvy` in `main`). [`AppConfig`] resolves and validates them once
//! at startup; everything downstream receives typed values.

mod error;

pub use error::ConfigError;

use alloy::primitives::Address;
use std::collections::HashMap;
use std::env;
use url::Url;

use crate::models::security::SecretString;

/// Environment variable holding the JSON-RPC endpoint URL
pub const RPC_URL_VAR: &str = "RPC_URL";
/// Environment variable holding the server signing key (hex)
pub const PRIVATE_KEY_VAR: &str = "PRIVATE_KEY";
/// Environment variable holding the award (NFT) contract address
pub const AWARD_CONTRACT_VAR: &str = "AWARD_CONTRACT_ADDRESS";
/// Environment variable holding the ERC-20 token contract address
pub const TOKEN_CONTRACT_VAR: &str = "TOKEN_CONTRACT_ADDRESS";
/// Environment variable holding the HTTP listen host
pub const HOST_VAR: &str = "HOST";
/// Environment variable holding the HTTP listen port
pub const PORT_VAR: &str = "PORT";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Validated application configuration
#[derive(Clone, Debug)]
pub struct AppConfig {
	/// JSON-RPC endpoint for all chain access
	pub rpc_url: Url,
	/// Server-held signing key, redacted in logs
	pub private_key: SecretString,
	/// Address of the deployed award (NFT) contract
	pub award_contract: Address,
	/// Address of the deployed ERC-20 token contract
	pub token_contract: Address,
	/// HTTP listen host
	pub host: String,
	/// HTTP listen port
	pub port: u16,
}

impl AppConfig {
	/// Resolves the configuration from the process environment.
	pub fn from_env() -> Result<Self, ConfigError> {
		let vars: HashMap<String, String> = env::vars().collect();
		Self::from_vars(&vars)
	}

	/// Resolves the configuration from an explicit variable map.
	///
	/// Exists so tests can exercise validation without mutating the process
	/// environment.
	///
	/// # Errors
	/// Returns a [`ConfigError`] naming the offending variable when a
	/// required variable is missing or a value fails to parse.
	pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
		let rpc_url = required(vars, RPC_URL_VAR)?;
		let rpc_url = Url::parse(&rpc_url).map_err(|e| {
			ConfigError::parse_error(
				format!("{} is not a valid URL", RPC_URL_VAR),
				Some(Box::new(e)),
				Some(var_metadata(RPC_URL_VAR)),
			)
		})?;

		let private_key = SecretString::new(required(vars, PRIVATE_KEY_VAR)?);

		let award_contract = parse_address(vars, AWARD_CONTRACT_VAR)?;
		let token_contract = parse_address(vars, TOKEN_CONTRACT_VAR)?;

		let host = vars
			.get(HOST_VAR)
			.cloned()
			.unwrap_or_else(|| DEFAULT_HOST.to_string());
		let port = match vars.get(PORT_VAR) {
			Some(raw) => raw.parse::<u16>().map_err(|e| {
				ConfigError::parse_error(
					format!("{} is not a valid port", PORT_VAR),
					Some(Box::new(e)),
					Some(var_metadata(PORT_VAR)),
				)
			})?,
			None => DEFAULT_PORT,
		};

		Ok(Self {
			rpc_url,
			private_key,
			award_contract,
			token_contract,
			host,
			port,
		})
	}

	/// The address the HTTP server binds to, as `host:port`.
	pub fn listen_addr(&self) -> String {
		format!("{}:{}", self.host, self.port)
	}
}

fn required(vars: &HashMap<String, String>, name: &str) -> Result<String, ConfigError> {
	match vars.get(name) {
		Some(value) if !value.trim().is_empty() => Ok(value.clone()),
		_ => Err(ConfigError::validation_error(
			format!("Missing {} environment variable", name),
			None,
			Some(var_metadata(name)),
		)),
	}
}

fn parse_address(vars: &HashMap<String, String>, name: &str) -> Result<Address, ConfigError> {
	let raw = required(vars, name)?;
	raw.parse::<Address>().map_err(|e| {
		ConfigError::parse_error(
			format!("{} is not a valid address", name),
			Some(Box::new(e)),
			Some(var_metadata(name)),
		)
	})
}

fn var_metadata(name: &str) -> HashMap<String, String> {
	HashMap::from([("variable".to_string(), name.to_string())])
}
