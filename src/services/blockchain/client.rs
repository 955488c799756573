//! EVM client construction.
//!
//! Builds the alloy providers the service wrappers run on: a read-only
//! provider for view calls and a signing provider (server-held key) for
//! transactions. Both are erased to [`DynProvider`] so downstream services
//! can hold them without generic plumbing.

use alloy::{
	network::EthereumWallet,
	providers::{DynProvider, Provider, ProviderBuilder},
	signers::local::PrivateKeySigner,
};
use url::Url;

use crate::models::AppConfig;
use crate::services::blockchain::error::BlockChainError;

/// Providers for the configured JSON-RPC endpoint
#[derive(Clone, Debug)]
pub struct EvmClient {
	read_provider: DynProvider,
	signing_provider: DynProvider,
}

impl EvmClient {
	/// Creates a client from the application configuration.
	///
	/// Nonce, gas and chain-id handling stay with the provider's default
	/// fillers; the portal adds no strategy of its own on top.
	///
	/// # Errors
	/// Returns a [`BlockChainError::InternalError`] when the configured
	/// private key does not parse into a signer.
	pub fn new(config: &AppConfig) -> Result<Self, BlockChainError> {
		let signer: PrivateKeySigner = config.private_key.as_str().parse().map_err(
			|e: alloy::signers::local::LocalSignerError| {
				// The key itself must never end up in the error message
				BlockChainError::internal_error(
					"Configured private key is not a valid signing key",
					Some(Box::new(e)),
					None,
				)
			},
		)?;
		let wallet = EthereumWallet::from(signer);

		let read_provider = ProviderBuilder::new()
			.connect_http(config.rpc_url.clone())
			.erased();
		let signing_provider = ProviderBuilder::new()
			.wallet(wallet)
			.connect_http(config.rpc_url.clone())
			.erased();

		Ok(Self {
			read_provider,
			signing_provider,
		})
	}

	/// Creates a client that can only perform view calls.
	pub fn read_only(rpc_url: Url) -> Self {
		let read_provider = ProviderBuilder::new().connect_http(rpc_url).erased();
		Self {
			signing_provider: read_provider.clone(),
			read_provider,
		}
	}

	/// Provider without a signer, for view calls
	pub fn read_provider(&self) -> DynProvider {
		self.read_provider.clone()
	}

	/// Provider backed by the server-held signing key
	pub fn signing_provider(&self) -> DynProvider {
		self.signing_provider.clone()
	}
}
