//! Token balance service.
//!
//! Thin wrapper around the ERC-20 contract's `balanceOf` accessor. Errors
//! never propagate past this boundary; they are logged with context and
//! swallowed to `None`.

use std::collections::HashMap;

use alloy::primitives::{Address, U256};
use async_trait::async_trait;
use tracing::{debug, error};

use crate::services::blockchain::{contracts::PortalToken, BlockChainError, EvmClient};
use crate::services::token::units::format_token_units;
use crate::utils::metrics::{BALANCE_FAILURES, BALANCE_QUERIES};

/// Interface for reading token balances
#[async_trait]
pub trait TokenServiceTrait: Send + Sync {
	/// Reads the holder's balance and renders it as a decimal string.
	///
	/// Returns `None` on any failure. A zero balance renders as `"0"`.
	async fn balance_of(&self, holder: Address) -> Option<String>;
}

/// Service wrapper around the token contract
#[derive(Clone)]
pub struct TokenService {
	client: EvmClient,
	contract_address: Address,
}

impl TokenService {
	pub fn new(client: EvmClient, contract_address: Address) -> Self {
		Self {
			client,
			contract_address,
		}
	}

	/// Performs the `balanceOf` view call.
	async fn query_balance(&self, holder: Address) -> Result<U256, BlockChainError> {
		let contract = PortalToken::new(self.contract_address, self.client.read_provider());

		contract.balanceOf(holder).call().await.map_err(|e| {
			BlockChainError::request_error(
				"Failed to query token balance",
				Some(Box::new(e)),
				Some(HashMap::from([
					("holder".to_string(), holder.to_string()),
					(
						"contract".to_string(),
						self.contract_address.to_string(),
					),
				])),
			)
		})
	}
}

#[async_trait]
impl TokenServiceTrait for TokenService {
	async fn balance_of(&self, holder: Address) -> Option<String> {
		BALANCE_QUERIES.inc();

		match self.query_balance(holder).await {
			Ok(raw) => {
				let balance = format_token_units(raw);
				debug!(%holder, %balance, "token balance read");
				Some(balance)
			}
			Err(e) => {
				error!(%holder, error = %e, "token balance read failed");
				BALANCE_FAILURES.inc();
				None
			}
		}
	}
}
