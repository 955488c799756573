//! NFT award service.
//!
//! Thin wrapper around the award contract's `awardItem` call: sign with the
//! server key, submit, wait for one confirmation, report a boolean. Errors
//! never propagate past this boundary; they are logged with context and
//! swallowed to `false`. There is no retry, no gas strategy, and no nonce
//! management beyond the provider's defaults.

use std::collections::HashMap;

use alloy::primitives::{Address, TxHash};
use async_trait::async_trait;
use tracing::{error, info};

use crate::services::blockchain::{contracts::ItemAward, BlockChainError, EvmClient};
use crate::utils::metrics::{AWARDS_ISSUED, AWARD_FAILURES};

/// Interface for issuing award transactions
#[async_trait]
pub trait AwardServiceTrait: Send + Sync {
	/// Mints an award token to `recipient` with the given metadata URI.
	///
	/// Returns `true` once the transaction is confirmed, `false` on any
	/// failure.
	async fn award_item(&self, recipient: Address, token_uri: &str) -> bool;
}

/// Service wrapper around the award contract
#[derive(Clone)]
pub struct AwardService {
	client: EvmClient,
	contract_address: Address,
}

impl AwardService {
	pub fn new(client: EvmClient, contract_address: Address) -> Self {
		Self {
			client,
			contract_address,
		}
	}

	/// Submits the award transaction and waits for its receipt.
	///
	/// # Errors
	/// - [`BlockChainError::TransactionError`] when submission fails or the
	///   transaction lands but reverts
	/// - [`BlockChainError::RequestError`] when the confirmation wait fails
	async fn submit_award(
		&self,
		recipient: Address,
		token_uri: &str,
	) -> Result<TxHash, BlockChainError> {
		let metadata = HashMap::from([
			("recipient".to_string(), recipient.to_string()),
			("token_uri".to_string(), token_uri.to_string()),
		]);

		let contract = ItemAward::new(self.contract_address, self.client.signing_provider());

		let pending = contract
			.awardItem(recipient, token_uri.to_string())
			.send()
			.await
			.map_err(|e| {
				BlockChainError::transaction_error(
					"Failed to submit award transaction",
					Some(Box::new(e)),
					Some(metadata.clone()),
				)
			})?;

		let receipt = pending.get_receipt().await.map_err(|e| {
			BlockChainError::request_error(
				"Failed while waiting for award confirmation",
				Some(Box::new(e)),
				Some(metadata.clone()),
			)
		})?;

		if !receipt.status() {
			return Err(BlockChainError::transaction_error(
				"Award transaction reverted",
				None,
				Some(metadata),
			));
		}

		Ok(receipt.transaction_hash)
	}
}

#[async_trait]
impl AwardServiceTrait for AwardService {
	async fn award_item(&self, recipient: Address, token_uri: &str) -> bool {
		match self.submit_award(recipient, token_uri).await {
			Ok(tx_hash) => {
				info!(%recipient, %tx_hash, "award transaction confirmed");
				AWARDS_ISSUED.inc();
				true
			}
			Err(e) => {
				error!(%recipient, error = %e, "award transaction failed");
				AWARD_FAILURES.inc();
				false
			}
		}
	}
}
