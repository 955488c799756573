//! One-shot deployment script for the ERC-20 token contract.
//!
//! Runs with no arguments. Reads `RPC_URL` and `PRIVATE_KEY` from the
//! environment, loads the compiled contract artifact (path from
//! `TOKEN_ARTIFACT`, default `artifacts/PortalToken.json`), submits the
//! deployment transaction, and prints the deployed address to stdout.
//! Exits 0 on success, 1 on any error.

use std::process::ExitCode;

use alloy::{
	network::{EthereumWallet, TransactionBuilder},
	primitives::Bytes,
	providers::{Provider, ProviderBuilder},
	rpc::types::TransactionRequest,
	signers::local::PrivateKeySigner,
};
use anyhow::{anyhow, Context, Result};

use award_portal::models::SecretValue;

const DEFAULT_ARTIFACT: &str = "artifacts/PortalToken.json";

#[tokio::main]
async fn main() -> ExitCode {
	dotenvy::dotenv().ok();

	match deploy().await {
		Ok(address) => {
			println!("{}", address);
			ExitCode::SUCCESS
		}
		Err(e) => {
			eprintln!("deployment failed: {:#}", e);
			ExitCode::FAILURE
		}
	}
}

async fn deploy() -> Result<String> {
	let rpc_url = std::env::var("RPC_URL").context("RPC_URL is not set")?;
	// Resolved through SecretValue so the key stays redacted in errors
	let private_key = SecretValue::Environment("PRIVATE_KEY".to_string())
		.resolve()
		.context("PRIVATE_KEY is not set")?;
	let artifact_path =
		std::env::var("TOKEN_ARTIFACT").unwrap_or_else(|_| DEFAULT_ARTIFACT.to_string());

	let bytecode = load_creation_bytecode(&artifact_path)?;

	let signer: PrivateKeySigner = private_key
		.as_str()
		.parse()
		.map_err(|_| anyhow!("PRIVATE_KEY is not a valid signing key"))?;
	let provider = ProviderBuilder::new()
		.wallet(EthereumWallet::from(signer))
		.connect_http(rpc_url.parse().context("RPC_URL is not a valid URL")?);

	let tx = TransactionRequest::default().with_deploy_code(bytecode);

	let receipt = provider
		.send_transaction(tx)
		.await
		.context("failed to submit deployment transaction")?
		.get_receipt()
		.await
		.context("failed while waiting for deployment confirmation")?;

	if !receipt.status() {
		return Err(anyhow!("deployment transaction reverted"));
	}

	let address = receipt
		.contract_address
		.ok_or_else(|| anyhow!("deployment receipt carries no contract address"))?;

	Ok(address.to_string())
}

/// Reads the creation bytecode from a compiled artifact JSON.
fn load_creation_bytecode(path: &str) -> Result<Bytes> {
	let raw = std::fs::read_to_string(path)
		.with_context(|| format!("failed to read artifact {}", path))?;
	let artifact: serde_json::Value =
		serde_json::from_str(&raw).with_context(|| format!("artifact {} is not JSON", path))?;

	let bytecode = artifact
		.get("bytecode")
		.and_then(|v| v.as_str())
		.ok_or_else(|| anyhow!("artifact {} has no bytecode field", path))?;

	let bytes = hex::decode(bytecode.trim_start_matches("0x"))
		.with_context(|| format!("artifact {} bytecode is not hex", path))?;

	Ok(Bytes::from(bytes))
}
