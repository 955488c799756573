//! Award calls against a failing JSON-RPC endpoint.
//!
//! The success path needs a full transaction pipeline (nonce, gas, receipt
//! polling) and is covered at the HTTP seam in `web.rs`; here we pin the
//! sentinel behavior: a failed award call returns `false` and never
//! propagates.

use std::collections::HashMap;

use alloy::primitives::Address;
use mockito::Server;

use award_portal::models::config::{
	AppConfig, AWARD_CONTRACT_VAR, PRIVATE_KEY_VAR, RPC_URL_VAR, TOKEN_CONTRACT_VAR,
};
use award_portal::services::award::{AwardService, AwardServiceTrait};
use award_portal::services::blockchain::EvmClient;

// First hardhat/anvil development key
const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

fn award_service(rpc_url: &str) -> AwardService {
	let vars = HashMap::from([
		(RPC_URL_VAR.to_string(), rpc_url.to_string()),
		(PRIVATE_KEY_VAR.to_string(), DEV_KEY.to_string()),
		(
			AWARD_CONTRACT_VAR.to_string(),
			"0x5FbDB2315678afecb367f032d93F642f64180aa3".to_string(),
		),
		(
			TOKEN_CONTRACT_VAR.to_string(),
			"0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512".to_string(),
		),
	]);
	let config = AppConfig::from_vars(&vars).expect("config should resolve");
	let client = EvmClient::new(&config).expect("client should build");
	AwardService::new(client, config.award_contract)
}

#[tokio::test]
async fn test_failed_award_returns_false_instead_of_erroring() {
	let mut server = Server::new_async().await;
	let _mock = server
		.mock("POST", "/")
		.with_status(500)
		.with_body("upstream unavailable")
		.expect_at_least(1)
		.create_async()
		.await;

	let service = award_service(&server.url());
	let success = service
		.award_item(Address::ZERO, "ipfs://metadata/1.json")
		.await;

	assert!(!success);
}

#[tokio::test]
async fn test_unreachable_endpoint_returns_false() {
	// Nothing listens on this port
	let service = award_service("http://127.0.0.1:9");
	let success = service
		.award_item(Address::ZERO, "ipfs://metadata/1.json")
		.await;

	assert!(!success);
}
