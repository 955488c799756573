//! Token balance reads against a mocked JSON-RPC endpoint.

use alloy::primitives::Address;
use mockito::{Matcher, Server};
use serde_json::json;

use award_portal::services::blockchain::EvmClient;
use award_portal::services::token::{TokenService, TokenServiceTrait};

const TOKEN_CONTRACT: &str = "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512";

fn token_service(rpc_url: &str) -> TokenService {
	let client = EvmClient::read_only(rpc_url.parse().expect("mockito URL should parse"));
	TokenService::new(client, TOKEN_CONTRACT.parse().unwrap())
}

/// Encodes a uint256 call result as a 32-byte hex word.
fn uint_word(value: u128) -> String {
	format!("0x{:064x}", value)
}

#[tokio::test]
async fn test_zero_balance_renders_as_zero() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("POST", "/")
		.match_body(Matcher::PartialJsonString(
			r#"{"method":"eth_call"}"#.to_string(),
		))
		.with_header("content-type", "application/json")
		.with_body(json!({ "jsonrpc": "2.0", "id": 0, "result": uint_word(0) }).to_string())
		.create_async()
		.await;

	let service = token_service(&server.url());
	let balance = service.balance_of(Address::ZERO).await;

	assert_eq!(balance, Some("0".to_string()));
	mock.assert_async().await;
}

#[tokio::test]
async fn test_balance_is_scaled_to_a_decimal_string() {
	let mut server = Server::new_async().await;
	let _mock = server
		.mock("POST", "/")
		.match_body(Matcher::PartialJsonString(
			r#"{"method":"eth_call"}"#.to_string(),
		))
		.with_header("content-type", "application/json")
		.with_body(
			json!({
				"jsonrpc": "2.0",
				"id": 0,
				"result": uint_word(1_500_000_000_000_000_000)
			})
			.to_string(),
		)
		.create_async()
		.await;

	let service = token_service(&server.url());
	let balance = service.balance_of(Address::ZERO).await;

	assert_eq!(balance, Some("1.5".to_string()));
}

#[tokio::test]
async fn test_rpc_failure_is_swallowed_to_none() {
	let mut server = Server::new_async().await;
	let _mock = server
		.mock("POST", "/")
		.with_status(500)
		.with_body("upstream unavailable")
		.create_async()
		.await;

	let service = token_service(&server.url());
	let balance = service.balance_of(Address::ZERO).await;

	assert_eq!(balance, None);
}

#[tokio::test]
async fn test_rpc_error_response_is_swallowed_to_none() {
	let mut server = Server::new_async().await;
	let _mock = server
		.mock("POST", "/")
		.with_header("content-type", "application/json")
		.with_body(
			json!({
				"jsonrpc": "2.0",
				"id": 0,
				"error": { "code": -32000, "message": "execution reverted" }
			})
			.to_string(),
		)
		.create_async()
		.await;

	let service = token_service(&server.url());
	let balance = service.balance_of(Address::ZERO).await;

	assert_eq!(balance, None);
}
