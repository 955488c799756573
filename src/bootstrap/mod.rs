//! Service initialization glue.
//!
//! Wires configuration into clients and services, producing the shared
//! [`AppState`] the HTTP server runs on.

use std::sync::Arc;

use crate::models::AppConfig;
use crate::repositories::InMemoryProfileRepository;
use crate::services::award::AwardService;
use crate::services::blockchain::{BlockChainError, EvmClient};
use crate::services::token::TokenService;
use crate::services::web::AppState;

/// Builds the application state from a resolved configuration.
///
/// # Errors
/// Returns a [`BlockChainError`] when the configured signing key is invalid.
pub fn initialize_services(config: &AppConfig) -> Result<AppState, BlockChainError> {
	let client = EvmClient::new(config)?;

	let award_service = AwardService::new(client.clone(), config.award_contract);
	let token_service = TokenService::new(client, config.token_contract);
	let profile_repository = InMemoryProfileRepository::new();

	Ok(AppState::new(
		Arc::new(award_service),
		Arc::new(token_service),
		Arc::new(profile_repository),
	))
}
