//! Award portal service entry point.
//!
//! Resolves configuration from the environment, wires the blockchain-backed
//! services and the profile store, and serves the HTTP surface until the
//! process is interrupted.
//!
//! The service follows these main steps:
//! 1. Loads `.env` (if present) and the environment configuration
//! 2. Initializes the EVM client and the award/token/profile services
//! 3. Serves the portal routes, metrics, and embedded browser assets
//! 4. Shuts down gracefully on Ctrl+C

use actix_web::{web, App, HttpServer};
use tracing::info;

use award_portal::bootstrap::initialize_services;
use award_portal::models::AppConfig;
use award_portal::services::web::routes;
use award_portal::utils::setup_logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	dotenvy::dotenv().ok();
	setup_logging();

	let config = AppConfig::from_env()?;
	let state = initialize_services(&config)?;

	let listen_addr = config.listen_addr();
	info!(rpc_url = %config.rpc_url, %listen_addr, "starting award portal");

	HttpServer::new(move || {
		App::new()
			.app_data(web::Data::new(state.clone()))
			.configure(routes::configure)
	})
	.bind(&listen_addr)?
	.run()
	.await?;

	info!("Shutdown complete");
	Ok(())
}
