//! Award portal service library.
//!
//! A small web application server that lets a browser-wallet user load a
//! social profile, manage friend requests, trigger a server-signed NFT award
//! mint, and read an ERC-20 token balance. Chain access goes through the
//! alloy client library against a configured JSON-RPC endpoint; the HTTP
//! surface is served with actix-web.

pub mod bootstrap;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;

pub use models::{AppConfig, FriendRequest, FriendRequestStatus, Profile, SecretString};
pub use repositories::{InMemoryProfileRepository, ProfileRepositoryTrait};
pub use services::award::{AwardService, AwardServiceTrait};
pub use services::blockchain::EvmClient;
pub use services::token::{format_token_units, TokenService, TokenServiceTrait};
pub use services::web::AppState;
