//! HTTP surface of the portal.
//!
//! Shared application state plus the route handlers and their error mapping.

mod error;
pub mod routes;

pub use error::WebError;

use std::sync::Arc;

use crate::repositories::ProfileRepositoryTrait;
use crate::services::award::AwardServiceTrait;
use crate::services::token::TokenServiceTrait;

/// Shared state handed to every route handler.
///
/// Services sit behind trait objects so route tests can substitute mocks.
#[derive(Clone)]
pub struct AppState {
	pub awards: Arc<dyn AwardServiceTrait>,
	pub tokens: Arc<dyn TokenServiceTrait>,
	pub profiles: Arc<dyn ProfileRepositoryTrait>,
}

impl AppState {
	pub fn new(
		awards: Arc<dyn AwardServiceTrait>,
		tokens: Arc<dyn TokenServiceTrait>,
		profiles: Arc<dyn ProfileRepositoryTrait>,
	) -> Self {
		Self {
			awards,
			tokens,
			profiles,
		}
	}
}
