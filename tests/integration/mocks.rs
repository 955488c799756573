//! Mock implementations of the service and repository seams.

use alloy::primitives::Address;
use async_trait::async_trait;
use mockall::mock;

use award_portal::models::{FriendRequest, Profile};
use award_portal::repositories::{ProfileRepositoryTrait, RepositoryError};
use award_portal::services::award::AwardServiceTrait;
use award_portal::services::token::TokenServiceTrait;

mock! {
	pub AwardService {}

	#[async_trait]
	impl AwardServiceTrait for AwardService {
		async fn award_item(&self, recipient: Address, token_uri: &str) -> bool;
	}
}

mock! {
	pub TokenService {}

	#[async_trait]
	impl TokenServiceTrait for TokenService {
		async fn balance_of(&self, holder: Address) -> Option<String>;
	}
}

mock! {
	pub ProfileRepository {}

	#[async_trait]
	impl ProfileRepositoryTrait for ProfileRepository {
		async fn get_or_create(&self, address: Address) -> Result<Profile, RepositoryError>;
		async fn get(&self, user_id: &str) -> Option<Profile>;
		async fn create_friend_request(
			&self,
			user_id: &str,
			friend_id: &str,
		) -> Result<FriendRequest, RepositoryError>;
		async fn accept_friend_request(
			&self,
			user_id: &str,
			request_id: &str,
		) -> Result<FriendRequest, RepositoryError>;
		async fn decline_friend_request(
			&self,
			user_id: &str,
			request_id: &str,
		) -> Result<FriendRequest, RepositoryError>;
		async fn pending_requests_for(&self, user_id: &str) -> Vec<FriendRequest>;
	}
}
