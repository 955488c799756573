//! Profile repository implementation.
//!
//! Stores profiles and friend requests for the portal's social surface. The
//! trait seam exists so HTTP handlers can be tested against a mock; the
//! shipped implementation is an in-memory store living for the process
//! lifetime (durable persistence is out of scope).

use std::collections::HashMap;

use alloy::primitives::Address;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{FriendRequest, FriendRequestStatus, Profile};
use crate::repositories::error::RepositoryError;

/// Interface for profile and friend-request storage
#[async_trait]
pub trait ProfileRepositoryTrait: Send + Sync {
	/// Returns the profile for a wallet address, creating it on first sight.
	async fn get_or_create(&self, address: Address) -> Result<Profile, RepositoryError>;

	/// Looks up a profile by id.
	async fn get(&self, user_id: &str) -> Option<Profile>;

	/// Creates a pending friend request from `user_id` to `friend_id`.
	async fn create_friend_request(
		&self,
		user_id: &str,
		friend_id: &str,
	) -> Result<FriendRequest, RepositoryError>;

	/// Accepts a pending request addressed to `user_id`.
	///
	/// Both profiles gain a friend entry.
	async fn accept_friend_request(
		&self,
		user_id: &str,
		request_id: &str,
	) -> Result<FriendRequest, RepositoryError>;

	/// Declines a pending request addressed to `user_id`.
	async fn decline_friend_request(
		&self,
		user_id: &str,
		request_id: &str,
	) -> Result<FriendRequest, RepositoryError>;

	/// Pending requests addressed to `user_id`.
	async fn pending_requests_for(&self, user_id: &str) -> Vec<FriendRequest>;
}

#[derive(Default)]
struct ProfileStore {
	/// Profiles keyed by profile id
	profiles: HashMap<String, Profile>,
	/// Wallet address to profile id index
	by_address: HashMap<Address, String>,
	/// Friend requests keyed by request id
	requests: HashMap<String, FriendRequest>,
}

/// In-memory profile repository
#[derive(Default)]
pub struct InMemoryProfileRepository {
	store: RwLock<ProfileStore>,
}

impl InMemoryProfileRepository {
	pub fn new() -> Self {
		Self::default()
	}

	fn request_metadata(user_id: &str, request_id: &str) -> HashMap<String, String> {
		HashMap::from([
			("user_id".to_string(), user_id.to_string()),
			("request_id".to_string(), request_id.to_string()),
		])
	}

	/// Looks up a pending request and checks the caller is its addressee.
	fn take_pending<'a>(
		store: &'a mut ProfileStore,
		user_id: &str,
		request_id: &str,
	) -> Result<&'a mut FriendRequest, RepositoryError> {
		let request = store.requests.get_mut(request_id).ok_or_else(|| {
			RepositoryError::not_found_error(
				format!("No friend request with id {}", request_id),
				Some(Self::request_metadata(user_id, request_id)),
			)
		})?;

		if !request.is_pending() {
			return Err(RepositoryError::validation_error(
				format!("Friend request {} is already resolved", request_id),
				Some(Self::request_metadata(user_id, request_id)),
			));
		}

		if request.to_user != user_id {
			return Err(RepositoryError::validation_error(
				format!("Friend request {} is not addressed to this user", request_id),
				Some(Self::request_metadata(user_id, request_id)),
			));
		}

		Ok(request)
	}
}

#[async_trait]
impl ProfileRepositoryTrait for InMemoryProfileRepository {
	async fn get_or_create(&self, address: Address) -> Result<Profile, RepositoryError> {
		let mut store = self.store.write().await;

		if let Some(id) = store.by_address.get(&address) {
			let id = id.clone();
			return store.profiles.get(&id).cloned().ok_or_else(|| {
				RepositoryError::internal_error(
					"Address index points at a missing profile",
					None,
					Some(HashMap::from([(
						"address".to_string(),
						address.to_string(),
					)])),
				)
			});
		}

		let profile = Profile::new(address);
		store.by_address.insert(address, profile.id.clone());
		store.profiles.insert(profile.id.clone(), profile.clone());
		Ok(profile)
	}

	async fn get(&self, user_id: &str) -> Option<Profile> {
		self.store.read().await.profiles.get(user_id).cloned()
	}

	async fn create_friend_request(
		&self,
		user_id: &str,
		friend_id: &str,
	) -> Result<FriendRequest, RepositoryError> {
		if user_id == friend_id {
			return Err(RepositoryError::validation_error(
				"Cannot send a friend request to yourself",
				None,
			));
		}

		let mut store = self.store.write().await;

		let sender = store.profiles.get(user_id).cloned().ok_or_else(|| {
			RepositoryError::not_found_error(format!("No profile with id {}", user_id), None)
		})?;
		if !store.profiles.contains_key(friend_id) {
			return Err(RepositoryError::not_found_error(
				format!("No profile with id {}", friend_id),
				None,
			));
		}

		if sender.is_friend_of(friend_id) {
			return Err(RepositoryError::validation_error(
				"Users are already friends",
				None,
			));
		}

		// Reject duplicates in either direction
		if store
			.requests
			.values()
			.any(|r| r.is_pending() && r.links(user_id, friend_id))
		{
			return Err(RepositoryError::validation_error(
				"A pending friend request already exists between these users",
				None,
			));
		}

		let request = FriendRequest::new(user_id.to_string(), friend_id.to_string());
		store.requests.insert(request.id.clone(), request.clone());
		Ok(request)
	}

	async fn accept_friend_request(
		&self,
		user_id: &str,
		request_id: &str,
	) -> Result<FriendRequest, RepositoryError> {
		let mut store = self.store.write().await;

		let (from_user, to_user) = {
			let request = Self::take_pending(&mut store, user_id, request_id)?;
			request.status = FriendRequestStatus::Accepted;
			(request.from_user.clone(), request.to_user.clone())
		};

		if let Some(profile) = store.profiles.get_mut(&from_user) {
			profile.friends.push(to_user.clone());
		}
		if let Some(profile) = store.profiles.get_mut(&to_user) {
			profile.friends.push(from_user);
		}

		store
			.requests
			.get(request_id)
			.cloned()
			.ok_or_else(|| RepositoryError::internal_error("Accepted request vanished", None, None))
	}

	async fn decline_friend_request(
		&self,
		user_id: &str,
		request_id: &str,
	) -> Result<FriendRequest, RepositoryError> {
		let mut store = self.store.write().await;

		let request = Self::take_pending(&mut store, user_id, request_id)?;
		request.status = FriendRequestStatus::Declined;
		Ok(request.clone())
	}

	async fn pending_requests_for(&self, user_id: &str) -> Vec<FriendRequest> {
		self.store
			.read()
			.await
			.requests
			.values()
			.filter(|r| r.is_pending() && r.to_user == user_id)
			.cloned()
			.collect()
	}
}
