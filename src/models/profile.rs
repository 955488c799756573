//! Profile and friend-request domain types.
//!
//! These are the entities the portal's social surface operates on. They are
//! serialized camelCase on the wire to match the browser script.

use alloy::primitives::Address;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user profile keyed by wallet address
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
	/// Stable identifier, minted at first connect
	pub id: String,
	/// The wallet address this profile belongs to
	pub wallet_address: Address,
	/// Optional display name
	pub username: Option<String>,
	/// Optional avatar image URL
	pub avatar_url: Option<String>,
	/// Profile ids of confirmed friends
	pub friends: Vec<String>,
	/// When the profile was first created
	pub created_at: DateTime<Utc>,
}

impl Profile {
	/// Creates a fresh profile for a wallet address
	pub fn new(wallet_address: Address) -> Self {
		Self {
			id: Uuid::new_v4().to_string(),
			wallet_address,
			username: None,
			avatar_url: None,
			friends: Vec::new(),
			created_at: Utc::now(),
		}
	}

	/// Whether `other` is already a confirmed friend
	pub fn is_friend_of(&self, other: &str) -> bool {
		self.friends.iter().any(|id| id == other)
	}
}

/// Lifecycle state of a friend request
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FriendRequestStatus {
	Pending,
	Accepted,
	Declined,
}

/// A friend request between two profiles
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FriendRequest {
	/// Stable identifier for accept/decline calls
	pub id: String,
	/// Profile id of the sender
	pub from_user: String,
	/// Profile id of the addressee
	pub to_user: String,
	pub status: FriendRequestStatus,
	pub created_at: DateTime<Utc>,
}

impl FriendRequest {
	/// Creates a new pending request from `from_user` to `to_user`
	pub fn new(from_user: String, to_user: String) -> Self {
		Self {
			id: Uuid::new_v4().to_string(),
			from_user,
			to_user,
			status: FriendRequestStatus::Pending,
			created_at: Utc::now(),
		}
	}

	pub fn is_pending(&self) -> bool {
		self.status == FriendRequestStatus::Pending
	}

	/// Whether the request connects the same pair, in either direction
	pub fn links(&self, a: &str, b: &str) -> bool {
		(self.from_user == a && self.to_user == b) || (self.from_user == b && self.to_user == a)
	}
}
