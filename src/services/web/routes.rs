//! HTTP route handlers.
//!
//! The portal's entire HTTP surface: profile connect, friend-request
//! management, the award trigger, prometheus metrics, and the embedded
//! browser assets. Bodies are JSON with camelCase keys, matching the browser
//! script.

use actix_web::{web, HttpResponse, Responder};
use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::models::{FriendRequest, Profile};
use crate::services::web::{error::WebError, AppState};
use crate::utils::metrics::{gather_metrics, FRIEND_REQUESTS_CREATED, FRIEND_REQUESTS_RESOLVED};

/// Body of `POST /user/profile`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectRequest {
	pub address: Address,
}

/// Response of `POST /user/profile`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
	pub profile: Profile,
	pub pending_requests: Vec<FriendRequest>,
	/// Token balance as a decimal string, `null` when the read failed
	pub balance: Option<String>,
}

/// Body of `POST /user/profile/addFriend`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFriendRequest {
	pub user_id: String,
	pub friend_id: String,
}

/// Body of `POST /user/friends/accept` and `POST /user/friends/decline`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveRequest {
	pub user_id: String,
	pub request_id: String,
}

/// Body of `POST /user/award`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardRequest {
	pub address: Address,
	pub token_uri: String,
}

/// Response of `POST /user/award`
#[derive(Debug, Serialize)]
pub struct AwardResponse {
	pub success: bool,
}

/// Registers all portal routes on an actix application.
pub fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(web::resource("/user/profile").route(web::post().to(connect_profile)))
		.service(web::resource("/user/profile/addFriend").route(web::post().to(add_friend)))
		.service(web::resource("/user/friends/accept").route(web::post().to(accept_friend)))
		.service(web::resource("/user/friends/decline").route(web::post().to(decline_friend)))
		.service(web::resource("/user/award").route(web::post().to(award)))
		.service(web::resource("/metrics").route(web::get().to(metrics_handler)))
		.service(web::resource("/").route(web::get().to(index)))
		.service(
			web::resource("/static/js/interactions.js").route(web::get().to(interactions_js)),
		);
}

/// `POST /user/profile`: get-or-create the profile for a wallet address.
///
/// The response also carries the profile's pending friend requests and its
/// token balance. A failed balance read surfaces as `null`, not as an HTTP
/// error.
async fn connect_profile(
	state: web::Data<AppState>,
	body: web::Json<ConnectRequest>,
) -> Result<HttpResponse, WebError> {
	let profile = state.profiles.get_or_create(body.address).await?;
	let pending_requests = state.profiles.pending_requests_for(&profile.id).await;
	let balance = state.tokens.balance_of(body.address).await;

	Ok(HttpResponse::Ok().json(ProfileResponse {
		profile,
		pending_requests,
		balance,
	}))
}

/// `POST /user/profile/addFriend`: create a pending friend request.
async fn add_friend(
	state: web::Data<AppState>,
	body: web::Json<AddFriendRequest>,
) -> Result<HttpResponse, WebError> {
	let request = state
		.profiles
		.create_friend_request(&body.user_id, &body.friend_id)
		.await?;

	FRIEND_REQUESTS_CREATED.inc();
	Ok(HttpResponse::Ok().json(request))
}

/// `POST /user/friends/accept`: accept a pending friend request.
async fn accept_friend(
	state: web::Data<AppState>,
	body: web::Json<ResolveRequest>,
) -> Result<HttpResponse, WebError> {
	let request = state
		.profiles
		.accept_friend_request(&body.user_id, &body.request_id)
		.await?;

	FRIEND_REQUESTS_RESOLVED.inc();
	Ok(HttpResponse::Ok().json(request))
}

/// `POST /user/friends/decline`: decline a pending friend request.
async fn decline_friend(
	state: web::Data<AppState>,
	body: web::Json<ResolveRequest>,
) -> Result<HttpResponse, WebError> {
	let request = state
		.profiles
		.decline_friend_request(&body.user_id, &body.request_id)
		.await?;

	FRIEND_REQUESTS_RESOLVED.inc();
	Ok(HttpResponse::Ok().json(request))
}

/// `POST /user/award`: trigger a server-signed award mint.
///
/// Always answers 200 with `{ "success": bool }`; failure detail stays in the
/// server log (sentinel semantics).
async fn award(state: web::Data<AppState>, body: web::Json<AwardRequest>) -> impl Responder {
	let success = state.awards.award_item(body.address, &body.token_uri).await;
	HttpResponse::Ok().json(AwardResponse { success })
}

/// `GET /metrics`: prometheus text exposition.
async fn metrics_handler() -> impl Responder {
	match gather_metrics() {
		Ok(buffer) => HttpResponse::Ok()
			.content_type("text/plain; version=0.0.4; charset=utf-8")
			.body(buffer),
		Err(e) => {
			error!("Failed to gather metrics: {}", e);
			HttpResponse::InternalServerError().body("Failed to gather metrics")
		}
	}
}

/// `GET /`: the embedded portal page.
async fn index() -> impl Responder {
	HttpResponse::Ok()
		.content_type("text/html; charset=utf-8")
		.body(include_str!("../../../static/index.html"))
}

/// `GET /static/js/interactions.js`: the embedded browser script.
async fn interactions_js() -> impl Responder {
	HttpResponse::Ok()
		.content_type("application/javascript; charset=utf-8")
		.body(include_str!("../../../static/js/interactions.js"))
}
