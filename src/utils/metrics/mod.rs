//! Metrics module for the application.
//!
//! - This module contains the global Prometheus registry.
//! - Defines specific metrics for the application.

use lazy_static::lazy_static;
use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

lazy_static! {
	// Global Prometheus registry.
	pub static ref REGISTRY: Registry = Registry::new();

	// Counter for successfully confirmed award transactions.
	pub static ref AWARDS_ISSUED: IntCounter = {
		let counter =
			IntCounter::new("awards_issued_total", "Award transactions confirmed on chain")
				.unwrap();
		REGISTRY.register(Box::new(counter.clone())).unwrap();
		counter
	};

	// Counter for award calls that failed and were swallowed to `false`.
	pub static ref AWARD_FAILURES: IntCounter = {
		let counter =
			IntCounter::new("award_failures_total", "Award transactions that failed").unwrap();
		REGISTRY.register(Box::new(counter.clone())).unwrap();
		counter
	};

	// Counter for token balance reads.
	pub static ref BALANCE_QUERIES: IntCounter = {
		let counter =
			IntCounter::new("balance_queries_total", "Token balance reads attempted").unwrap();
		REGISTRY.register(Box::new(counter.clone())).unwrap();
		counter
	};

	// Counter for balance reads that failed and were swallowed to `None`.
	pub static ref BALANCE_FAILURES: IntCounter = {
		let counter =
			IntCounter::new("balance_failures_total", "Token balance reads that failed").unwrap();
		REGISTRY.register(Box::new(counter.clone())).unwrap();
		counter
	};

	// Counter for friend requests created.
	pub static ref FRIEND_REQUESTS_CREATED: IntCounter = {
		let counter =
			IntCounter::new("friend_requests_created_total", "Friend requests created").unwrap();
		REGISTRY.register(Box::new(counter.clone())).unwrap();
		counter
	};

	// Counter for friend requests resolved (accepted or declined).
	pub static ref FRIEND_REQUESTS_RESOLVED: IntCounter = {
		let counter = IntCounter::new(
			"friend_requests_resolved_total",
			"Friend requests accepted or declined",
		)
		.unwrap();
		REGISTRY.register(Box::new(counter.clone())).unwrap();
		counter
	};
}

/// Gathers all registered metrics in the Prometheus text exposition format.
pub fn gather_metrics() -> Result<Vec<u8>, prometheus::Error> {
	let encoder = TextEncoder::new();
	let metric_families = REGISTRY.gather();
	let mut buffer = Vec::new();
	encoder.encode(&metric_families, &mut buffer)?;
	Ok(buffer)
}
