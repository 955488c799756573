#![no_main]

use alloy::primitives::U256;
use award_portal::services::token::format_token_units;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: [u8; 32]| {
	let raw = U256::from_be_bytes(data);
	let rendered = format_token_units(raw);

	// Rendering must never panic and must always produce decimal output
	assert!(!rendered.is_empty());
	assert!(rendered
		.chars()
		.all(|c| c.is_ascii_digit() || c == '.'));
});
