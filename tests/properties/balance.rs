//! Property-based tests for fixed-point balance rendering.

use alloy::primitives::U256;
use proptest::prelude::*;

use award_portal::services::token::{format_token_units, TOKEN_DECIMALS};

/// Rebuilds the raw integer from a rendered decimal string.
fn reconstruct(rendered: &str) -> U256 {
	let (integer, fraction) = match rendered.split_once('.') {
		Some((i, f)) => (i, f),
		None => (rendered, ""),
	};
	let padded = format!("{:0<width$}", fraction, width = TOKEN_DECIMALS);
	U256::from_str_radix(&format!("{}{}", integer, padded), 10)
		.expect("rendered output should be decimal digits")
}

proptest! {
	#[test]
	fn rendering_is_exact_for_all_amounts(raw in any::<u128>()) {
		let rendered = format_token_units(U256::from(raw));
		prop_assert_eq!(reconstruct(&rendered), U256::from(raw));
	}

	#[test]
	fn fraction_is_trimmed_and_bounded(raw in any::<u128>()) {
		let rendered = format_token_units(U256::from(raw));

		if let Some((_, fraction)) = rendered.split_once('.') {
			prop_assert!(!fraction.is_empty());
			prop_assert!(fraction.len() <= TOKEN_DECIMALS);
			prop_assert!(!fraction.ends_with('0'));
		}
	}

	#[test]
	fn whole_token_amounts_render_without_fraction(units in any::<u32>()) {
		let raw = U256::from(units) * U256::from(10u64).pow(U256::from(TOKEN_DECIMALS));
		let rendered = format_token_units(raw);
		prop_assert_eq!(rendered, units.to_string());
	}
}
