//! Fixed-point rendering of raw token amounts.
//!
//! ERC-20 amounts arrive as raw `U256` integers scaled by 10^18. The
//! conversion here is exact integer arithmetic: divide and take the
//! remainder, render the fraction zero-padded, trim trailing zeros. No
//! floating point is involved, so amounts near the top of the `U256` range
//! render without precision loss.

use alloy::primitives::U256;

/// Number of decimals the portal token uses
pub const TOKEN_DECIMALS: usize = 18;

/// 10^18, the scaling factor between raw and human-readable amounts
const SCALE: U256 = U256::from_limbs([1_000_000_000_000_000_000u64, 0, 0, 0]);

/// Renders a raw token amount as a decimal string.
///
/// A whole-number amount renders without a fractional part; in particular a
/// zero balance renders as `"0"`. Fractional parts are trimmed of trailing
/// zeros.
pub fn format_token_units(raw: U256) -> String {
	let integer = raw / SCALE;
	let fraction = raw % SCALE;

	if fraction.is_zero() {
		return integer.to_string();
	}

	let digits = fraction.to_string();
	let fraction = format!("{:0>width$}", digits, width = TOKEN_DECIMALS);
	let fraction = fraction.trim_end_matches('0');
	format!("{}.{}", integer, fraction)
}
