//! Contract bindings for the portal's two on-chain dependencies.
//!
//! Bindings are generated with `alloy::sol!` from the callable surface the
//! portal actually uses. The full contract sources are compiled in a separate
//! build step; only the deployed addresses and these two functions matter
//! here.

use alloy::sol;

sol! {
	/// Award (NFT) contract: mints a token with the given metadata URI to a
	/// recipient. Only the function the portal calls is declared.
	#[sol(rpc)]
	contract ItemAward {
		function awardItem(address recipient, string tokenURI) public returns (uint256);
	}
}

sol! {
	/// ERC-20 token contract: only the balance accessor is declared.
	#[sol(rpc)]
	contract PortalToken {
		function balanceOf(address account) public view returns (uint256);
	}
}
