//! Token balance read service.

mod service;
mod units;

pub use service::{TokenService, TokenServiceTrait};
pub use units::{format_token_units, TOKEN_DECIMALS};
