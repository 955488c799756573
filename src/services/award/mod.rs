//! Award (NFT) call service.

mod service;

pub use service::{AwardService, AwardServiceTrait};
