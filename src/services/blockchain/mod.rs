//! Blockchain client plumbing.
//!
//! Provider construction and contract bindings shared by the award and token
//! services. All chain internals stay inside the alloy client library; this
//! module only wires it to the portal's configuration.

mod client;
pub mod contracts;
mod error;

pub use client::EvmClient;
pub use error::BlockChainError;
