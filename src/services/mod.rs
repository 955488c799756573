//! Core services implementing the portal's functionality.
//!
//! - [`blockchain`]: Provider construction and contract bindings
//! - [`award`]: Server-signed NFT award calls
//! - [`token`]: ERC-20 balance reads
//! - [`web`]: HTTP handlers and shared application state

pub mod award;
pub mod blockchain;
pub mod token;
pub mod web;
