//! Repository implementations for storing and retrieving application data.
//!
//! Repositories provide the storage layer behind the HTTP surface. The
//! profile repository is exposed behind a trait so handlers can be tested
//! against mocks.

mod error;
mod profile;

pub use error::RepositoryError;
pub use profile::{InMemoryProfileRepository, ProfileRepositoryTrait};
