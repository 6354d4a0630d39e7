//! # Persistence Layer
//!
//! Record store port and its implementations.

pub mod in_memory;
pub mod postgres;
pub mod traits;

pub use traits::{RecordStore, RepositoryError, RepositoryResult};
