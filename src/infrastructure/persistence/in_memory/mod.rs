//! # In-Memory Repositories
//!
//! Thread-safe in-memory store for tests and local runs.

pub mod record_store;

pub use record_store::InMemoryRecordStore;
