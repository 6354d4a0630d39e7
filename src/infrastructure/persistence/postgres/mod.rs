//! # PostgreSQL Repositories
//!
//! PostgreSQL implementation of the record store using sqlx.

pub mod record_store;

pub use record_store::PostgresRecordStore;
