//! # Repository Traits
//!
//! Port definitions for the record store.
//!
//! The store is a keyed-document backend with one collection per
//! [`EntityKind`]. It assigns identifiers on insert and supports lookup by
//! primary key plus a full scan. Microservices talk to it only through
//! [`RecordStore`], so the backend can be swapped without touching request
//! handling.

use crate::domain::entities::{EntityFields, EntityKind, EntityRecord};
use crate::domain::value_objects::RecordId;
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a record store backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The backend could not be reached.
    #[error("connection error: {0}")]
    Connection(String),

    /// A query failed to execute.
    #[error("query error: {0}")]
    Query(String),

    /// A stored document could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl RepositoryError {
    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Creates a query error.
    #[must_use]
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query(message.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Keyed-document store holding supplier and product records.
///
/// Absence is reported through `Option`/`bool` rather than an error so that
/// callers decide how "not found" surfaces in their protocol.
#[async_trait]
pub trait RecordStore: Send + Sync + std::fmt::Debug {
    /// Inserts a new record and returns it with its assigned identifier.
    async fn insert(&self, kind: EntityKind, fields: EntityFields) -> RepositoryResult<EntityRecord>;

    /// Fetches a record by identifier.
    async fn get_by_id(&self, kind: EntityKind, id: &RecordId)
    -> RepositoryResult<Option<EntityRecord>>;

    /// Returns every record in the collection, oldest first.
    async fn list_all(&self, kind: EntityKind) -> RepositoryResult<Vec<EntityRecord>>;

    /// Replaces the fields of an existing record.
    ///
    /// Returns the updated record, or `None` if no record has this id.
    async fn update_by_id(
        &self,
        kind: EntityKind,
        id: &RecordId,
        fields: EntityFields,
    ) -> RepositoryResult<Option<EntityRecord>>;

    /// Deletes a record. Returns `true` if a record was removed.
    async fn delete_by_id(&self, kind: EntityKind, id: &RecordId) -> RepositoryResult<bool>;

    /// Releases backend resources. Called once on shutdown.
    async fn close(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_constructors() {
        assert_eq!(
            RepositoryError::connection("refused").to_string(),
            "connection error: refused"
        );
        assert_eq!(
            RepositoryError::query("syntax").to_string(),
            "query error: syntax"
        );
        assert_eq!(
            RepositoryError::serialization("bad json").to_string(),
            "serialization error: bad json"
        );
    }
}
