//! # Application Errors
//!
//! Error types for the application layer.
//!
//! [`ApplicationError`] is the failure taxonomy every protocol surface maps
//! from: validation, not-found, store failures, and failures talking to an
//! upstream entity service.

use crate::domain::entities::EntityKind;
use crate::domain::errors::DomainError;
use crate::infrastructure::persistence::RepositoryError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    /// A required field was missing or empty. No store access happened.
    #[error("validation error: {0}")]
    Validation(String),

    /// No record with this id exists in the collection.
    #[error("{entity} not found")]
    NotFound {
        /// Collection that was searched.
        entity: EntityKind,
        /// The id that was looked up.
        id: String,
    },

    /// The record store failed or was unreachable.
    #[error("store error: {0}")]
    Store(String),

    /// An entity microservice could not be reached or failed unexpectedly.
    #[error("upstream service error: {0}")]
    Upstream(String),
}

impl ApplicationError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a not-found error.
    #[must_use]
    pub fn not_found(entity: EntityKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Creates a store error.
    #[must_use]
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store(message.into())
    }

    /// Creates an upstream error.
    #[must_use]
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }

    /// Returns true for [`ApplicationError::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        Self::Store(err.to_string())
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
