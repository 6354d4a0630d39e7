//! # Domain Errors
//!
//! Typed domain error definitions.
//!
//! The only rule the domain enforces is that the writable fields of an
//! entity are present and non-empty.
//!
//! # Examples
//!
//! ```
//! use catalog_gateway::domain::errors::DomainError;
//!
//! let error = DomainError::MissingField("name");
//! assert_eq!(error.to_string(), "name is required");
//! ```

use thiserror::Error;

/// Domain-level validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A required field was absent or empty.
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
