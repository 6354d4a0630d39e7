//! # Domain Errors
//!
//! Typed error types for domain operations.
//!
//! # Examples
//!
//! ```
//! use catalog_gateway::domain::errors::{DomainError, DomainResult};
//!
//! fn require(value: &str) -> DomainResult<&str> {
//!     if value.is_empty() {
//!         return Err(DomainError::MissingField("name"));
//!     }
//!     Ok(value)
//! }
//!
//! assert!(require("").is_err());
//! ```

pub mod domain_error;

pub use domain_error::{DomainError, DomainResult};
