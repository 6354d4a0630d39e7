//! # Domain Layer
//!
//! Core types shared by every protocol surface.
//!
//! This layer contains:
//! - **Entities**: Supplier and product records
//! - **Value Objects**: Record identifiers
//! - **Errors**: Field validation errors

pub mod entities;
pub mod errors;
pub mod value_objects;
