//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! - [`RecordId`]: Opaque, store-assigned record identifier

pub mod ids;

pub use ids::RecordId;
