//! # Domain Entities
//!
//! - [`EntityKind`]: Supplier or Product
//! - [`EntityFields`]: Validated writable fields
//! - [`EntityRecord`]: A stored record with its identifier

pub mod entity_kind;
pub mod record;

pub use entity_kind::EntityKind;
pub use record::{EntityFields, EntityRecord};
