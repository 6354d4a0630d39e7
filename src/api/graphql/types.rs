//! GraphQL object types.

use crate::domain::entities::EntityRecord;
use async_graphql::SimpleObject;

/// A supplier.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct Supplier {
    /// Store-assigned identifier.
    pub id: String,
    /// Supplier name.
    pub name: String,
    /// Supplier description.
    pub description: String,
}

/// A product.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct Product {
    /// Store-assigned identifier.
    pub id: String,
    /// Product name.
    pub name: String,
    /// Product description.
    pub description: String,
}

impl From<EntityRecord> for Supplier {
    fn from(record: EntityRecord) -> Self {
        Self {
            id: record.id().to_string(),
            name: record.name().to_string(),
            description: record.description().to_string(),
        }
    }
}

impl From<EntityRecord> for Product {
    fn from(record: EntityRecord) -> Self {
        Self {
            id: record.id().to_string(),
            name: record.name().to_string(),
            description: record.description().to_string(),
        }
    }
}
