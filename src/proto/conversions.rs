//! Conversions between Protocol Buffer messages and domain records.
//!
//! - `From<&EntityRecord> for ProtoType`: domain to proto (infallible)
//! - `TryFrom<ProtoType> for EntityRecord`: proto to domain (fallible, the
//!   fields are re-validated)

use crate::domain::entities::{EntityFields, EntityRecord};
use crate::domain::value_objects::RecordId;
use crate::proto::{product, supplier};
use thiserror::Error;

/// Error type for conversion failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Missing required field.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Invalid field value.
    #[error("invalid {field}: {message}")]
    InvalidValue {
        /// Field name.
        field: &'static str,
        /// Error message.
        message: String,
    },
}

fn record_from_parts(
    id: String,
    name: String,
    description: String,
) -> Result<EntityRecord, ConversionError> {
    if id.is_empty() {
        return Err(ConversionError::MissingField("id"));
    }
    let fields = EntityFields::new(name, description).map_err(|e| ConversionError::InvalidValue {
        field: "fields",
        message: e.to_string(),
    })?;
    Ok(EntityRecord::new(RecordId::new(id), fields))
}

// ============================================================================
// Supplier
// ============================================================================

impl From<&EntityRecord> for supplier::Supplier {
    fn from(record: &EntityRecord) -> Self {
        Self {
            id: record.id().to_string(),
            name: record.name().to_string(),
            description: record.description().to_string(),
        }
    }
}

impl TryFrom<supplier::Supplier> for EntityRecord {
    type Error = ConversionError;

    fn try_from(proto: supplier::Supplier) -> Result<Self, Self::Error> {
        record_from_parts(proto.id, proto.name, proto.description)
    }
}

// ============================================================================
// Product
// ============================================================================

impl From<&EntityRecord> for product::Product {
    fn from(record: &EntityRecord) -> Self {
        Self {
            id: record.id().to_string(),
            name: record.name().to_string(),
            description: record.description().to_string(),
        }
    }
}

impl TryFrom<product::Product> for EntityRecord {
    type Error = ConversionError;

    fn try_from(proto: product::Product) -> Result<Self, Self::Error> {
        record_from_parts(proto.id, proto.name, proto.description)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn record() -> EntityRecord {
        EntityRecord::new(
            RecordId::new("abc"),
            EntityFields::new("Acme", "Bolts supplier").unwrap(),
        )
    }

    #[test]
    fn supplier_message_carries_all_fields() {
        let proto = supplier::Supplier::from(&record());
        assert_eq!(proto.id, "abc");
        assert_eq!(proto.name, "Acme");
        assert_eq!(proto.description, "Bolts supplier");
    }

    #[test]
    fn product_message_back_to_record() {
        let proto = product::Product {
            id: "p1".to_string(),
            name: "Widget".to_string(),
            description: "A widget".to_string(),
        };
        let record = EntityRecord::try_from(proto).unwrap();
        assert_eq!(record.id().as_str(), "p1");
        assert_eq!(record.name(), "Widget");
    }

    #[test]
    fn message_without_id_is_rejected() {
        let proto = supplier::Supplier {
            id: String::new(),
            name: "Acme".to_string(),
            description: "Bolts".to_string(),
        };
        assert_eq!(
            EntityRecord::try_from(proto).unwrap_err(),
            ConversionError::MissingField("id")
        );
    }

    #[test]
    fn message_with_empty_name_is_rejected() {
        let proto = product::Product {
            id: "p1".to_string(),
            name: String::new(),
            description: "A widget".to_string(),
        };
        assert!(matches!(
            EntityRecord::try_from(proto).unwrap_err(),
            ConversionError::InvalidValue { .. }
        ));
    }
}
