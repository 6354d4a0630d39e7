//! # Entity DTOs
//!
//! Data transfer objects shared by the REST and GraphQL façades.
//!
//! [`EntityInput`] is the `{name, description}` payload accepted by create
//! and update. Missing JSON keys deserialize to empty strings so that they
//! reach validation and fail there, instead of failing at the parser.
//! [`EntityView`] is the `{id, name, description}` shape returned to clients.

use crate::domain::entities::{EntityFields, EntityRecord};
use crate::domain::errors::DomainResult;
use serde::{Deserialize, Serialize};

/// Writable fields as supplied by a client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityInput {
    /// Entity name.
    #[serde(default)]
    pub name: String,
    /// Entity description.
    #[serde(default)]
    pub description: String,
}

impl EntityInput {
    /// Creates a new input.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Validates the input into domain fields.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if `name` or `description` is empty.
    pub fn validate(self) -> DomainResult<EntityFields> {
        EntityFields::new(self.name, self.description)
    }
}

/// A supplier or product as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityView {
    /// Store-assigned identifier.
    pub id: String,
    /// Entity name.
    pub name: String,
    /// Entity description.
    pub description: String,
}

impl From<&EntityRecord> for EntityView {
    fn from(record: &EntityRecord) -> Self {
        Self {
            id: record.id().to_string(),
            name: record.name().to_string(),
            description: record.description().to_string(),
        }
    }
}

impl From<EntityRecord> for EntityView {
    fn from(record: EntityRecord) -> Self {
        Self::from(&record)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::RecordId;

    #[test]
    fn missing_keys_deserialize_empty() {
        let input: EntityInput = serde_json::from_str(r#"{"name":"Widget"}"#).unwrap();
        assert_eq!(input.description, "");
        assert!(input.validate().is_err());
    }

    #[test]
    fn valid_input_validates() {
        let fields = EntityInput::new("Widget", "A widget").validate().unwrap();
        assert_eq!(fields.name(), "Widget");
    }

    #[test]
    fn view_from_record() {
        let record = EntityRecord::new(
            RecordId::new("7"),
            EntityFields::new("Acme", "Bolts supplier").unwrap(),
        );
        let view = EntityView::from(&record);
        assert_eq!(view.id, "7");
        assert_eq!(view.name, "Acme");
        assert_eq!(view.description, "Bolts supplier");
    }
}
