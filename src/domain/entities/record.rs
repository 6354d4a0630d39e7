//! # Entity Records
//!
//! The stored shape shared by suppliers and products.
//!
//! An [`EntityFields`] value is the client-writable part of a record and is
//! validated on construction, so any value of that type already satisfies the
//! "name and description are present" invariant. An [`EntityRecord`] adds the
//! store-assigned [`RecordId`].
//!
//! # Examples
//!
//! ```
//! use catalog_gateway::domain::entities::{EntityFields, EntityRecord};
//! use catalog_gateway::domain::value_objects::RecordId;
//!
//! let fields = EntityFields::new("Acme", "Bolts supplier").unwrap();
//! let record = EntityRecord::new(RecordId::new("1"), fields);
//! assert_eq!(record.name(), "Acme");
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::RecordId;
use serde::{Deserialize, Serialize};

/// Writable fields of a supplier or product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityFields {
    name: String,
    description: String,
}

impl EntityFields {
    /// Creates validated fields.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingField`] if `name` or `description` is
    /// empty. Whitespace counts as a value.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        let description = description.into();

        if name.is_empty() {
            return Err(DomainError::MissingField("name"));
        }
        if description.is_empty() {
            return Err(DomainError::MissingField("description"));
        }

        Ok(Self { name, description })
    }

    /// Returns the name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A stored supplier or product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    id: RecordId,
    #[serde(flatten)]
    fields: EntityFields,
}

impl EntityRecord {
    /// Creates a record from an identifier and validated fields.
    #[must_use]
    pub fn new(id: RecordId, fields: EntityFields) -> Self {
        Self { id, fields }
    }

    /// Returns the record identifier.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Returns the name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        self.fields.name()
    }

    /// Returns the description.
    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        self.fields.description()
    }
}
