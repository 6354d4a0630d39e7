//! # Identity Value Objects
//!
//! Identifier wrapper for stored records.
//!
//! Record identifiers are assigned by the record store when a record is
//! created. Callers treat them as opaque strings: the gateway never parses
//! them, it only hands them back to the store.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Record identifier.
///
/// A string-based identifier uniquely identifying a record within one
/// collection. Stores generate new identifiers with [`RecordId::generate`].
///
/// # Examples
///
/// ```
/// use catalog_gateway::domain::value_objects::ids::RecordId;
///
/// let id = RecordId::new("6650f0c2a1");
/// assert_eq!(id.as_str(), "6650f0c2a1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Creates a record ID from an existing string.
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh record ID (hyphenated UUID v4).
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().hyphenated().to_string())
    }

    /// Returns the record ID as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the RecordId and returns the inner String.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RecordId {
    #[inline]
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RecordId {
    #[inline]
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl AsRef<str> for RecordId {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn generate_produces_unique_ids() {
        let id1 = RecordId::generate();
        let id2 = RecordId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn generated_id_is_hyphenated_uuid() {
        let id = RecordId::generate();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
        assert_eq!(id.as_str().len(), 36);
    }

    #[test]
    fn display_is_raw_string() {
        let id = RecordId::new("abc-123");
        assert_eq!(id.to_string(), "abc-123");
    }

    #[test]
    fn serde_is_transparent() {
        let id = RecordId::new("abc-123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc-123\"");
        let back: RecordId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn into_inner_returns_string() {
        let id = RecordId::from("xyz");
        assert_eq!(id.into_inner(), "xyz".to_string());
    }
}
