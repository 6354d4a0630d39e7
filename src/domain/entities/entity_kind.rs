//! # Entity Kinds
//!
//! The two business entities served by the system.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which entity collection an operation targets.
///
/// Suppliers and products share the same shape and lifecycle; the kind only
/// selects the collection and the wording used in messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// A supplier of goods.
    Supplier,
    /// A product in the catalog.
    Product,
}

impl EntityKind {
    /// Collection name in the record store.
    #[must_use]
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Supplier => "Supplier",
            Self::Product => "Product",
        }
    }

    /// Singular lowercase noun, e.g. `supplier`.
    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Supplier => "supplier",
            Self::Product => "product",
        }
    }

    /// Plural lowercase noun, e.g. `suppliers`.
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Supplier => "suppliers",
            Self::Product => "products",
        }
    }

    /// Confirmation returned after a successful delete.
    #[must_use]
    pub const fn deleted_message(self) -> &'static str {
        match self {
            Self::Supplier => "Supplier deleted successfully",
            Self::Product => "Product deleted successfully",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}
