//! # Application Services
//!
//! - [`EntityService`]: Store-backed entity operations

pub mod entity_service;

pub use entity_service::EntityService;
