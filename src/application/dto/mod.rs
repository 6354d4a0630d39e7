//! # Data Transfer Objects
//!
//! Request and response shapes used at the HTTP boundaries.

pub mod entity_dto;

pub use entity_dto::{EntityInput, EntityView};
