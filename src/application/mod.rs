//! # Application Layer
//!
//! Entity operations and the port the façades depend on.
//!
//! ## Port
//!
//! - [`EntityGateway`]: Get, search, create, update and delete for one
//!   collection
//!
//! ## Services
//!
//! - [`EntityService`]: Runs the operations against a record store

pub mod dto;
pub mod error;
pub mod gateway;
pub mod services;

pub use dto::{EntityInput, EntityView};
pub use error::{ApplicationError, ApplicationResult};
pub use gateway::{EntityGateway, Gateways};
pub use services::EntityService;
