//! # REST Façade
//!
//! HTTP/JSON API over the entity microservices using axum.
//!
//! # Modules
//!
//! - [`handlers`]: Request handlers
//! - [`routes`]: Router construction
//! - [`error`]: Plain-text error responses

pub mod error;
pub mod handlers;
pub mod routes;

pub use error::RestError;
pub use routes::create_router;
