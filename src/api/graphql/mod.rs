//! # GraphQL Façade
//!
//! GraphQL API over the entity microservices using async-graphql.
//!
//! # Modules
//!
//! - [`types`]: `Supplier` and `Product` object types
//! - [`schema`]: Query and mutation roots
//! - [`error`]: Resolver error codes
//! - [`routes`]: HTTP routes

pub mod error;
pub mod routes;
pub mod schema;
pub mod types;

pub use routes::create_graphql_router;
pub use schema::{CatalogSchema, MutationRoot, QueryRoot, build_schema};
