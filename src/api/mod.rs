//! # API Layer
//!
//! External interfaces of the catalog.
//!
//! ## Protocols
//!
//! - **gRPC**: The entity microservices (`supplier.SupplierService`,
//!   `product.ProductService`)
//! - **GraphQL**: Gateway façade over the microservices
//! - **REST**: Gateway façade over the microservices

pub mod graphql;
pub mod grpc;
pub mod rest;

pub use graphql as graphql_api;
pub use grpc as grpc_api;
pub use rest as rest_api;
