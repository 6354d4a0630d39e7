//! # gRPC Services
//!
//! gRPC service implementations using tonic.
//!
//! # Modules
//!
//! - [`status`]: Failure taxonomy to gRPC status codes
//! - [`supplier_service`]: `supplier.SupplierService` implementation
//! - [`product_service`]: `product.ProductService` implementation
//! - [`server`]: Hosting one entity microservice

pub mod product_service;
pub mod server;
pub mod status;
pub mod supplier_service;

pub use product_service::ProductServiceImpl;
pub use server::{serve_entity, serve_entity_with_listener};
pub use supplier_service::SupplierServiceImpl;
