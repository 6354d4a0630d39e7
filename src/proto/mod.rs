//! # Wire Contract
//!
//! Generated protobuf types for the entity microservices, and conversions
//! between their messages and domain records.
//!
//! Both sides of the RPC boundary use this module: the services in
//! [`crate::api::grpc`] and the clients in [`crate::infrastructure::rpc`].

pub mod conversions;

pub use conversions::ConversionError;

/// Metadata key on an `Internal` status naming what failed.
pub const FAILURE_KIND_METADATA: &str = "x-failure-kind";

/// [`FAILURE_KIND_METADATA`] value for record store failures.
pub const STORE_FAILURE: &str = "store";

/// `supplier.SupplierService` contract.
#[allow(missing_docs, clippy::all, clippy::pedantic)]
pub mod supplier {
    tonic::include_proto!("supplier");
}

/// `product.ProductService` contract.
#[allow(missing_docs, clippy::all, clippy::pedantic)]
pub mod product {
    tonic::include_proto!("product");
}
