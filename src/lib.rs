//! # Catalog Gateway
//!
//! Supplier and product catalog served over three protocols: two gRPC entity
//! microservices, and a gateway exposing them as GraphQL and REST.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Domain Layer** (`domain`): Entity records, identifiers, field validation
//! - **Application Layer** (`application`): Entity operations and the gateway port
//! - **Infrastructure Layer** (`infrastructure`): Record stores and gRPC clients
//! - **API Layer** (`api`): gRPC services, GraphQL and REST façades
//! - **Wire Contract** (`proto`): Generated protobuf types shared by the
//!   gRPC services and clients
//!
//! ```text
//! REST :3000 ─┐                      ┌─ supplier-service :50053 ─┐
//!             ├─ gRPC clients ───────┤                           ├─ record store
//! GraphQL :4000 ┘                    └─ product-service  :50054 ─┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use catalog_gateway::application::{EntityGateway, EntityInput};
//! use catalog_gateway::infrastructure::rpc::SupplierRpcClient;
//!
//! let suppliers = SupplierRpcClient::connect_lazy("http://localhost:50053")?;
//! let acme = suppliers
//!     .create(EntityInput::new("Acme", "Bolts supplier"))
//!     .await?;
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod proto;
