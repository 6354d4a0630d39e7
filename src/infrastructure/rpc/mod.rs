//! # RPC Clients
//!
//! gRPC clients for the entity microservices. Each implements
//! [`EntityGateway`](crate::application::gateway::EntityGateway), which is
//! how the GraphQL and REST façades reach the data.

pub mod channel;
pub mod product_client;
mod status;
pub mod supplier_client;

pub use channel::lazy_channel;
pub use product_client::ProductRpcClient;
pub use supplier_client::SupplierRpcClient;
