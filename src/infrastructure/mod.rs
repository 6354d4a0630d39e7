//! # Infrastructure Layer
//!
//! External adapters and implementations of application ports.
//!
//! ## Persistence
//!
//! Record store implementations:
//! - PostgreSQL document table
//! - In-memory store for testing and local runs
//!
//! ## RPC
//!
//! gRPC clients the gateway uses to reach the entity microservices.

pub mod persistence;
pub mod rpc;
