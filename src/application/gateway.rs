//! # Entity Gateway Port
//!
//! The five-operation contract every entity exposes, independent of how it
//! is reached.
//!
//! Two implementations exist:
//! - [`EntityService`](crate::application::services::EntityService) runs the
//!   operations against a record store. Entity microservices serve it over
//!   gRPC.
//! - The gRPC clients in [`crate::infrastructure::rpc`] call a remote entity
//!   microservice. The GraphQL and REST façades are built on these.

use crate::application::dto::EntityInput;
use crate::application::error::ApplicationResult;
use crate::domain::entities::{EntityKind, EntityRecord};
use crate::domain::value_objects::RecordId;
use async_trait::async_trait;
use std::sync::Arc;

/// CRUD contract for one entity collection.
#[async_trait]
pub trait EntityGateway: Send + Sync + std::fmt::Debug {
    /// The collection this gateway serves.
    fn kind(&self) -> EntityKind;

    /// Fetches a record by id.
    ///
    /// Fails with `NotFound` if no record has this id.
    async fn get(&self, id: &RecordId) -> ApplicationResult<EntityRecord>;

    /// Returns every record in the collection.
    async fn search(&self) -> ApplicationResult<Vec<EntityRecord>>;

    /// Creates a record. Fails with `Validation` before touching the store
    /// if a field is empty.
    async fn create(&self, input: EntityInput) -> ApplicationResult<EntityRecord>;

    /// Replaces both fields of an existing record.
    async fn update(&self, id: &RecordId, input: EntityInput) -> ApplicationResult<EntityRecord>;

    /// Deletes a record and returns the confirmation message.
    async fn delete(&self, id: &RecordId) -> ApplicationResult<String>;
}

/// The pair of gateways a façade serves.
#[derive(Debug, Clone)]
pub struct Gateways {
    /// Supplier collection.
    pub suppliers: Arc<dyn EntityGateway>,
    /// Product collection.
    pub products: Arc<dyn EntityGateway>,
}

impl Gateways {
    /// Bundles the two gateways.
    #[must_use]
    pub fn new(suppliers: Arc<dyn EntityGateway>, products: Arc<dyn EntityGateway>) -> Self {
        Self {
            suppliers,
            products,
        }
    }

    /// Serves both collections in-process from one store, skipping RPC.
    #[cfg(test)]
    pub(crate) fn with_store(
        store: Arc<dyn crate::infrastructure::persistence::RecordStore>,
    ) -> Self {
        use crate::application::services::EntityService;

        Self::new(
            Arc::new(EntityService::new(EntityKind::Supplier, Arc::clone(&store))),
            Arc::new(EntityService::new(EntityKind::Product, store)),
        )
    }
}
