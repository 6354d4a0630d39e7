//! # Entity Service
//!
//! Runs the entity operations against a [`RecordStore`].
//!
//! This is the logic behind each entity microservice. It holds no state of
//! its own; every call round-trips to the store. Validation happens before
//! any store access, and store failures are surfaced as-is without retry.

use crate::application::dto::EntityInput;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::gateway::EntityGateway;
use crate::domain::entities::{EntityKind, EntityRecord};
use crate::domain::value_objects::RecordId;
use crate::infrastructure::persistence::RecordStore;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Store-backed implementation of [`EntityGateway`] for one collection.
#[derive(Debug, Clone)]
pub struct EntityService {
    kind: EntityKind,
    store: Arc<dyn RecordStore>,
}

impl EntityService {
    /// Creates a service for `kind` over `store`.
    #[must_use]
    pub fn new(kind: EntityKind, store: Arc<dyn RecordStore>) -> Self {
        Self { kind, store }
    }

    fn store_failure(&self, action: &str, err: impl std::fmt::Display) -> ApplicationError {
        error!("Failed to {} {}: {}", action, self.kind.singular(), err);
        ApplicationError::store(err.to_string())
    }
}

#[async_trait]
impl EntityGateway for EntityService {
    fn kind(&self) -> EntityKind {
        self.kind
    }

    #[instrument(skip(self), fields(entity = %self.kind))]
    async fn get(&self, id: &RecordId) -> ApplicationResult<EntityRecord> {
        self.store
            .get_by_id(self.kind, id)
            .await
            .map_err(|e| self.store_failure("fetch", e))?
            .ok_or_else(|| {
                warn!("{} not found: {}", self.kind, id);
                ApplicationError::not_found(self.kind, id.as_str())
            })
    }

    #[instrument(skip(self), fields(entity = %self.kind))]
    async fn search(&self) -> ApplicationResult<Vec<EntityRecord>> {
        let records = self
            .store
            .list_all(self.kind)
            .await
            .map_err(|e| self.store_failure("list", e))?;
        info!("Found {} {}", records.len(), self.kind.plural());
        Ok(records)
    }

    #[instrument(skip(self, input), fields(entity = %self.kind))]
    async fn create(&self, input: EntityInput) -> ApplicationResult<EntityRecord> {
        let fields = input.validate().map_err(|e| {
            warn!("Rejected {} create: {}", self.kind.singular(), e);
            ApplicationError::from(e)
        })?;

        let record = self
            .store
            .insert(self.kind, fields)
            .await
            .map_err(|e| self.store_failure("create", e))?;

        info!("Created {}: {}", self.kind.singular(), record.id());
        Ok(record)
    }

    #[instrument(skip(self, input), fields(entity = %self.kind))]
    async fn update(&self, id: &RecordId, input: EntityInput) -> ApplicationResult<EntityRecord> {
        let fields = input.validate().map_err(|e| {
            warn!("Rejected {} update: {}", self.kind.singular(), e);
            ApplicationError::from(e)
        })?;

        let record = self
            .store
            .update_by_id(self.kind, id, fields)
            .await
            .map_err(|e| self.store_failure("update", e))?
            .ok_or_else(|| {
                warn!("{} not found: {}", self.kind, id);
                ApplicationError::not_found(self.kind, id.as_str())
            })?;

        info!("Updated {}: {}", self.kind.singular(), id);
        Ok(record)
    }

    #[instrument(skip(self), fields(entity = %self.kind))]
    async fn delete(&self, id: &RecordId) -> ApplicationResult<String> {
        let deleted = self
            .store
            .delete_by_id(self.kind, id)
            .await
            .map_err(|e| self.store_failure("delete", e))?;

        if !deleted {
            warn!("{} not found: {}", self.kind, id);
            return Err(ApplicationError::not_found(self.kind, id.as_str()));
        }

        info!("Deleted {}: {}", self.kind.singular(), id);
        Ok(self.kind.deleted_message().to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::EntityFields;
    use crate::infrastructure::persistence::in_memory::InMemoryRecordStore;
    use crate::infrastructure::persistence::{RepositoryError, RepositoryResult};
    use proptest::prelude::*;

    /// Store whose every call fails, standing in for an unreachable backend.
    #[derive(Debug)]
    struct UnreachableStore;

    #[async_trait]
    impl RecordStore for UnreachableStore {
        async fn insert(&self, _: EntityKind, _: EntityFields) -> RepositoryResult<EntityRecord> {
            Err(RepositoryError::connection("connection refused"))
        }

        async fn get_by_id(
            &self,
            _: EntityKind,
            _: &RecordId,
        ) -> RepositoryResult<Option<EntityRecord>> {
            Err(RepositoryError::connection("connection refused"))
        }

        async fn list_all(&self, _: EntityKind) -> RepositoryResult<Vec<EntityRecord>> {
            Err(RepositoryError::connection("connection refused"))
        }

        async fn update_by_id(
            &self,
            _: EntityKind,
            _: &RecordId,
            _: EntityFields,
        ) -> RepositoryResult<Option<EntityRecord>> {
            Err(RepositoryError::connection("connection refused"))
        }

        async fn delete_by_id(&self, _: EntityKind, _: &RecordId) -> RepositoryResult<bool> {
            Err(RepositoryError::connection("connection refused"))
        }
    }

    fn create_service(kind: EntityKind) -> (EntityService, InMemoryRecordStore) {
        let store = InMemoryRecordStore::new();
        (EntityService::new(kind, Arc::new(store.clone())), store)
    }

    #[tokio::test]
    async fn create_then_get() {
        let (service, _) = create_service(EntityKind::Supplier);
        let created = service
            .create(EntityInput::new("Acme", "Bolts supplier"))
            .await
            .unwrap();

        let fetched = service.get(created.id()).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.name(), "Acme");
        assert_eq!(fetched.description(), "Bolts supplier");
    }

    #[tokio::test]
    async fn create_with_empty_name_writes_nothing() {
        let (service, store) = create_service(EntityKind::Supplier);
        let err = service
            .create(EntityInput::new("", "Bolts supplier"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::Validation(_)));
        assert!(store.is_empty().await);
        assert!(service.search().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_with_empty_description_is_rejected() {
        let (service, _) = create_service(EntityKind::Product);
        let err = service
            .create(EntityInput::new("Widget", ""))
            .await
            .unwrap_err();
        assert_eq!(err, ApplicationError::validation("description is required"));
    }

    #[tokio::test]
    async fn whitespace_fields_are_stored_verbatim() {
        let (service, _) = create_service(EntityKind::Supplier);
        let created = service
            .create(EntityInput::new(" ", "Bolts supplier"))
            .await
            .unwrap();
        assert_eq!(service.get(created.id()).await.unwrap().name(), " ");
    }

    #[tokio::test]
    async fn missing_id_is_not_found_everywhere() {
        let (service, _) = create_service(EntityKind::Product);
        let missing = RecordId::new("missing");

        assert!(service.get(&missing).await.unwrap_err().is_not_found());
        assert!(
            service
                .update(&missing, EntityInput::new("a", "b"))
                .await
                .unwrap_err()
                .is_not_found()
        );
        assert!(service.delete(&missing).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn update_validates_before_lookup() {
        let (service, _) = create_service(EntityKind::Product);
        let err = service
            .update(&RecordId::new("missing"), EntityInput::new("Widget", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Validation(_)));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let (service, _) = create_service(EntityKind::Supplier);
        let created = service
            .create(EntityInput::new("Acme", "Bolts supplier"))
            .await
            .unwrap();

        let message = service.delete(created.id()).await.unwrap();
        assert_eq!(message, "Supplier deleted successfully");

        let err = service.get(created.id()).await.unwrap_err();
        assert_eq!(err.to_string(), "Supplier not found");
        assert!(service.delete(created.id()).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn store_failures_surface_as_store_errors() {
        let service = EntityService::new(EntityKind::Supplier, Arc::new(UnreachableStore));

        let err = service.search().await.unwrap_err();
        assert!(matches!(err, ApplicationError::Store(_)));
        assert!(err.to_string().contains("connection refused"));

        let err = service.get(&RecordId::new("x")).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Store(_)));
    }

    #[tokio::test]
    async fn validation_precedes_store_access() {
        let service = EntityService::new(EntityKind::Supplier, Arc::new(UnreachableStore));
        let err = service.create(EntityInput::new("", "x")).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Validation(_)));
    }

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
    }

    proptest! {
        #[test]
        fn created_records_read_back_unchanged(
            name in ".{1,30}",
            description in ".{1,60}",
        ) {
            let (service, _) = create_service(EntityKind::Product);
            let rt = runtime();
            let fetched = rt.block_on(async {
                let created = service
                    .create(EntityInput::new(name.clone(), description.clone()))
                    .await
                    .unwrap();
                service.get(created.id()).await.unwrap()
            });
            prop_assert_eq!(fetched.name(), name.as_str());
            prop_assert_eq!(fetched.description(), description.as_str());
        }

        #[test]
        fn update_fully_replaces_fields(
            first in "[a-z]{1,12}",
            second in "[A-Z]{1,12}",
        ) {
            let (service, _) = create_service(EntityKind::Supplier);
            let rt = runtime();
            let fetched = rt.block_on(async {
                let created = service
                    .create(EntityInput::new(first.clone(), first.clone()))
                    .await
                    .unwrap();
                service
                    .update(created.id(), EntityInput::new(second.clone(), second.clone()))
                    .await
                    .unwrap();
                service.get(created.id()).await.unwrap()
            });
            prop_assert_eq!(fetched.name(), second.as_str());
            prop_assert_eq!(fetched.description(), second.as_str());
            prop_assert_ne!(fetched.name(), first.as_str());
        }
    }
}
