//! # In-Memory Record Store
//!
//! In-memory implementation of [`RecordStore`].
//!
//! Used by tests and by the `memory` store backend for local runs. Each
//! collection is a `HashMap` keyed by record id; an insertion sequence
//! number keeps `list_all` in creation order.
//!
//! # Examples
//!
//! ```
//! use catalog_gateway::infrastructure::persistence::in_memory::InMemoryRecordStore;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let store = InMemoryRecordStore::new();
//! assert!(store.is_empty().await);
//! # }
//! ```

use crate::domain::entities::{EntityFields, EntityKind, EntityRecord};
use crate::domain::value_objects::RecordId;
use crate::infrastructure::persistence::traits::{RecordStore, RepositoryResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct StoredRecord {
    seq: u64,
    record: EntityRecord,
}

#[derive(Debug, Default)]
struct Collections {
    next_seq: u64,
    records: HashMap<(EntityKind, RecordId), StoredRecord>,
}

/// In-memory implementation of [`RecordStore`].
///
/// # Thread Safety
///
/// Storage sits behind `Arc<RwLock<..>>`; clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    storage: Arc<RwLock<Collections>>,
}

impl InMemoryRecordStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of records across all collections.
    ///
    /// Waits for any in-flight write to finish.
    pub async fn len(&self) -> usize {
        self.storage.read().await.records.len()
    }

    /// Returns true if the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn insert(&self, kind: EntityKind, fields: EntityFields) -> RepositoryResult<EntityRecord> {
        let mut storage = self.storage.write().await;

        let record = EntityRecord::new(RecordId::generate(), fields);
        let seq = storage.next_seq;
        storage.next_seq += 1;
        storage.records.insert(
            (kind, record.id().clone()),
            StoredRecord {
                seq,
                record: record.clone(),
            },
        );

        Ok(record)
    }

    async fn get_by_id(
        &self,
        kind: EntityKind,
        id: &RecordId,
    ) -> RepositoryResult<Option<EntityRecord>> {
        let storage = self.storage.read().await;
        Ok(storage
            .records
            .get(&(kind, id.clone()))
            .map(|stored| stored.record.clone()))
    }

    async fn list_all(&self, kind: EntityKind) -> RepositoryResult<Vec<EntityRecord>> {
        let storage = self.storage.read().await;
        let mut stored: Vec<&StoredRecord> = storage
            .records
            .iter()
            .filter(|((k, _), _)| *k == kind)
            .map(|(_, stored)| stored)
            .collect();
        stored.sort_by_key(|s| s.seq);
        Ok(stored.into_iter().map(|s| s.record.clone()).collect())
    }

    async fn update_by_id(
        &self,
        kind: EntityKind,
        id: &RecordId,
        fields: EntityFields,
    ) -> RepositoryResult<Option<EntityRecord>> {
        let mut storage = self.storage.write().await;
        Ok(storage.records.get_mut(&(kind, id.clone())).map(|stored| {
            stored.record = EntityRecord::new(id.clone(), fields);
            stored.record.clone()
        }))
    }

    async fn delete_by_id(&self, kind: EntityKind, id: &RecordId) -> RepositoryResult<bool> {
        let mut storage = self.storage.write().await;
        Ok(storage.records.remove(&(kind, id.clone())).is_some())
    }
}
