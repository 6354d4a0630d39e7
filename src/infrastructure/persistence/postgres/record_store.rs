//! # PostgreSQL Record Store
//!
//! PostgreSQL implementation of [`RecordStore`] using sqlx.
//!
//! Every collection lives in a single `documents` table keyed by
//! `(collection, id)`. The writable fields are stored as a JSONB document so
//! the table stays schema-agnostic, the way a document database would hold
//! them.

use crate::domain::entities::{EntityFields, EntityKind, EntityRecord};
use crate::domain::value_objects::RecordId;
use crate::infrastructure::persistence::traits::{
    RecordStore, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tracing::info;

const CREATE_DOCUMENTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS documents (
        collection VARCHAR(64) NOT NULL,
        id VARCHAR(64) NOT NULL,
        body JSONB NOT NULL,
        created_at BIGINT NOT NULL,
        updated_at BIGINT NOT NULL,
        PRIMARY KEY (collection, id)
    )
"#;

/// PostgreSQL implementation of [`RecordStore`].
///
/// # Examples
///
/// ```ignore
/// use catalog_gateway::infrastructure::persistence::postgres::PostgresRecordStore;
///
/// let store = PostgresRecordStore::connect(
///     "postgres://localhost/catalog",
///     10,
///     Duration::from_secs(30),
/// )
/// .await?;
/// ```
#[derive(Debug, Clone)]
pub struct PostgresRecordStore {
    pool: PgPool,
}

impl PostgresRecordStore {
    /// Creates a store over an existing pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects to the database and makes sure the documents table exists.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Connection`] if the database is unreachable
    /// and [`RepositoryError::Query`] if the schema cannot be created.
    pub async fn connect(
        url: &str,
        max_connections: u32,
        connect_timeout: Duration,
    ) -> RepositoryResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(connect_timeout)
            .connect(url)
            .await
            .map_err(|e| RepositoryError::connection(e.to_string()))?;

        let store = Self::new(pool);
        store.ensure_schema().await?;
        info!("Connected to record store");
        Ok(store)
    }

    /// Creates the documents table if it is missing.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Query`] if the DDL statement fails.
    pub async fn ensure_schema(&self) -> RepositoryResult<()> {
        sqlx::query(CREATE_DOCUMENTS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::query(e.to_string()))?;
        Ok(())
    }

    /// Returns a reference to the connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl RecordStore for PostgresRecordStore {
    async fn insert(&self, kind: EntityKind, fields: EntityFields) -> RepositoryResult<EntityRecord> {
        let id = RecordId::generate();
        let body = Document::from(&fields).to_json()?;
        let now = chrono::Utc::now().timestamp_millis();

        sqlx::query(
            r#"
            INSERT INTO documents (collection, id, body, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            "#,
        )
        .bind(kind.collection())
        .bind(id.as_str())
        .bind(&body)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::query(e.to_string()))?;

        Ok(EntityRecord::new(id, fields))
    }

    async fn get_by_id(
        &self,
        kind: EntityKind,
        id: &RecordId,
    ) -> RepositoryResult<Option<EntityRecord>> {
        let row: Option<DocumentRow> = sqlx::query_as(
            r#"
            SELECT id, body FROM documents
            WHERE collection = $1 AND id = $2
            "#,
        )
        .bind(kind.collection())
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::query(e.to_string()))?;

        row.map(DocumentRow::try_into_record).transpose()
    }

    async fn list_all(&self, kind: EntityKind) -> RepositoryResult<Vec<EntityRecord>> {
        let rows: Vec<DocumentRow> = sqlx::query_as(
            r#"
            SELECT id, body FROM documents
            WHERE collection = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(kind.collection())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::query(e.to_string()))?;

        rows.into_iter().map(DocumentRow::try_into_record).collect()
    }

    async fn update_by_id(
        &self,
        kind: EntityKind,
        id: &RecordId,
        fields: EntityFields,
    ) -> RepositoryResult<Option<EntityRecord>> {
        let body = Document::from(&fields).to_json()?;
        let now = chrono::Utc::now().timestamp_millis();

        let result = sqlx::query(
            r#"
            UPDATE documents SET body = $3, updated_at = $4
            WHERE collection = $1 AND id = $2
            "#,
        )
        .bind(kind.collection())
        .bind(id.as_str())
        .bind(&body)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::query(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(EntityRecord::new(id.clone(), fields)))
    }

    async fn delete_by_id(&self, kind: EntityKind, id: &RecordId) -> RepositoryResult<bool> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(kind.collection())
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::query(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("Record store connection pool closed");
    }
}

/// JSONB body of a stored document.
#[derive(Debug, Serialize, Deserialize)]
struct Document {
    name: String,
    description: String,
}

impl Document {
    fn to_json(&self) -> RepositoryResult<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| RepositoryError::serialization(e.to_string()))
    }
}

impl From<&EntityFields> for Document {
    fn from(fields: &EntityFields) -> Self {
        Self {
            name: fields.name().to_string(),
            description: fields.description().to_string(),
        }
    }
}

/// Row type for document queries.
#[derive(Debug, sqlx::FromRow)]
struct DocumentRow {
    id: String,
    body: serde_json::Value,
}

impl DocumentRow {
    fn try_into_record(self) -> RepositoryResult<EntityRecord> {
        let document: Document = serde_json::from_value(self.body)
            .map_err(|e| RepositoryError::serialization(e.to_string()))?;
        let fields = EntityFields::new(document.name, document.description)
            .map_err(|e| RepositoryError::serialization(format!("document {}: {e}", self.id)))?;
        Ok(EntityRecord::new(RecordId::new(self.id), fields))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn row_decodes_document_body() {
        let row = DocumentRow {
            id: "abc".to_string(),
            body: serde_json::json!({"name": "Acme", "description": "Bolts supplier"}),
        };
        let record = row.try_into_record().unwrap();
        assert_eq!(record.id().as_str(), "abc");
        assert_eq!(record.name(), "Acme");
    }

    #[test]
    fn row_with_empty_field_is_rejected() {
        let row = DocumentRow {
            id: "abc".to_string(),
            body: serde_json::json!({"name": "", "description": "Bolts supplier"}),
        };
        let err = row.try_into_record().unwrap_err();
        assert!(matches!(err, RepositoryError::Serialization(_)));
    }

    #[test]
    fn row_with_malformed_body_is_rejected() {
        let row = DocumentRow {
            id: "abc".to_string(),
            body: serde_json::json!({"title": "Acme"}),
        };
        assert!(row.try_into_record().is_err());
    }

    #[test]
    fn document_serializes_fields() {
        let fields = EntityFields::new("Widget", "A widget").unwrap();
        let json = Document::from(&fields).to_json().unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Widget", "description": "A widget"})
        );
    }
}
