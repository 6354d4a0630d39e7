//! # REST Handlers
//!
//! Request handlers for the entity endpoints.
//!
//! Every handler is mounted once per collection with that collection's
//! [`EntityGateway`] as state, so the same code serves `/supplier/...` and
//! `/product/...`.
//!
//! # Endpoints
//!
//! - `GET /{entity}` - List all
//! - `GET /{entity}/{id}` - Get by ID
//! - `POST /{entity}/create` - Create
//! - `PUT /{entity}/update/{id}` - Replace name and description
//! - `DELETE /{entity}/delete/{id}` - Delete

use crate::api::rest::error::RestError;
use crate::application::dto::{EntityInput, EntityView};
use crate::application::gateway::EntityGateway;
use crate::domain::value_objects::RecordId;
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use std::sync::Arc;
use tracing::{info, instrument};

/// Per-collection handler state.
pub type EntityState = Arc<dyn EntityGateway>;

/// Unwraps the `{id}` segment, answering a malformed one with a `500`.
fn record_id(
    path: Result<Path<String>, PathRejection>,
    action: &str,
) -> Result<RecordId, RestError> {
    let Path(id) = path.map_err(|rejection| RestError::internal(action, &rejection))?;
    Ok(RecordId::new(id))
}

/// List all records.
///
/// # Errors
///
/// Returns `500` if the entity service fails.
#[instrument(skip(gateway), fields(entity = %gateway.kind()))]
pub async fn list_entities(
    State(gateway): State<EntityState>,
) -> Result<Json<Vec<EntityView>>, RestError> {
    let kind = gateway.kind();
    info!("Listing {}", kind.plural());

    let records = gateway
        .search()
        .await
        .map_err(|e| RestError::from_failure(&format!("fetching {}", kind.plural()), e))?;

    Ok(Json(records.iter().map(EntityView::from).collect()))
}

/// Get a record by ID.
///
/// # Errors
///
/// Returns `404` if the record does not exist, `500` on other failures.
#[instrument(skip(gateway, path), fields(entity = %gateway.kind()))]
pub async fn get_entity(
    State(gateway): State<EntityState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<EntityView>, RestError> {
    let kind = gateway.kind();
    let action = format!("fetching {}", kind.singular());
    let id = record_id(path, &action)?;
    info!("Getting {}: {}", kind.singular(), id);

    let record = gateway
        .get(&id)
        .await
        .map_err(|e| RestError::from_failure(&action, e))?;

    Ok(Json(EntityView::from(record)))
}

/// Create a record.
///
/// A body that is not valid JSON is answered like any other failure.
///
/// # Errors
///
/// Returns `500` if the body is invalid, a field is empty, or the entity
/// service fails.
#[instrument(skip(gateway, payload), fields(entity = %gateway.kind()))]
pub async fn create_entity(
    State(gateway): State<EntityState>,
    payload: Result<Json<EntityInput>, JsonRejection>,
) -> Result<Json<EntityView>, RestError> {
    let kind = gateway.kind();
    let action = format!("creating {}", kind.singular());
    let Json(input) = payload.map_err(|rejection| RestError::internal(&action, &rejection))?;

    info!("Creating {}: {}", kind.singular(), input.name);

    let record = gateway
        .create(input)
        .await
        .map_err(|e| RestError::from_failure(&action, e))?;

    info!("Created {}: {}", kind.singular(), record.id());

    Ok(Json(EntityView::from(record)))
}

/// Replace a record's name and description.
///
/// # Errors
///
/// Returns `404` if the record does not exist, `500` on other failures.
#[instrument(skip(gateway, path, payload), fields(entity = %gateway.kind()))]
pub async fn update_entity(
    State(gateway): State<EntityState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<EntityInput>, JsonRejection>,
) -> Result<Json<EntityView>, RestError> {
    let kind = gateway.kind();
    let action = format!("updating {}", kind.singular());
    let id = record_id(path, &action)?;
    let Json(input) = payload.map_err(|rejection| RestError::internal(&action, &rejection))?;

    info!("Updating {}: {}", kind.singular(), id);

    let record = gateway
        .update(&id, input)
        .await
        .map_err(|e| RestError::from_failure(&action, e))?;

    Ok(Json(EntityView::from(record)))
}

/// Delete a record.
///
/// Answers with the plain-text confirmation.
///
/// # Errors
///
/// Returns `404` if the record does not exist, `500` on other failures.
#[instrument(skip(gateway, path), fields(entity = %gateway.kind()))]
pub async fn delete_entity(
    State(gateway): State<EntityState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<String, RestError> {
    let kind = gateway.kind();
    let action = format!("deleting {}", kind.singular());
    let id = record_id(path, &action)?;
    info!("Deleting {}: {}", kind.singular(), id);

    gateway
        .delete(&id)
        .await
        .map_err(|e| RestError::from_failure(&action, e))
}
