//! # REST Routes
//!
//! Route definitions for the REST façade.
//!
//! # Route Structure
//!
//! ```text
//! /supplier                 GET    - List suppliers
//! ├── /{id}                 GET    - Get supplier by ID
//! ├── /create               POST   - Create supplier
//! ├── /update/{id}          PUT    - Update supplier
//! └── /delete/{id}          DELETE - Delete supplier
//! /product                  (same pattern)
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use catalog_gateway::api::rest::routes::create_router;
//!
//! let router = create_router(gateways);
//! let listener = tokio::net::TcpListener::bind(addr).await?;
//! axum::serve(listener, router).await?;
//! ```

use crate::api::rest::handlers::{
    EntityState, create_entity, delete_entity, get_entity, list_entities, update_entity,
};
use crate::application::gateway::{EntityGateway, Gateways};
use axum::Router;
use axum::routing::{delete, get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Routes for one collection, rooted at `/{entity}`.
fn entity_routes(gateway: EntityState) -> Router {
    let base = format!("/{}", gateway.kind().singular());

    Router::new()
        .route(&base, get(list_entities))
        .route(&format!("{base}/{{id}}"), get(get_entity))
        .route(&format!("{base}/create"), post(create_entity))
        .route(&format!("{base}/update/{{id}}"), put(update_entity))
        .route(&format!("{base}/delete/{{id}}"), delete(delete_entity))
        .with_state(gateway)
}

/// Creates the REST router with all endpoints.
///
/// Every route carries request tracing and permissive CORS (any origin,
/// method and header).
pub fn create_router(gateways: Gateways) -> Router {
    create_test_router(gateways)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Creates the router without middleware.
///
/// Useful for tests that don't need tracing or CORS.
pub fn create_test_router(gateways: Gateways) -> Router {
    Router::new()
        .merge(entity_routes(gateways.suppliers))
        .merge(entity_routes(gateways.products))
}
