//! # GraphQL Routes
//!
//! Serves the schema over HTTP.
//!
//! ```text
//! /graphql   POST - GraphQL requests
//!            GET  - GraphiQL explorer (when enabled), otherwise GET queries
//! ```

use crate::api::graphql::schema::CatalogSchema;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::Router;
use axum::response::Html;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates the GraphQL router with tracing and permissive CORS.
pub fn create_graphql_router(schema: CatalogSchema, path: &str, graphiql: bool) -> Router {
    graphql_routes(schema, path, graphiql)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Creates the GraphQL routes without middleware.
fn graphql_routes(schema: CatalogSchema, path: &str, graphiql: bool) -> Router {
    if graphiql {
        let page = GraphiQLSource::build().endpoint(path).finish();
        let explorer = get(move || {
            let page = page.clone();
            async move { Html(page) }
        });
        Router::new().route(path, explorer.post_service(GraphQL::new(schema)))
    } else {
        Router::new().route_service(path, GraphQL::new(schema))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api::graphql::schema::build_schema;
    use crate::application::gateway::Gateways;
    use crate::infrastructure::persistence::in_memory::InMemoryRecordStore;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn router(graphiql: bool) -> Router {
        let schema = build_schema(Gateways::with_store(Arc::new(InMemoryRecordStore::new())));
        graphql_routes(schema, "/graphql", graphiql)
    }

    #[tokio::test]
    async fn post_executes_query() {
        let body = serde_json::json!({
            "query": r#"mutation { createProduct(name: "Widget", description: "A widget") { name } }"#
        });
        let request = Request::builder()
            .method("POST")
            .uri("/graphql")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = router(true).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["data"]["createProduct"]["name"], "Widget");
    }

    #[tokio::test]
    async fn get_serves_explorer() {
        let request = Request::builder()
            .uri("/graphql")
            .body(Body::empty())
            .unwrap();

        let response = router(true).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("graphiql"));
    }
}
