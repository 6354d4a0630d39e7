//! # Process Bootstrap
//!
//! Startup and shutdown shared by the three binaries: tracing
//! initialisation, store connection, the Ctrl-C signal, and the two server
//! entry points.

use crate::api::graphql::{build_schema, create_graphql_router};
use crate::api::grpc::serve_entity;
use crate::api::rest::create_router;
use crate::application::gateway::Gateways;
use crate::config::{AppConfig, LogConfig, LogFormat, StoreBackend, StoreConfig};
use crate::domain::entities::EntityKind;
use crate::infrastructure::persistence::RecordStore;
use crate::infrastructure::persistence::in_memory::InMemoryRecordStore;
use crate::infrastructure::persistence::postgres::PostgresRecordStore;
use crate::infrastructure::persistence::traits::RepositoryResult;
use crate::infrastructure::rpc::{ProductRpcClient, SupplierRpcClient};
use anyhow::Context;
use std::future::IntoFuture;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Initialises the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `config.level`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already set.
pub fn init_tracing(
    config: &LogConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.include_target);

    match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    }
}

/// Opens the configured record store.
///
/// # Errors
///
/// Returns a connection error if the Postgres backend is unreachable.
pub async fn open_store(config: &StoreConfig) -> RepositoryResult<Arc<dyn RecordStore>> {
    match config.backend {
        StoreBackend::Memory => {
            warn!("Using in-memory record store; data is lost on exit");
            Ok(Arc::new(InMemoryRecordStore::new()))
        }
        StoreBackend::Postgres => {
            let store = PostgresRecordStore::connect(
                &config.url,
                config.max_connections,
                config.connect_timeout(),
            )
            .await?;
            Ok(Arc::new(store))
        }
    }
}

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Runs the `kind` entity microservice until Ctrl-C.
///
/// # Errors
///
/// Fails if the store cannot be reached at startup, the address is invalid
/// or the server fails.
pub async fn run_entity_service(kind: EntityKind, config: &AppConfig) -> anyhow::Result<()> {
    let addr = config.entity_service(kind).socket_addr()?;

    let store = open_store(&config.store)
        .await
        .with_context(|| format!("{kind} service could not reach the record store"))?;

    let result = serve_entity(kind, Arc::clone(&store), addr, shutdown_signal()).await;

    store.close().await;
    info!("{} service stopped", kind);

    result.with_context(|| format!("{kind} service failed"))
}

/// Builds the façade gateways from lazily connected RPC clients.
///
/// # Errors
///
/// Fails if a configured endpoint is not a valid URI.
pub fn rpc_gateways(config: &AppConfig) -> anyhow::Result<Gateways> {
    let suppliers =
        SupplierRpcClient::connect_lazy(&config.supplier_service.client_endpoint())?;
    let products = ProductRpcClient::connect_lazy(&config.product_service.client_endpoint())?;
    Ok(Gateways::new(Arc::new(suppliers), Arc::new(products)))
}

/// Runs the REST and GraphQL façades until Ctrl-C.
///
/// # Errors
///
/// Fails if an address cannot be bound or either server fails.
pub async fn run_gateway(config: &AppConfig) -> anyhow::Result<()> {
    let gateways = rpc_gateways(config)?;

    let rest_router = create_router(gateways.clone());
    let graphql_router = create_graphql_router(
        build_schema(gateways),
        &config.graphql.path,
        config.graphql.enable_graphiql,
    );

    let rest_addr = config.rest.socket_addr()?;
    let graphql_addr = config.graphql.socket_addr()?;
    let rest_listener = TcpListener::bind(rest_addr)
        .await
        .with_context(|| format!("failed to bind REST server on {rest_addr}"))?;
    let graphql_listener = TcpListener::bind(graphql_addr)
        .await
        .with_context(|| format!("failed to bind GraphQL server on {graphql_addr}"))?;

    let (tx, rx) = watch::channel(false);
    tokio::spawn(async move {
        shutdown_signal().await;
        let _ = tx.send(true);
    });

    info!("REST server listening on {}", rest_addr);
    info!(
        "GraphQL server listening on {}{}",
        graphql_addr, config.graphql.path
    );

    let rest = axum::serve(rest_listener, rest_router)
        .with_graceful_shutdown(wait_for(rx.clone()))
        .into_future();
    let graphql = axum::serve(graphql_listener, graphql_router)
        .with_graceful_shutdown(wait_for(rx))
        .into_future();

    let (rest_result, graphql_result) = tokio::join!(rest, graphql);
    rest_result.context("REST server failed")?;
    graphql_result.context("GraphQL server failed")?;

    info!("Gateway stopped");
    Ok(())
}

async fn wait_for(mut rx: watch::Receiver<bool>) {
    while !*rx.borrow_and_update() {
        if rx.changed().await.is_err() {
            return;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::gateway::EntityGateway;

    #[tokio::test]
    async fn memory_backend_opens_without_database() {
        let config = StoreConfig {
            backend: StoreBackend::Memory,
            url: String::new(),
            ..Default::default()
        };
        let store = open_store(&config).await.unwrap();
        assert!(store.list_all(EntityKind::Supplier).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn rpc_gateways_use_configured_endpoints() {
        let gateways = rpc_gateways(&AppConfig::default()).unwrap();
        assert_eq!(gateways.suppliers.kind(), EntityKind::Supplier);
        assert_eq!(gateways.products.kind(), EntityKind::Product);
    }

    #[tokio::test]
    async fn rpc_gateways_reject_bad_endpoint() {
        let mut config = AppConfig::default();
        config.product_service.endpoint = Some("not a uri".to_string());
        assert!(rpc_gateways(&config).is_err());
    }

    #[tokio::test]
    async fn wait_for_returns_once_signalled() {
        let (tx, rx) = watch::channel(false);
        let waiter = tokio::spawn(wait_for(rx));
        tx.send(true).unwrap();
        waiter.await.unwrap();
    }
}
