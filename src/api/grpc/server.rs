//! # gRPC Server
//!
//! Hosts one entity microservice.
//!
//! Each microservice process serves exactly one collection on one address.
//! Both entry points stop accepting connections once `shutdown` resolves and
//! return after in-flight calls finish.

use crate::api::grpc::{ProductServiceImpl, SupplierServiceImpl};
use crate::domain::entities::EntityKind;
use crate::infrastructure::persistence::RecordStore;
use crate::proto::product::product_service_server::ProductServiceServer;
use crate::proto::supplier::supplier_service_server::SupplierServiceServer;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tonic::transport::server::Router;
use tracing::info;

fn entity_router(kind: EntityKind, store: Arc<dyn RecordStore>) -> Router {
    let mut builder = Server::builder();
    match kind {
        EntityKind::Supplier => {
            builder.add_service(SupplierServiceServer::new(SupplierServiceImpl::new(store)))
        }
        EntityKind::Product => {
            builder.add_service(ProductServiceServer::new(ProductServiceImpl::new(store)))
        }
    }
}

/// Serves the `kind` microservice on `addr` until `shutdown` resolves.
///
/// # Errors
///
/// Returns a transport error if the address cannot be bound or the server
/// fails.
pub async fn serve_entity<F>(
    kind: EntityKind,
    store: Arc<dyn RecordStore>,
    addr: SocketAddr,
    shutdown: F,
) -> Result<(), tonic::transport::Error>
where
    F: Future<Output = ()>,
{
    info!("{} service listening on {}", kind, addr);
    entity_router(kind, store)
        .serve_with_shutdown(addr, shutdown)
        .await
}

/// Serves the `kind` microservice on an already bound listener.
///
/// Used when the port is chosen by the OS, as in tests.
///
/// # Errors
///
/// Returns a transport error if the server fails.
pub async fn serve_entity_with_listener<F>(
    kind: EntityKind,
    store: Arc<dyn RecordStore>,
    listener: TcpListener,
    shutdown: F,
) -> Result<(), tonic::transport::Error>
where
    F: Future<Output = ()>,
{
    if let Ok(addr) = listener.local_addr() {
        info!("{} service listening on {}", kind, addr);
    }
    entity_router(kind, store)
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
        .await
}
