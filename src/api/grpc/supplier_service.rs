//! # gRPC Supplier Service
//!
//! Serves `supplier.SupplierService` from the Supplier collection.
//!
//! # Examples
//!
//! ```ignore
//! use catalog_gateway::api::grpc::SupplierServiceImpl;
//! use catalog_gateway::proto::supplier::supplier_service_server::SupplierServiceServer;
//! use tonic::transport::Server;
//!
//! let service = SupplierServiceImpl::new(store);
//! Server::builder()
//!     .add_service(SupplierServiceServer::new(service))
//!     .serve(addr)
//!     .await?;
//! ```

use crate::application::dto::EntityInput;
use crate::application::gateway::EntityGateway;
use crate::application::services::EntityService;
use crate::domain::entities::EntityKind;
use crate::domain::value_objects::RecordId;
use crate::infrastructure::persistence::RecordStore;
use crate::proto::supplier::{
    CreateSupplierRequest, CreateSupplierResponse, DeleteSupplierRequest, DeleteSupplierResponse,
    GetSupplierRequest, GetSupplierResponse, SearchSuppliersRequest, SearchSuppliersResponse,
    Supplier, UpdateSupplierRequest, UpdateSupplierResponse, supplier_service_server::SupplierService,
};
use std::sync::Arc;
use tonic::{Request, Response, Status};
use tracing::{info, instrument};

/// gRPC Supplier Service implementation.
#[derive(Debug, Clone)]
pub struct SupplierServiceImpl {
    service: EntityService,
}

impl SupplierServiceImpl {
    /// Creates a new Supplier service over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            service: EntityService::new(EntityKind::Supplier, store),
        }
    }
}

#[tonic::async_trait]
impl SupplierService for SupplierServiceImpl {
    /// Gets a supplier by ID.
    #[instrument(skip(self, request), fields(supplier_id))]
    async fn get_supplier(
        &self,
        request: Request<GetSupplierRequest>,
    ) -> Result<Response<GetSupplierResponse>, Status> {
        let req = request.into_inner();
        tracing::Span::current().record("supplier_id", &req.supplier_id);

        info!("Getting supplier: {}", req.supplier_id);

        let record = self.service.get(&RecordId::new(req.supplier_id)).await?;

        Ok(Response::new(GetSupplierResponse {
            supplier: Some(Supplier::from(&record)),
        }))
    }

    /// Lists every supplier.
    #[instrument(skip(self, _request))]
    async fn search_suppliers(
        &self,
        _request: Request<SearchSuppliersRequest>,
    ) -> Result<Response<SearchSuppliersResponse>, Status> {
        let records = self.service.search().await?;

        Ok(Response::new(SearchSuppliersResponse {
            suppliers: records.iter().map(Supplier::from).collect(),
        }))
    }

    /// Creates a supplier.
    #[instrument(skip(self, request))]
    async fn create_supplier(
        &self,
        request: Request<CreateSupplierRequest>,
    ) -> Result<Response<CreateSupplierResponse>, Status> {
        let req = request.into_inner();

        info!("Creating supplier: {}", req.name);

        let record = self
            .service
            .create(EntityInput::new(req.name, req.description))
            .await?;

        Ok(Response::new(CreateSupplierResponse {
            supplier: Some(Supplier::from(&record)),
        }))
    }

    /// Replaces a supplier's name and description.
    #[instrument(skip(self, request), fields(supplier_id))]
    async fn update_supplier(
        &self,
        request: Request<UpdateSupplierRequest>,
    ) -> Result<Response<UpdateSupplierResponse>, Status> {
        let req = request.into_inner();
        tracing::Span::current().record("supplier_id", &req.supplier_id);

        info!("Updating supplier: {}", req.supplier_id);

        let record = self
            .service
            .update(
                &RecordId::new(req.supplier_id),
                EntityInput::new(req.name, req.description),
            )
            .await?;

        Ok(Response::new(UpdateSupplierResponse {
            supplier: Some(Supplier::from(&record)),
        }))
    }

    /// Deletes a supplier.
    #[instrument(skip(self, request), fields(supplier_id))]
    async fn delete_supplier(
        &self,
        request: Request<DeleteSupplierRequest>,
    ) -> Result<Response<DeleteSupplierResponse>, Status> {
        let req = request.into_inner();
        tracing::Span::current().record("supplier_id", &req.supplier_id);

        info!("Deleting supplier: {}", req.supplier_id);

        let message = self.service.delete(&RecordId::new(req.supplier_id)).await?;

        Ok(Response::new(DeleteSupplierResponse { message }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::in_memory::InMemoryRecordStore;
    use tonic::Code;

    fn create_service() -> SupplierServiceImpl {
        SupplierServiceImpl::new(Arc::new(InMemoryRecordStore::new()))
    }

    fn create_valid_request() -> CreateSupplierRequest {
        CreateSupplierRequest {
            name: "Acme".to_string(),
            description: "Bolts supplier".to_string(),
        }
    }

    #[tokio::test]
    async fn create_supplier_success() {
        let service = create_service();

        let supplier = service
            .create_supplier(Request::new(create_valid_request()))
            .await
            .unwrap()
            .into_inner()
            .supplier
            .unwrap();

        assert!(!supplier.id.is_empty());
        assert_eq!(supplier.name, "Acme");
        assert_eq!(supplier.description, "Bolts supplier");
    }

    #[tokio::test]
    async fn create_supplier_empty_name() {
        let service = create_service();
        let mut req = create_valid_request();
        req.name = String::new();

        let response = service.create_supplier(Request::new(req)).await;
        assert_eq!(response.unwrap_err().code(), Code::InvalidArgument);

        let listed = service
            .search_suppliers(Request::new(SearchSuppliersRequest {}))
            .await
            .unwrap()
            .into_inner();
        assert!(listed.suppliers.is_empty());
    }

    #[tokio::test]
    async fn get_supplier_not_found() {
        let service = create_service();
        let request = Request::new(GetSupplierRequest {
            supplier_id: RecordId::generate().to_string(),
        });

        let status = service.get_supplier(request).await.unwrap_err();
        assert_eq!(status.code(), Code::NotFound);
        assert_eq!(status.message(), "Supplier not found");
    }

    #[tokio::test]
    async fn update_then_get_returns_new_fields() {
        let service = create_service();
        let created = service
            .create_supplier(Request::new(create_valid_request()))
            .await
            .unwrap()
            .into_inner()
            .supplier
            .unwrap();

        service
            .update_supplier(Request::new(UpdateSupplierRequest {
                supplier_id: created.id.clone(),
                name: "Acme Corp".to_string(),
                description: "Nuts and bolts".to_string(),
            }))
            .await
            .unwrap();

        let fetched = service
            .get_supplier(Request::new(GetSupplierRequest {
                supplier_id: created.id.clone(),
            }))
            .await
            .unwrap()
            .into_inner()
            .supplier
            .unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.name, "Acme Corp");
        assert_eq!(fetched.description, "Nuts and bolts");
    }

    #[tokio::test]
    async fn delete_supplier_twice() {
        let service = create_service();
        let created = service
            .create_supplier(Request::new(create_valid_request()))
            .await
            .unwrap()
            .into_inner()
            .supplier
            .unwrap();

        let response = service
            .delete_supplier(Request::new(DeleteSupplierRequest {
                supplier_id: created.id.clone(),
            }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(response.message, "Supplier deleted successfully");

        let status = service
            .delete_supplier(Request::new(DeleteSupplierRequest {
                supplier_id: created.id,
            }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::NotFound);
    }
}
