//! # gRPC Product Service
//!
//! Serves `product.ProductService` from the Product collection.
//!
//! # Examples
//!
//! ```ignore
//! use catalog_gateway::api::grpc::ProductServiceImpl;
//! use catalog_gateway::proto::product::product_service_server::ProductServiceServer;
//! use tonic::transport::Server;
//!
//! let service = ProductServiceImpl::new(store);
//! Server::builder()
//!     .add_service(ProductServiceServer::new(service))
//!     .serve(addr)
//!     .await?;
//! ```

use crate::application::dto::EntityInput;
use crate::application::gateway::EntityGateway;
use crate::application::services::EntityService;
use crate::domain::entities::EntityKind;
use crate::domain::value_objects::RecordId;
use crate::infrastructure::persistence::RecordStore;
use crate::proto::product::{
    CreateProductRequest, CreateProductResponse, DeleteProductRequest, DeleteProductResponse,
    GetProductRequest, GetProductResponse, SearchProductsRequest, SearchProductsResponse,
    Product, UpdateProductRequest, UpdateProductResponse, product_service_server::ProductService,
};
use std::sync::Arc;
use tonic::{Request, Response, Status};
use tracing::{info, instrument};

/// gRPC Product Service implementation.
#[derive(Debug, Clone)]
pub struct ProductServiceImpl {
    service: EntityService,
}

impl ProductServiceImpl {
    /// Creates a new Product service over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            service: EntityService::new(EntityKind::Product, store),
        }
    }
}

#[tonic::async_trait]
impl ProductService for ProductServiceImpl {
    /// Gets a product by ID.
    #[instrument(skip(self, request), fields(product_id))]
    async fn get_product(
        &self,
        request: Request<GetProductRequest>,
    ) -> Result<Response<GetProductResponse>, Status> {
        let req = request.into_inner();
        tracing::Span::current().record("product_id", &req.product_id);

        info!("Getting product: {}", req.product_id);

        let record = self.service.get(&RecordId::new(req.product_id)).await?;

        Ok(Response::new(GetProductResponse {
            product: Some(Product::from(&record)),
        }))
    }

    /// Lists every product.
    #[instrument(skip(self, _request))]
    async fn search_products(
        &self,
        _request: Request<SearchProductsRequest>,
    ) -> Result<Response<SearchProductsResponse>, Status> {
        let records = self.service.search().await?;

        Ok(Response::new(SearchProductsResponse {
            products: records.iter().map(Product::from).collect(),
        }))
    }

    /// Creates a product.
    #[instrument(skip(self, request))]
    async fn create_product(
        &self,
        request: Request<CreateProductRequest>,
    ) -> Result<Response<CreateProductResponse>, Status> {
        let req = request.into_inner();

        info!("Creating product: {}", req.name);

        let record = self
            .service
            .create(EntityInput::new(req.name, req.description))
            .await?;

        Ok(Response::new(CreateProductResponse {
            product: Some(Product::from(&record)),
        }))
    }

    /// Replaces a product's name and description.
    #[instrument(skip(self, request), fields(product_id))]
    async fn update_product(
        &self,
        request: Request<UpdateProductRequest>,
    ) -> Result<Response<UpdateProductResponse>, Status> {
        let req = request.into_inner();
        tracing::Span::current().record("product_id", &req.product_id);

        info!("Updating product: {}", req.product_id);

        let record = self
            .service
            .update(
                &RecordId::new(req.product_id),
                EntityInput::new(req.name, req.description),
            )
            .await?;

        Ok(Response::new(UpdateProductResponse {
            product: Some(Product::from(&record)),
        }))
    }

    /// Deletes a product.
    #[instrument(skip(self, request), fields(product_id))]
    async fn delete_product(
        &self,
        request: Request<DeleteProductRequest>,
    ) -> Result<Response<DeleteProductResponse>, Status> {
        let req = request.into_inner();
        tracing::Span::current().record("product_id", &req.product_id);

        info!("Deleting product: {}", req.product_id);

        let message = self.service.delete(&RecordId::new(req.product_id)).await?;

        Ok(Response::new(DeleteProductResponse { message }))
    }
}
