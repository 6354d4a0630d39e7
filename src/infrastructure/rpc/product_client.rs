//! # Product RPC Client
//!
//! [`EntityGateway`] over a remote `product.ProductService`.

use crate::application::dto::EntityInput;
use crate::application::error::ApplicationResult;
use crate::application::gateway::EntityGateway;
use crate::domain::entities::{EntityKind, EntityRecord};
use crate::domain::value_objects::RecordId;
use crate::infrastructure::rpc::channel::lazy_channel;
use crate::infrastructure::rpc::status::{from_conversion, from_status};
use crate::proto::ConversionError;
use crate::proto::product::{
    CreateProductRequest, DeleteProductRequest, GetProductRequest, SearchProductsRequest,
    Product, UpdateProductRequest, product_service_client::ProductServiceClient,
};
use async_trait::async_trait;
use tonic::transport::Channel;
use tracing::instrument;

const KIND: EntityKind = EntityKind::Product;

/// Client for the Product microservice.
#[derive(Debug, Clone)]
pub struct ProductRpcClient {
    client: ProductServiceClient<Channel>,
}

impl ProductRpcClient {
    /// Creates a client over an existing channel.
    #[must_use]
    pub fn new(channel: Channel) -> Self {
        Self {
            client: ProductServiceClient::new(channel),
        }
    }

    /// Creates a client that connects to `endpoint` on first use.
    ///
    /// # Errors
    ///
    /// Returns an upstream error if `endpoint` is not a valid URI.
    pub fn connect_lazy(endpoint: &str) -> ApplicationResult<Self> {
        Ok(Self::new(lazy_channel(endpoint)?))
    }
}

fn into_record(product: Option<Product>) -> ApplicationResult<EntityRecord> {
    product
        .ok_or(ConversionError::MissingField("product"))
        .and_then(EntityRecord::try_from)
        .map_err(|e| from_conversion(KIND, e))
}

#[async_trait]
impl EntityGateway for ProductRpcClient {
    fn kind(&self) -> EntityKind {
        KIND
    }

    #[instrument(skip(self))]
    async fn get(&self, id: &RecordId) -> ApplicationResult<EntityRecord> {
        let request = GetProductRequest {
            product_id: id.to_string(),
        };
        let response = self
            .client
            .clone()
            .get_product(request)
            .await
            .map_err(|s| from_status(KIND, id.as_str(), s))?
            .into_inner();
        into_record(response.product)
    }

    #[instrument(skip(self))]
    async fn search(&self) -> ApplicationResult<Vec<EntityRecord>> {
        let response = self
            .client
            .clone()
            .search_products(SearchProductsRequest {})
            .await
            .map_err(|s| from_status(KIND, "", s))?
            .into_inner();
        response
            .products
            .into_iter()
            .map(|s| EntityRecord::try_from(s).map_err(|e| from_conversion(KIND, e)))
            .collect()
    }

    #[instrument(skip(self, input))]
    async fn create(&self, input: EntityInput) -> ApplicationResult<EntityRecord> {
        let request = CreateProductRequest {
            name: input.name,
            description: input.description,
        };
        let response = self
            .client
            .clone()
            .create_product(request)
            .await
            .map_err(|s| from_status(KIND, "", s))?
            .into_inner();
        into_record(response.product)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: &RecordId, input: EntityInput) -> ApplicationResult<EntityRecord> {
        let request = UpdateProductRequest {
            product_id: id.to_string(),
            name: input.name,
            description: input.description,
        };
        let response = self
            .client
            .clone()
            .update_product(request)
            .await
            .map_err(|s| from_status(KIND, id.as_str(), s))?
            .into_inner();
        into_record(response.product)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &RecordId) -> ApplicationResult<String> {
        let request = DeleteProductRequest {
            product_id: id.to_string(),
        };
        let response = self
            .client
            .clone()
            .delete_product(request)
            .await
            .map_err(|s| from_status(KIND, id.as_str(), s))?
            .into_inner();
        Ok(response.message)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::error::ApplicationError;

    #[test]
    fn missing_product_in_response_is_upstream() {
        let err = into_record(None).unwrap_err();
        assert!(matches!(err, ApplicationError::Upstream(_)));
    }

    #[tokio::test]
    async fn unreachable_service_is_upstream() {
        // Port 1 is reserved and nothing listens there.
        let client = ProductRpcClient::connect_lazy("http://127.0.0.1:1").unwrap();
        assert_eq!(client.kind(), EntityKind::Product);

        let err = client.search().await.unwrap_err();
        assert!(matches!(err, ApplicationError::Upstream(_)));
    }
}
