//! # Supplier RPC Client
//!
//! [`EntityGateway`] over a remote `supplier.SupplierService`.

use crate::application::dto::EntityInput;
use crate::application::error::ApplicationResult;
use crate::application::gateway::EntityGateway;
use crate::domain::entities::{EntityKind, EntityRecord};
use crate::domain::value_objects::RecordId;
use crate::infrastructure::rpc::channel::lazy_channel;
use crate::infrastructure::rpc::status::{from_conversion, from_status};
use crate::proto::ConversionError;
use crate::proto::supplier::{
    CreateSupplierRequest, DeleteSupplierRequest, GetSupplierRequest, SearchSuppliersRequest,
    Supplier, UpdateSupplierRequest, supplier_service_client::SupplierServiceClient,
};
use async_trait::async_trait;
use tonic::transport::Channel;
use tracing::instrument;

const KIND: EntityKind = EntityKind::Supplier;

/// Client for the Supplier microservice.
#[derive(Debug, Clone)]
pub struct SupplierRpcClient {
    client: SupplierServiceClient<Channel>,
}

impl SupplierRpcClient {
    /// Creates a client over an existing channel.
    #[must_use]
    pub fn new(channel: Channel) -> Self {
        Self {
            client: SupplierServiceClient::new(channel),
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

fn into_record(supplier: Option<Supplier>) -> ApplicationResult<EntityRecord> {
    supplier
        .ok_or(ConversionError::MissingField("supplier"))
        .and_then(EntityRecord::try_from)
        .map_err(|e| from_conversion(KIND, e))
}

#[async_trait]
impl EntityGateway for SupplierRpcClient {
    fn kind(&self) -> EntityKind {
        KIND
    }

    #[instrument(skip(self))]
    async fn get(&self, id: &RecordId) -> ApplicationResult<EntityRecord> {
        let request = GetSupplierRequest {
            supplier_id: id.to_string(),
        };
        let response = self
            .client
            .clone()
            .get_supplier(request)
            .await
            .map_err(|s| from_status(KIND, id.as_str(), s))?
            .into_inner();
        into_record(response.supplier)
    }

    #[instrument(skip(self))]
    async fn search(&self) -> ApplicationResult<Vec<EntityRecord>> {
        let response = self
            .client
            .clone()
            .search_suppliers(SearchSuppliersRequest {})
            .await
            .map_err(|s| from_status(KIND, "", s))?
            .into_inner();
        response
            .suppliers
            .into_iter()
            .map(|s| EntityRecord::try_from(s).map_err(|e| from_conversion(KIND, e)))
            .collect()
    }

    #[instrument(skip(self, input))]
    async fn create(&self, input: EntityInput) -> ApplicationResult<EntityRecord> {
        let request = CreateSupplierRequest {
            name: input.name,
            description: input.description,
        };
        let response = self
            .client
            .clone()
            .create_supplier(request)
            .await
            .map_err(|s| from_status(KIND, "", s))?
            .into_inner();
        into_record(response.supplier)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: &RecordId, input: EntityInput) -> ApplicationResult<EntityRecord> {
        let request = UpdateSupplierRequest {
            supplier_id: id.to_string(),
            name: input.name,
            description: input.description,
        };
        let response = self
            .client
            .clone()
            .update_supplier(request)
            .await
            .map_err(|s| from_status(KIND, id.as_str(), s))?
            .into_inner();
        into_record(response.supplier)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &RecordId) -> ApplicationResult<String> {
        let request = DeleteSupplierRequest {
            supplier_id: id.to_string(),
        };
        let response = self
            .client
            .clone()
            .delete_supplier(request)
            .await
            .map_err(|s| from_status(KIND, id.as_str(), s))?
            .into_inner();
        Ok(response.message)
    }
}
