//! # GraphQL Schema
//!
//! Query and mutation roots. Each resolver calls the matching entity
//! operation on the [`Gateways`] stored in the schema data.

use crate::api::graphql::error::resolver_error;
use crate::api::graphql::types::{Product, Supplier};
use crate::application::dto::EntityInput;
use crate::application::gateway::{EntityGateway, Gateways};
use crate::domain::value_objects::RecordId;
use async_graphql::extensions::Tracing;
use async_graphql::{Context, EmptySubscription, Object, Result, Schema};

/// The executable catalog schema.
pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema over `gateways`.
///
/// Every request and resolver runs in its own `tracing` span.
#[must_use]
pub fn build_schema(gateways: Gateways) -> CatalogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .extension(Tracing)
        .data(gateways)
        .finish()
}

/// Read operations.
#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get a supplier by ID.
    async fn supplier(&self, ctx: &Context<'_>, id: String) -> Result<Supplier> {
        let gateways = ctx.data::<Gateways>()?;
        gateways
            .suppliers
            .get(&RecordId::new(id))
            .await
            .map(Supplier::from)
            .map_err(|e| resolver_error("searching for supplier", e))
    }

    /// Get all suppliers.
    async fn suppliers(&self, ctx: &Context<'_>) -> Result<Vec<Supplier>> {
        let gateways = ctx.data::<Gateways>()?;
        let records = gateways
            .suppliers
            .search()
            .await
            .map_err(|e| resolver_error("searching for suppliers", e))?;
        Ok(records.into_iter().map(Supplier::from).collect())
    }

    /// Get a product by ID.
    async fn product(&self, ctx: &Context<'_>, id: String) -> Result<Product> {
        let gateways = ctx.data::<Gateways>()?;
        gateways
            .products
            .get(&RecordId::new(id))
            .await
            .map(Product::from)
            .map_err(|e| resolver_error("searching for product", e))
    }

    /// Get all products.
    async fn products(&self, ctx: &Context<'_>) -> Result<Vec<Product>> {
        let gateways = ctx.data::<Gateways>()?;
        let records = gateways
            .products
            .search()
            .await
            .map_err(|e| resolver_error("searching for products", e))?;
        Ok(records.into_iter().map(Product::from).collect())
    }
}

/// Write operations.
#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a new supplier.
    async fn create_supplier(
        &self,
        ctx: &Context<'_>,
        name: String,
        description: String,
    ) -> Result<Supplier> {
        let gateways = ctx.data::<Gateways>()?;
        gateways
            .suppliers
            .create(EntityInput::new(name, description))
            .await
            .map(Supplier::from)
            .map_err(|e| resolver_error("creating supplier", e))
    }

    /// Delete a supplier by ID.
    async fn delete_supplier(&self, ctx: &Context<'_>, id: String) -> Result<String> {
        let gateways = ctx.data::<Gateways>()?;
        gateways
            .suppliers
            .delete(&RecordId::new(id))
            .await
            .map_err(|e| resolver_error("deleting supplier", e))
    }

    /// Update a supplier by ID.
    async fn update_supplier(
        &self,
        ctx: &Context<'_>,
        id: String,
        name: String,
        description: String,
    ) -> Result<Supplier> {
        let gateways = ctx.data::<Gateways>()?;
        gateways
            .suppliers
            .update(&RecordId::new(id), EntityInput::new(name, description))
            .await
            .map(Supplier::from)
            .map_err(|e| resolver_error("updating supplier", e))
    }

    /// Create a new product.
    async fn create_product(
        &self,
        ctx: &Context<'_>,
        name: String,
        description: String,
    ) -> Result<Product> {
        let gateways = ctx.data::<Gateways>()?;
        gateways
            .products
            .create(EntityInput::new(name, description))
            .await
            .map(Product::from)
            .map_err(|e| resolver_error("creating product", e))
    }

    /// Delete a product by ID.
    async fn delete_product(&self, ctx: &Context<'_>, id: String) -> Result<String> {
        let gateways = ctx.data::<Gateways>()?;
        gateways
            .products
            .delete(&RecordId::new(id))
            .await
            .map_err(|e| resolver_error("deleting product", e))
    }

    /// Update a product by ID.
    async fn update_product(
        &self,
        ctx: &Context<'_>,
        id: String,
        name: String,
        description: String,
    ) -> Result<Product> {
        let gateways = ctx.data::<Gateways>()?;
        gateways
            .products
            .update(&RecordId::new(id), EntityInput::new(name, description))
            .await
            .map(Product::from)
            .map_err(|e| resolver_error("updating product", e))
    }
}
