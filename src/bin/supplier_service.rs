//! # Supplier Service
//!
//! gRPC microservice for the Supplier collection.

use catalog_gateway::bootstrap::{init_tracing, run_entity_service};
use catalog_gateway::config::AppConfig;
use catalog_gateway::domain::entities::EntityKind;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.log).map_err(|e| anyhow::anyhow!(e))?;

    info!("Starting supplier service v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_entity_service(EntityKind::Supplier, &config).await {
        error!("Supplier service exited: {:#}", e);
        return Err(e);
    }

    Ok(())
}
