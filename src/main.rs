//! # Catalog Gateway
//!
//! Serves the REST and GraphQL façades over the entity microservices.

use catalog_gateway::bootstrap::{init_tracing, run_gateway};
use catalog_gateway::config::AppConfig;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.log).map_err(|e| anyhow::anyhow!(e))?;

    info!(
        "Starting {} gateway v{}",
        config.service_name,
        env!("CARGO_PKG_VERSION")
    );

    run_gateway(&config).await?;

    info!("Shutting down {} gateway", config.service_name);
    Ok(())
}
