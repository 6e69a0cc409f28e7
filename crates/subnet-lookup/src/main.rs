//! Subnet Lookup
//!
//! Reads one VPC subnet through the `ibm_is_subnet` data source and prints
//! the resulting state as JSON. The subnet is selected with either
//! `SUBNET_IDENTIFIER` or `SUBNET_NAME`.

mod config;
mod error;

use anyhow::Context;
use config::Config;
use serde_json::json;
use subnet_datasource::{DATA_SOURCE_NAME, SubnetDataSource};
use tracing::info;
use tracing_subscriber::EnvFilter;
use vpc_client::{GlobalTaggingClient, VpcClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting {} lookup", DATA_SOURCE_NAME);

    let config = Config::from_env()?;

    info!("Configuration:");
    info!("  VPC URL: {}", config.vpc_url);
    info!("  Tagging URL: {}", config.tagging_url);
    info!("  Controller URL: {}", config.controller_url);

    let vpc_client = VpcClient::new(config.vpc_url.clone(), config.token.clone())
        .map_err(error::LookupError::from)?;
    let tagging_client = GlobalTaggingClient::new(config.tagging_url.clone(), config.token.clone())
        .map_err(error::LookupError::from)?;
    let data_source = SubnetDataSource::new(
        Box::new(vpc_client),
        Box::new(tagging_client),
        config.controller_url.clone(),
    );

    let read = data_source
        .read(&config.lookup)
        .await
        .map_err(error::LookupError::from)
        .context("subnet read failed")?;

    let output = json!({
        "id": read.state.id,
        "attributes": read.state.to_attributes(),
        "warnings": read.warnings,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("failed to render state")?
    );

    Ok(())
}
