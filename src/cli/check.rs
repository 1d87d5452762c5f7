//! Connectivity check command handler.

use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::config::Config;
use crate::context::Context;

pub async fn run(config: Config) -> Result<()> {
    let ctx = Context::from(config).await?;

    match ctx.driver.check_connectivity().await {
        Ok(()) => {
            tracing::info!(uri = %ctx.config.neo4j.uri, "Connectivity to neo4j is ok");
            Ok(())
        }
        Err(e) => {
            tracing::error!(uri = %ctx.config.neo4j.uri, error = %e, "Error connecting to neo4j");
            Err(eyre!("Error connecting to neo4j: {}", e))
        }
    }
}
