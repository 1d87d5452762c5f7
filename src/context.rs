//! Application context: the construction root.
//!
//! Everything the HTTP layer needs is built here once at startup and
//! passed down explicitly.

use std::sync::Arc;

use crate::config::Config;
use crate::error::AppError;
use crate::graph::backends::neo4j::Neo4jClient;
use crate::graph::Graph;
use crate::http::ApiState;
use crate::services::{CypherDriver, ResultMapper, SixDegreesDriver};

/// Shared dependencies for one running service.
#[derive(Clone)]
pub struct Context {
    /// Application configuration.
    pub config: Arc<Config>,
    /// The graph-backed query service.
    pub driver: Arc<dyn SixDegreesDriver>,
}

impl Context {
    /// Creates a context around an already-built driver.
    pub fn new(config: Config, driver: Arc<dyn SixDegreesDriver>) -> Self {
        Self {
            config: Arc::new(config),
            driver,
        }
    }

    /// Connects to Neo4j and builds the query service.
    pub async fn from(config: Config) -> Result<Self, AppError> {
        tracing::info!(uri = %config.neo4j.uri, "connecting to Neo4j");
        let client = Neo4jClient::connect(&config.neo4j).await?;

        let mapper = ResultMapper::new(config.api.base_url.clone());
        let driver = CypherDriver::new(Graph::new(client), mapper);

        Ok(Self::new(config, Arc::new(driver)))
    }

    /// Builds the state shared by the HTTP handlers.
    pub fn api_state(&self) -> Result<ApiState, AppError> {
        let cache_control = self.config.cache_control_header()?;
        ApiState::new(
            self.driver.clone(),
            &cache_control,
            self.config.system_code.clone(),
            self.config.app_name.clone(),
        )
    }
}
