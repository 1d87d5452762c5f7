//! Graph abstraction layer over the external graph engine.
//!
//! The engine is reached only through these traits, so the query
//! builders and services can be exercised against in-memory stubs.
//!
//! - [`CypherExecutor`] - Execute a Cypher statement and stream rows
//! - [`GraphClient`] - Pooled connection with a connectivity probe
//!
//! # Usage
//!
//! ```ignore
//! use sixdegrees::graph::{Graph, QueryExt};
//! use sixdegrees::graph::backends::neo4j::Neo4jClient;
//!
//! let graph = Graph::new(Neo4jClient::connect(&config.neo4j).await?);
//!
//! let rows = graph
//!     .query("MATCH (p:Person {prefUUID: $uuid}) RETURN p.prefLabel AS prefLabel")
//!     .param("uuid", uuid)
//!     .fetch_all()
//!     .await?;
//! ```

mod macros;
mod query;
mod row;
mod traits;

pub mod backends;

// Re-export core types
pub use query::{Query, QueryExt};
pub use row::{Params, Row, RowStream};
pub use traits::{CypherExecutor, GraphClient};

// Re-export macro (defined at crate root via #[macro_export])
#[doc(inline)]
pub use crate::cypher;

use crate::error::AppError;

/// High-level wrapper around any [`GraphClient`].
pub struct Graph<C: GraphClient> {
    client: C,
}

impl<C: GraphClient> Graph<C> {
    /// Creates a new graph wrapper around the given client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Returns a reference to the underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Creates a query builder for a single auto-commit statement.
    pub fn query(&self, cypher: &str) -> Query<'_, C> {
        Query::new(&self.client, cypher)
    }

    /// Verifies the engine answers a trivial statement.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.client.ping().await
    }
}

// Forward CypherExecutor to the underlying client for convenience
#[async_trait::async_trait]
impl<C: GraphClient> CypherExecutor for Graph<C> {
    async fn execute_cypher(
        &self,
        cypher: &str,
        params: Params,
    ) -> Result<RowStream<'_>, AppError> {
        self.client.execute_cypher(cypher, params).await
    }
}

#[async_trait::async_trait]
impl<C: GraphClient> GraphClient for Graph<C> {
    async fn ping(&self) -> Result<(), AppError> {
        self.client.ping().await
    }
}
