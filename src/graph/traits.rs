//! Core traits for the graph engine seam.
//!
//! - [`CypherExecutor`] - Run a read statement and stream rows back
//! - [`GraphClient`] - A pooled engine connection that can be probed

use async_trait::async_trait;

use crate::error::AppError;
use crate::graph::row::{Params, RowStream};

/// Executes Cypher statements against a graph engine.
///
/// Statements are single-shot: one call issues one statement, and any
/// failure is reported once through the returned `Result` or stream.
#[async_trait]
pub trait CypherExecutor: Send + Sync {
    /// Executes a Cypher statement and returns a stream of result rows.
    ///
    /// # Arguments
    ///
    /// * `cypher` - The Cypher statement
    /// * `params` - Named parameters referenced as `$name` in the statement
    async fn execute_cypher(&self, cypher: &str, params: Params)
        -> Result<RowStream<'_>, AppError>;
}

/// A graph engine client that owns a connection pool.
#[async_trait]
pub trait GraphClient: CypherExecutor {
    /// Issues a trivial statement to verify the engine is reachable.
    async fn ping(&self) -> Result<(), AppError> {
        use futures::TryStreamExt;

        let mut rows = self.execute_cypher("RETURN 1 AS ok", Params::new()).await?;
        while rows.try_next().await?.is_some() {}
        Ok(())
    }
}
