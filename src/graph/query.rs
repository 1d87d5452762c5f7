//! Query builder for fluent Cypher query construction.

use futures::TryStreamExt;
use serde::Serialize;

use crate::error::AppError;
use crate::graph::row::{Params, Row, RowStream};
use crate::graph::traits::CypherExecutor;

/// A builder for constructing and executing Cypher queries.
///
/// # Example
///
/// ```ignore
/// let rows = Query::new(&client, "MATCH (p:Person {prefUUID: $uuid}) RETURN p.prefLabel AS prefLabel")
///     .param("uuid", uuid)
///     .fetch_all()
///     .await?;
/// ```
pub struct Query<'a, E: CypherExecutor + ?Sized> {
    executor: &'a E,
    cypher: String,
    params: Params,
    // First parameter that failed to serialize; reported on execution.
    param_error: Option<String>,
}

impl<'a, E: CypherExecutor + ?Sized> Query<'a, E> {
    /// Creates a new query builder.
    pub fn new(executor: &'a E, cypher: &str) -> Self {
        Self {
            executor,
            cypher: cypher.to_string(),
            params: Params::new(),
            param_error: None,
        }
    }

    /// Adds a parameter to the query.
    ///
    /// Parameters are referenced in Cypher using `$name` syntax. A value that
    /// cannot be serialized makes the query fail when it is executed.
    pub fn param<T: Serialize>(mut self, name: &str, value: T) -> Self {
        match serde_json::to_value(value) {
            Ok(json_value) => {
                self.params.insert(name.to_string(), json_value);
            }
            Err(e) => {
                self.param_error
                    .get_or_insert_with(|| format!("failed to serialize parameter '{}': {}", name, e));
            }
        }
        self
    }

    /// Executes the query and returns a stream of rows.
    pub async fn execute(self) -> Result<RowStream<'a>, AppError> {
        if let Some(message) = self.param_error {
            return Err(AppError::Internal(message));
        }
        self.executor
            .execute_cypher(&self.cypher, self.params)
            .await
    }

    /// Executes the query and collects all rows into a vector.
    pub async fn fetch_all(self) -> Result<Vec<Row>, AppError> {
        self.execute().await?.try_collect().await
    }
}

/// Extension trait providing a convenient `query()` method.
///
/// Automatically implemented for all [`CypherExecutor`] types, allowing
/// `executor.query("...")` instead of `Query::new(&executor, "...")`.
pub trait QueryExt: CypherExecutor {
    /// Creates a new query builder for this executor.
    fn query(&self, cypher: &str) -> Query<'_, Self>
    where
        Self: Sized,
    {
        Query::new(self, cypher)
    }
}

impl<E: CypherExecutor> QueryExt for E {}
