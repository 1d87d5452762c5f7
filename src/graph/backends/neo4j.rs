//! Neo4j backend over the Bolt protocol.
//!
//! # Example
//!
//! ```ignore
//! use sixdegrees::graph::backends::neo4j::Neo4jClient;
//! use sixdegrees::graph::{Graph, QueryExt};
//!
//! let client = Neo4jClient::connect(&config.neo4j).await?;
//! let graph = Graph::new(client);
//!
//! let rows = graph.query("MATCH (c:Content) RETURN c.uuid AS uuid LIMIT 5")
//!     .fetch_all()
//!     .await?;
//! ```

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use neo4rs::{BoltList, BoltMap, BoltNull, BoltString, BoltType, ConfigBuilder};
use serde_json::Value as JsonValue;
use tokio::time::timeout;

use crate::config::Neo4jConfig;
use crate::error::AppError;
use crate::graph::row::{Params, Row, RowStream};
use crate::graph::traits::{CypherExecutor, GraphClient};

/// Neo4j graph client.
///
/// Wraps the pooled `neo4rs::Graph`; cheap to clone.
#[derive(Clone)]
pub struct Neo4jClient {
    graph: Arc<neo4rs::Graph>,
    query_timeout: Duration,
}

impl Neo4jClient {
    /// Connects to Neo4j and builds the connection pool.
    pub async fn connect(config: &Neo4jConfig) -> Result<Self, AppError> {
        let mut builder = ConfigBuilder::default()
            .uri(config.uri.as_str())
            .user(config.user.as_str())
            .password(config.password.as_deref().unwrap_or(""))
            .max_connections(config.max_connections)
            .fetch_size(config.fetch_size);
        if let Some(db) = &config.database {
            builder = builder.db(db.as_str());
        }

        let graph = neo4rs::Graph::connect(builder.build()?).await?;

        Ok(Self {
            graph: Arc::new(graph),
            query_timeout: config.query_timeout(),
        })
    }

    fn timeout_error(&self) -> AppError {
        AppError::Timeout {
            seconds: self.query_timeout.as_secs(),
        }
    }
}

#[async_trait]
impl CypherExecutor for Neo4jClient {
    async fn execute_cypher(
        &self,
        cypher: &str,
        params: Params,
    ) -> Result<RowStream<'_>, AppError> {
        use async_stream::try_stream;

        let query = build_bolt_query(cypher, params);
        let statement = cypher.to_string();

        Ok(Box::pin(try_stream! {
            let mut result = timeout(self.query_timeout, self.graph.execute(query))
                .await
                .map_err(|_| self.timeout_error())?
                .map_err(|e| AppError::Query {
                    message: format!("Cypher query failed: {}", e),
                    query: statement.clone(),
                })?;

            loop {
                let next = timeout(self.query_timeout, result.next())
                    .await
                    .map_err(|_| self.timeout_error())?
                    .map_err(|e| AppError::Query {
                        message: format!("Failed to fetch row: {}", e),
                        query: statement.clone(),
                    })?;

                match next {
                    Some(row) => yield parse_bolt_row(&row, &statement)?,
                    None => break,
                }
            }
        }))
    }
}

#[async_trait]
impl GraphClient for Neo4jClient {}

/// Binds JSON parameters onto a Bolt query.
fn build_bolt_query(cypher: &str, params: Params) -> neo4rs::Query {
    params
        .into_iter()
        .fold(neo4rs::query(cypher), |query, (name, value)| {
            query.param(&name, json_to_bolt(value))
        })
}

/// Converts a JSON value into the equivalent Bolt value.
///
/// Integral numbers become Bolt integers; everything else numeric is a float.
fn json_to_bolt(value: JsonValue) -> BoltType {
    match value {
        JsonValue::Null => BoltType::Null(BoltNull),
        JsonValue::Bool(b) => BoltType::from(b),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => BoltType::from(i),
            None => BoltType::from(n.as_f64().unwrap_or_default()),
        },
        JsonValue::String(s) => BoltType::from(s),
        JsonValue::Array(items) => {
            let mut list = BoltList::with_capacity(items.len());
            for item in items {
                list.push(json_to_bolt(item));
            }
            BoltType::List(list)
        }
        JsonValue::Object(fields) => {
            let mut map = BoltMap::with_capacity(fields.len());
            for (key, item) in fields {
                map.put(BoltString::from(key.as_str()), json_to_bolt(item));
            }
            BoltType::Map(map)
        }
    }
}

/// Converts a Bolt row into a column → JSON row.
fn parse_bolt_row(row: &neo4rs::Row, statement: &str) -> Result<Row, AppError> {
    let data: HashMap<String, JsonValue> = row.to().map_err(|e| AppError::Query {
        message: format!("Failed to decode row: {}", e),
        query: statement.to_string(),
    })?;
    Ok(Row::new(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_to_bolt_scalars() {
        assert_eq!(json_to_bolt(JsonValue::Null), BoltType::Null(BoltNull));
        assert_eq!(json_to_bolt(json!(true)), BoltType::from(true));
        assert_eq!(json_to_bolt(json!(1481500800)), BoltType::from(1481500800_i64));
        assert_eq!(json_to_bolt(json!(0.5)), BoltType::from(0.5_f64));
        assert_eq!(
            json_to_bolt(json!("b30ec30e")),
            BoltType::from("b30ec30e".to_string())
        );
    }

    #[test]
    fn test_json_to_bolt_negative_integer_stays_integral() {
        assert_eq!(json_to_bolt(json!(-3)), BoltType::from(-3_i64));
    }

    #[test]
    fn test_json_to_bolt_list() {
        match json_to_bolt(json!(["a", "b"])) {
            BoltType::List(list) => assert_eq!(list.len(), 2),
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_json_to_bolt_map() {
        match json_to_bolt(json!({"uuid": "abc", "count": 2})) {
            BoltType::Map(map) => {
                assert_eq!(map.get::<String>("uuid").unwrap(), "abc");
                assert_eq!(map.get::<i64>("count").unwrap(), 2);
            }
            other => panic!("expected map, got {:?}", other),
        }
    }
}
