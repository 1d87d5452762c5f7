//! Row and streaming types for query results.

use crate::error::AppError;
use futures::Stream;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::pin::Pin;

/// Parameters for Cypher queries.
///
/// A map of parameter names to JSON values that can be passed to queries.
pub type Params = HashMap<String, JsonValue>;

/// A stream of rows from a query result.
pub type RowStream<'a> = Pin<Box<dyn Stream<Item = Result<Row, AppError>> + Send + 'a>>;

/// A single row from a query result.
///
/// Contains column values as JSON, decoded as a whole via [`Row::to`].
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    data: HashMap<String, JsonValue>,
}

impl Row {
    /// Creates a new row from a map of column names to values.
    pub fn new(data: HashMap<String, JsonValue>) -> Self {
        Self { data }
    }

    /// Deserializes the whole row into a struct keyed by column name.
    pub fn to<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        let object = self
            .data
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect::<serde_json::Map<_, _>>();
        serde_json::from_value(JsonValue::Object(object))
            .map_err(|e| AppError::Internal(format!("failed to deserialize row: {}", e)))
    }
}
