//! Application error types with HTTP status conversion.

use std::num::ParseIntError;

use axum::http::StatusCode;
use thiserror::Error;

/// Application-level errors for the six degrees service.
#[derive(Error, Debug)]
pub enum AppError {
    // Request errors
    #[error("invalid date for {param}: '{value}'")]
    InvalidDate { param: &'static str, value: String },

    #[error("invalid {param} '{value}': {source}")]
    InvalidParam {
        param: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    // Neo4j errors
    #[error("Neo4j connection error: {0}")]
    Connection(#[from] neo4rs::Error),

    #[error("Neo4j query error: {message}")]
    Query { message: String, query: String },

    #[error("Neo4j query timed out after {seconds}s")]
    Timeout { seconds: u64 },

    // Result mapping errors
    #[error("Result mapping error: {0}")]
    Mapping(String),

    #[error("Internal error: {0}")]
    Internal(String),

    // Config errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl AppError {
    /// True for errors caused by malformed client input.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidDate { .. } | AppError::InvalidParam { .. }
        )
    }

    /// HTTP status this error surfaces as at the boundary.
    pub fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
