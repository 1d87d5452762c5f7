//! Relationship query handlers.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::Response;
use chrono::Utc;
use serde::Serialize;

use super::{error_response, json_response, ApiState};
use crate::error::AppError;
use crate::params::{
    ConnectedPeopleParams, ConnectedPeopleQuery, MostMentionedParams, MostMentionedQuery,
};

/// Decoded query string in request order, repeated keys included.
type QueryPairs = Vec<(String, String)>;

/// `GET /sixdegrees/connectedPeople`
pub async fn connected_people(
    State(state): State<Arc<ApiState>>,
    pairs: Result<Query<QueryPairs>, QueryRejection>,
) -> Response {
    let query = match pairs {
        Ok(Query(pairs)) => ConnectedPeopleQuery::from_pairs(&pairs),
        Err(rejection) => return malformed_query(&rejection),
    };
    let params = match ConnectedPeopleParams::resolve(&query, Utc::now()) {
        Ok(params) => params,
        Err(e) => return rejection(&e, &query.from_date, &query.to_date),
    };

    match state.driver.connected_people(&params).await {
        Err(e) => {
            tracing::error!(uuid = %query.uuid, error = %e, "connected people failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error retrieving result for {}, err={}", query.uuid, e),
            )
        }
        Ok(lookup) if !lookup.found => error_response(
            StatusCode::NOT_FOUND,
            format!("No connected people found for person with uuid {}", query.uuid),
        ),
        Ok(lookup) => cacheable(&state, &lookup.items),
    }
}

/// `GET /sixdegrees/mostMentionedPeople`
pub async fn most_mentioned(
    State(state): State<Arc<ApiState>>,
    pairs: Result<Query<QueryPairs>, QueryRejection>,
) -> Response {
    let query = match pairs {
        Ok(Query(pairs)) => MostMentionedQuery::from_pairs(&pairs),
        Err(rejection) => return malformed_query(&rejection),
    };
    let params = match MostMentionedParams::resolve(&query, Utc::now()) {
        Ok(params) => params,
        Err(e) => return rejection(&e, &query.from_date, &query.to_date),
    };

    match state.driver.most_mentioned(&params).await {
        Err(e) => {
            tracing::error!(error = %e, "most mentioned failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error retrieving result from DB",
            )
        }
        Ok(lookup) if !lookup.found => error_response(StatusCode::NOT_FOUND, "No result"),
        Ok(lookup) => cacheable(&state, &lookup.items),
    }
}

/// Response for a request whose parameters failed to resolve.
fn rejection(err: &AppError, from_date: &str, to_date: &str) -> Response {
    tracing::warn!(error = %err, "rejected request parameters");

    let message = match err {
        AppError::InvalidDate { .. } => format!(
            "Error converting toDate or fromDate query params: fromDate={}, toDate={}",
            from_date, to_date
        ),
        AppError::InvalidParam { param, source, .. } => {
            format!("Error converting {} query param, err={}", param, source)
        }
        other => other.to_string(),
    };
    error_response(err.status_code(), message)
}

fn malformed_query(rejection: &QueryRejection) -> Response {
    tracing::warn!(error = %rejection, "unreadable query string");
    error_response(StatusCode::BAD_REQUEST, rejection.body_text())
}

fn cacheable<T: Serialize>(state: &ApiState, body: &T) -> Response {
    let mut response = json_response(StatusCode::OK, body);
    if response.status() == StatusCode::OK {
        response
            .headers_mut()
            .insert(header::CACHE_CONTROL, state.cache_control.clone());
    }
    response
}
