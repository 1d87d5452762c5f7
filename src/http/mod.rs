//! HTTP boundary: routes, shared state and response helpers.
//!
//! | Route | Handler |
//! |-------|---------|
//! | `GET /sixdegrees/connectedPeople` | [`handlers::connected_people`] |
//! | `GET /sixdegrees/mostMentionedPeople` | [`handlers::most_mentioned`] |
//! | `GET /__health` | [`health::health`] |
//! | `GET /__gtg` | [`health::good_to_go`] |
//! | `GET /__ping`, `/ping` | [`health::ping`] |
//! | `GET /__build-info`, `/build-info` | [`health::build_info`] |

pub mod handlers;
pub mod health;

use std::sync::Arc;

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::services::SixDegreesDriver;

/// Content type of every JSON response.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Shared handler state, built once at startup.
pub struct ApiState {
    pub driver: Arc<dyn SixDegreesDriver>,
    pub cache_control: HeaderValue,
    pub system_code: String,
    pub app_name: String,
}

impl ApiState {
    pub fn new(
        driver: Arc<dyn SixDegreesDriver>,
        cache_control: &str,
        system_code: impl Into<String>,
        app_name: impl Into<String>,
    ) -> Result<Self, AppError> {
        let cache_control = HeaderValue::from_str(cache_control).map_err(|e| {
            AppError::Internal(format!("invalid Cache-Control value '{}': {}", cache_control, e))
        })?;

        Ok(Self {
            driver,
            cache_control,
            system_code: system_code.into(),
            app_name: app_name.into(),
        })
    }
}

/// Builds the application router.
pub fn router(state: Arc<ApiState>, request_logging: bool) -> Router {
    let api = Router::new()
        .route(
            "/sixdegrees/connectedPeople",
            get(handlers::connected_people),
        )
        .route(
            "/sixdegrees/mostMentionedPeople",
            get(handlers::most_mentioned),
        );

    let api = if request_logging {
        api.layer(TraceLayer::new_for_http())
    } else {
        api
    };

    Router::new()
        .route("/__health", get(health::health))
        .route("/__gtg", get(health::good_to_go))
        .route("/__ping", get(health::ping))
        .route("/ping", get(health::ping))
        .route("/__build-info", get(health::build_info))
        .route("/build-info", get(health::build_info))
        .merge(api)
        .with_state(state)
}

/// Error body of every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    pub message: String,
}

/// Serializes `body` with the JSON content type.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => (status, [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], bytes).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to encode response body");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    json_response(
        status,
        &ErrorMessage {
            message: message.into(),
        },
    )
}
