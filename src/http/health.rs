//! Operational endpoints: health, good-to-go, ping and build info.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde::Serialize;

use super::{json_response, ApiState};
use crate::error::AppError;

/// Upper bound on the connectivity probe behind `/__health` and `/__gtg`.
pub const HEALTH_TIMEOUT: Duration = Duration::from_secs(10);

const CHECK_ID: &str = "check-connectivity-to-neo4j";
const CHECK_NAME: &str = "Check connectivity to Neo4j";
const BUSINESS_IMPACT: &str = "Unable to respond to Public Six Degrees";
const TECHNICAL_SUMMARY: &str =
    "Cannot connect to Neo4j. If this check fails, check that Neo4j instance is up and running.";
const PANIC_GUIDE: &str = "https://dewey.ft.com/public-six-degrees-api.html";
const DESCRIPTION: &str = "Six Degrees Backend provides mostMentionedPeople and connectedPeople \
                           endpoints for Six Degrees Frontend.";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheck {
    pub id: &'static str,
    pub name: &'static str,
    pub ok: bool,
    pub severity: u8,
    pub business_impact: &'static str,
    pub technical_summary: &'static str,
    pub panic_guide: &'static str,
    pub check_output: String,
    pub last_updated: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub schema_version: u8,
    pub system_code: String,
    pub name: String,
    pub description: &'static str,
    pub checks: Vec<HealthCheck>,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<u8>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    pub version: &'static str,
    pub revision: &'static str,
    pub builder: &'static str,
    pub date_time: &'static str,
}

async fn probe(state: &ApiState) -> Result<(), AppError> {
    match tokio::time::timeout(HEALTH_TIMEOUT, state.driver.check_connectivity()).await {
        Ok(result) => result,
        Err(_) => Err(AppError::Timeout {
            seconds: HEALTH_TIMEOUT.as_secs(),
        }),
    }
}

/// `GET /__health`. Always 200; failures are reported in the document.
pub async fn health(State(state): State<Arc<ApiState>>) -> Response {
    let outcome = probe(&state).await;
    if let Err(e) = &outcome {
        tracing::warn!(error = %e, "connectivity check failed");
    }

    let ok = outcome.is_ok();
    let check = HealthCheck {
        id: CHECK_ID,
        name: CHECK_NAME,
        ok,
        severity: 1,
        business_impact: BUSINESS_IMPACT,
        technical_summary: TECHNICAL_SUMMARY,
        panic_guide: PANIC_GUIDE,
        check_output: match &outcome {
            Ok(()) => "Connectivity to neo4j is ok".to_string(),
            Err(e) => format!("Error connecting to neo4j: {}", e),
        },
        last_updated: Utc::now().to_rfc3339(),
    };

    json_response(
        StatusCode::OK,
        &HealthReport {
            schema_version: 1,
            system_code: state.system_code.clone(),
            name: state.app_name.clone(),
            description: DESCRIPTION,
            checks: vec![check],
            ok,
            severity: (!ok).then_some(1),
        },
    )
}

/// `GET /__gtg`
pub async fn good_to_go(State(state): State<Arc<ApiState>>) -> Response {
    match probe(&state).await {
        Ok(()) => (StatusCode::OK, "OK").into_response(),
        Err(e) => (StatusCode::SERVICE_UNAVAILABLE, e.to_string()).into_response(),
    }
}

/// `GET /__ping` and `GET /ping`
pub async fn ping() -> &'static str {
    "pong"
}

/// `GET /__build-info` and `GET /build-info`
pub async fn build_info() -> Response {
    json_response(
        StatusCode::OK,
        &BuildInfo {
            version: env!("CARGO_PKG_VERSION"),
            revision: option_env!("SIXDEGREES_BUILD_REVISION").unwrap_or("unknown"),
            builder: option_env!("SIXDEGREES_BUILD_BUILDER").unwrap_or("cargo"),
            date_time: option_env!("SIXDEGREES_BUILD_DATE").unwrap_or("unknown"),
        },
    )
}
