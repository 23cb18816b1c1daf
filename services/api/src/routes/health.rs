//! Health check endpoint for monitoring and deployment verification

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde_json::json;

use common::database;
use common::error::DatabaseError;

use crate::state::AppState;

/// Report service health and store connectivity
///
/// Returns 200 when the store probe succeeds, 503 when the store is
/// unreachable, and 500 if the check itself fails unexpectedly.
pub async fn health_check(State(state): State<AppState>) -> Response {
    let timestamp = Utc::now().to_rfc3339();
    let uptime = state.started_at.elapsed().as_secs_f64();

    match database::health_check(&state.db_pool).await {
        Ok(true) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": timestamp,
                "version": env!("CARGO_PKG_VERSION"),
                "environment": state.environment,
                "database": {
                    "connected": true,
                    "state": "connected",
                },
                "uptime": uptime,
            })),
        )
            .into_response(),
        Ok(false) | Err(DatabaseError::Query(_)) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": timestamp,
                "version": env!("CARGO_PKG_VERSION"),
                "environment": state.environment,
                "database": {
                    "connected": false,
                    "state": "disconnected",
                },
                "uptime": uptime,
            })),
        )
            .into_response(),
        Err(error) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "status": "error",
                "timestamp": timestamp,
                "error": error.to_string(),
            })),
        )
            .into_response(),
    }
}
