//! Delivery resource handlers
//!
//! Creation goes through the delivery repository's integrity checks:
//! both references must resolve and the tracking id must be unique.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::{ApiError, ApiResult},
    models::{CreateDeliveryRequest, UpdateDeliveryRequest},
    routes::parse_id,
    state::AppState,
};

/// Create a new delivery
pub async fn create_delivery(
    State(state): State<AppState>,
    Json(payload): Json<CreateDeliveryRequest>,
) -> ApiResult<impl IntoResponse> {
    let delivery = state.delivery_repository.create(&payload).await?;

    Ok((StatusCode::CREATED, Json(delivery)))
}

/// Get all deliveries
pub async fn list_deliveries(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let deliveries = state.delivery_repository.list().await?;

    Ok(Json(deliveries))
}

/// Get a delivery by ID
pub async fn get_delivery(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id, "delivery")?;
    let delivery = state
        .delivery_repository
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound("Delivery"))?;

    Ok(Json(delivery))
}

/// Apply a partial update to a delivery
pub async fn update_delivery(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateDeliveryRequest>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id, "delivery")?;
    let delivery = state
        .delivery_repository
        .update(id, &payload)
        .await?
        .ok_or(ApiError::NotFound("Delivery"))?;

    Ok(Json(delivery))
}

/// Delete a delivery by ID
pub async fn delete_delivery(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id, "delivery")?;

    if state.delivery_repository.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Delivery"))
    }
}
