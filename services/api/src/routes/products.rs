//! Product resource handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::{ApiError, ApiResult},
    models::{CreateProductRequest, UpdateProductRequest},
    routes::parse_id,
    state::AppState,
    validation,
};

/// Create a new product
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> ApiResult<impl IntoResponse> {
    let new_product = validation::validate_new_product(&payload).map_err(ApiError::Validation)?;
    let product = state.product_repository.create(&new_product).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// Get all products
pub async fn list_products(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let products = state.product_repository.list().await?;

    Ok(Json(products))
}

/// Get a product by ID
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id, "product")?;
    let product = state
        .product_repository
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound("Product"))?;

    Ok(Json(product))
}

/// Apply a partial update to a product
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateProductRequest>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id, "product")?;
    validation::validate_product_update(&payload).map_err(ApiError::Validation)?;

    let product = state
        .product_repository
        .update(id, &payload)
        .await?
        .ok_or(ApiError::NotFound("Product"))?;

    Ok(Json(product))
}

/// Delete a product by ID
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id, "product")?;

    if state.product_repository.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Product"))
    }
}
