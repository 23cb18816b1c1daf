//! HTTP routes for the delivery API
//!
//! Handlers are a pure translation layer: they parse path identifiers,
//! apply the validation rules, call the repositories, and map outcomes to
//! status codes. Unmatched routes fall through to axum's default 404.

use axum::{
    Router,
    routing::get,
};
use uuid::Uuid;

use crate::{error::ApiError, state::AppState};

pub mod deliveries;
pub mod health;
pub mod products;
pub mod users;

/// Create the router for the delivery API
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/health", get(health::health_check))
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route(
            "/api/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route(
            "/api/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/api/products/:id",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route(
            "/api/deliveries",
            get(deliveries::list_deliveries).post(deliveries::create_delivery),
        )
        .route(
            "/api/deliveries/:id",
            get(deliveries::get_delivery)
                .put(deliveries::update_delivery)
                .delete(deliveries::delete_delivery),
        )
        .with_state(state)
}

/// Liveness marker
async fn root() -> &'static str {
    "Delivery API running"
}

/// Parse a path identifier, distinguishing a malformed key (400) from a
/// well-formed key with no matching record (404)
pub(crate) fn parse_id(raw: &str, entity: &'static str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::InvalidId(entity))
}
