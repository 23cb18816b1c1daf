//! Application state shared across handlers

use std::env;
use std::time::Instant;

use sqlx::PgPool;

use crate::repositories::{DeliveryRepository, ProductRepository, UserRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub user_repository: UserRepository,
    pub product_repository: ProductRepository,
    pub delivery_repository: DeliveryRepository,
    /// Deployment environment reported by the health endpoint
    pub environment: String,
    /// Process start time, for the health endpoint's uptime field
    pub started_at: Instant,
}

impl AppState {
    /// Build the application state around a connection pool
    pub fn new(pool: PgPool) -> Self {
        Self {
            user_repository: UserRepository::new(pool.clone()),
            product_repository: ProductRepository::new(pool.clone()),
            delivery_repository: DeliveryRepository::new(pool.clone()),
            db_pool: pool,
            environment: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            started_at: Instant::now(),
        }
    }
}
