//! Product repository for database operations

use sqlx::{PgPool, Row};
use tracing::info;
use uuid::Uuid;

use crate::error::ApiResult;
use crate::models::{NewProduct, Product, UpdateProductRequest};
use crate::repositories::LIST_LIMIT;

/// Product repository
#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    /// Create a new product repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new product
    pub async fn create(&self, new_product: &NewProduct) -> ApiResult<Product> {
        info!("Creating new product: {}", new_product.name);

        let row = sqlx::query(
            r#"
            INSERT INTO products (id, name, price, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, price, description, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new_product.name)
        .bind(new_product.price)
        .bind(&new_product.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(row_to_product(&row))
    }

    /// Get all products, in insertion order, capped
    pub async fn list(&self) -> ApiResult<Vec<Product>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, price, description, created_at, updated_at
            FROM products
            ORDER BY created_at, id
            LIMIT $1
            "#,
        )
        .bind(LIST_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(row_to_product).collect())
    }

    /// Find a product by ID
    pub async fn find_by_id(&self, id: Uuid) -> ApiResult<Option<Product>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, price, description, created_at, updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(row_to_product))
    }

    /// Apply a partial update; `None` if no product matches
    pub async fn update(
        &self,
        id: Uuid,
        payload: &UpdateProductRequest,
    ) -> ApiResult<Option<Product>> {
        let row = sqlx::query(
            r#"
            UPDATE products
            SET name = COALESCE($2, name),
                price = COALESCE($3, price),
                description = COALESCE($4, description),
                updated_at = now()
            WHERE id = $1
            RETURNING id, name, price, description, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(payload.name.as_deref().map(str::trim))
        .bind(payload.price)
        .bind(payload.description.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(row_to_product))
    }

    /// Delete a product by ID; `false` if no product matches
    ///
    /// Deliveries referencing the product are left untouched; their
    /// reference dangles and expands to null.
    pub async fn delete(&self, id: Uuid) -> ApiResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_product(row: &sqlx::postgres::PgRow) -> Product {
    Product {
        id: row.get("id"),
        name: row.get("name"),
        price: row.get("price"),
        description: row.get("description"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
