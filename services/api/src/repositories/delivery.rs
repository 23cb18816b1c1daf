//! Delivery repository and referential-integrity rules
//!
//! Creation resolves the `product` and `user` references against the store
//! before writing and fills in a generated tracking id when the client did
//! not supply one. The existence checks are advisory fast-path errors only;
//! the unique index on `tracking_id` is the authoritative uniqueness check,
//! and there is no foreign-key constraint behind the references.

use sqlx::{PgPool, Row};
use tracing::info;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::{
    CreateDeliveryRequest, Delivery, DeliveryStatus, Product, UpdateDeliveryRequest, User,
};
use crate::repositories::LIST_LIMIT;
use crate::tracking;
use crate::validation;

const DELIVERY_COLUMNS: &str = r#"
    d.id, d.tracking_id, d.status, d.location, d.expected_date,
    d.created_at, d.updated_at,
    p.id AS product_id, p.name AS product_name, p.price AS product_price,
    p.description AS product_description,
    p.created_at AS product_created_at, p.updated_at AS product_updated_at,
    u.id AS user_id, u.name AS user_name, u.email AS user_email,
    u.created_at AS user_created_at, u.updated_at AS user_updated_at
"#;

/// Delivery repository
#[derive(Clone)]
pub struct DeliveryRepository {
    pool: PgPool,
}

impl DeliveryRepository {
    /// Create a new delivery repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new delivery
    ///
    /// Both references must resolve to existing records; a malformed or
    /// unresolved reference rejects the request before anything is written.
    pub async fn create(&self, payload: &CreateDeliveryRequest) -> ApiResult<Delivery> {
        let product_id = parse_reference(payload.product.as_deref(), "product")?;
        let user_id = parse_reference(payload.user.as_deref(), "user")?;

        let status = match payload.status.as_deref() {
            Some(raw) => validation::validate_status(raw).map_err(ApiError::Validation)?,
            None => DeliveryStatus::default(),
        };

        if !self.record_exists("products", product_id).await? {
            return Err(ApiError::InvalidReference("product"));
        }
        if !self.record_exists("users", user_id).await? {
            return Err(ApiError::InvalidReference("user"));
        }

        let tracking_id = match payload.tracking_id.as_deref() {
            Some(supplied) if !supplied.is_empty() => supplied.to_string(),
            _ => tracking::generate(),
        };

        info!("Creating delivery with tracking id {}", tracking_id);

        let row = sqlx::query(
            r#"
            INSERT INTO deliveries (id, tracking_id, product_id, user_id, status, location, expected_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&tracking_id)
        .bind(product_id)
        .bind(user_id)
        .bind(status.as_str())
        .bind(payload.location.as_deref())
        .bind(payload.expected_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ApiError::from_write_error(e, "trackingId"))?;

        let id: Uuid = row.get("id");
        self.find_by_id(id)
            .await?
            .ok_or(ApiError::Database(sqlx::Error::RowNotFound))
    }

    /// Get all deliveries, in insertion order, capped
    pub async fn list(&self) -> ApiResult<Vec<Delivery>> {
        let query = format!(
            r#"
            SELECT {DELIVERY_COLUMNS}
            FROM deliveries d
            LEFT JOIN products p ON p.id = d.product_id
            LEFT JOIN users u ON u.id = d.user_id
            ORDER BY d.created_at, d.id
            LIMIT $1
            "#
        );

        let rows = sqlx::query(&query)
            .bind(LIST_LIMIT)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(row_to_delivery).collect()
    }

    /// Find a delivery by ID, with `product` and `user` expanded
    pub async fn find_by_id(&self, id: Uuid) -> ApiResult<Option<Delivery>> {
        let query = format!(
            r#"
            SELECT {DELIVERY_COLUMNS}
            FROM deliveries d
            LEFT JOIN products p ON p.id = d.product_id
            LEFT JOIN users u ON u.id = d.user_id
            WHERE d.id = $1
            "#
        );

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_delivery).transpose()
    }

    /// Apply a partial update; `None` if no delivery matches
    ///
    /// The status vocabulary is enforced; references are checked for
    /// well-formedness only and are not re-resolved against the store.
    pub async fn update(
        &self,
        id: Uuid,
        payload: &UpdateDeliveryRequest,
    ) -> ApiResult<Option<Delivery>> {
        let status = match payload.status.as_deref() {
            Some(raw) => Some(validation::validate_status(raw).map_err(ApiError::Validation)?),
            None => None,
        };
        let product_id = match payload.product.as_deref() {
            Some(raw) => Some(parse_reference(Some(raw), "product")?),
            None => None,
        };
        let user_id = match payload.user.as_deref() {
            Some(raw) => Some(parse_reference(Some(raw), "user")?),
            None => None,
        };

        let row = sqlx::query(
            r#"
            UPDATE deliveries
            SET tracking_id = COALESCE($2, tracking_id),
                product_id = COALESCE($3, product_id),
                user_id = COALESCE($4, user_id),
                status = COALESCE($5, status),
                location = COALESCE($6, location),
                expected_date = COALESCE($7, expected_date),
                updated_at = now()
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(payload.tracking_id.as_deref())
        .bind(product_id)
        .bind(user_id)
        .bind(status.map(DeliveryStatus::as_str))
        .bind(payload.location.as_deref())
        .bind(payload.expected_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ApiError::from_write_error(e, "trackingId"))?;

        match row {
            Some(_) => self.find_by_id(id).await,
            None => Ok(None),
        }
    }

    /// Delete a delivery by ID; `false` if no delivery matches
    pub async fn delete(&self, id: Uuid) -> ApiResult<bool> {
        let result = sqlx::query("DELETE FROM deliveries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn record_exists(&self, table: &str, id: Uuid) -> ApiResult<bool> {
        let query = format!("SELECT EXISTS(SELECT 1 FROM {table} WHERE id = $1) AS present");
        let row = sqlx::query(&query).bind(id).fetch_one(&self.pool).await?;

        Ok(row.get("present"))
    }
}

fn parse_reference(raw: Option<&str>, entity: &'static str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw.unwrap_or("")).map_err(|_| ApiError::InvalidReference(entity))
}

fn row_to_delivery(row: &sqlx::postgres::PgRow) -> ApiResult<Delivery> {
    let raw_status: String = row.get("status");
    let status = DeliveryStatus::parse(&raw_status).ok_or_else(|| {
        ApiError::Database(sqlx::Error::Decode(
            format!("unknown delivery status in store: {}", raw_status).into(),
        ))
    })?;

    // LEFT JOIN: a dangling reference yields NULL columns for the record
    let product = row
        .get::<Option<Uuid>, _>("product_id")
        .map(|product_id| Product {
            id: product_id,
            name: row.get("product_name"),
            price: row.get("product_price"),
            description: row.get("product_description"),
            created_at: row.get("product_created_at"),
            updated_at: row.get("product_updated_at"),
        });

    let user = row.get::<Option<Uuid>, _>("user_id").map(|user_id| User {
        id: user_id,
        name: row.get("user_name"),
        email: row.get("user_email"),
        created_at: row.get("user_created_at"),
        updated_at: row.get("user_updated_at"),
    });

    Ok(Delivery {
        id: row.get("id"),
        tracking_id: row.get("tracking_id"),
        product,
        user,
        status,
        location: row.get("location"),
        expected_date: row.get("expected_date"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_or_missing_references_are_rejected() {
        assert!(matches!(
            parse_reference(Some("bad"), "product"),
            Err(ApiError::InvalidReference("product"))
        ));
        assert!(matches!(
            parse_reference(None, "user"),
            Err(ApiError::InvalidReference("user"))
        ));

        let well_formed = Uuid::new_v4();
        let parsed = parse_reference(Some(&well_formed.to_string()), "product")
            .expect("well-formed reference must parse");
        assert_eq!(parsed, well_formed);
    }
}
