//! Custom error types for the API service
//!
//! Every failure a handler can produce is converted to an HTTP response with
//! a `{"error": message}` JSON body. Nothing escapes a handler un-converted;
//! unexpected database errors become a logged 500.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Custom error type for the API service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body fails a field constraint
    #[error("{0}")]
    Validation(String),

    /// Path identifier is not a well-formed key
    #[error("Invalid {0} id")]
    InvalidId(&'static str),

    /// Well-formed identifier with no matching record
    #[error("{0} not found")]
    NotFound(&'static str),

    /// A delivery reference does not resolve to an existing record
    #[error("Invalid {0} id")]
    InvalidReference(&'static str),

    /// Duplicate value for a unique field
    #[error("{0} already exists")]
    Duplicate(&'static str),

    /// Unexpected database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    /// Map a write error, treating a unique-index violation on `field` as
    /// the authoritative uniqueness failure.
    pub fn from_write_error(err: sqlx::Error, field: &'static str) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            // Postgres unique_violation
            if db_err.code().as_deref() == Some("23505") {
                return ApiError::Duplicate(field);
            }
        }

        ApiError::Database(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::InvalidId(_) | ApiError::InvalidReference(_) | ApiError::Duplicate(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Database(ref err) => {
                tracing::error!("Unhandled database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn error_kinds_map_to_expected_status_codes() {
        assert_eq!(
            status_of(ApiError::Validation("price is required".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(ApiError::InvalidId("user")), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(ApiError::NotFound("User")), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(ApiError::InvalidReference("product")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ApiError::Duplicate("email")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ApiError::Database(sqlx::Error::RowNotFound)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn messages_name_the_offending_field() {
        assert_eq!(ApiError::NotFound("Product").to_string(), "Product not found");
        assert_eq!(
            ApiError::InvalidReference("product").to_string(),
            "Invalid product id"
        );
        assert_eq!(
            ApiError::Duplicate("trackingId").to_string(),
            "trackingId already exists"
        );
    }

    #[test]
    fn non_unique_write_errors_stay_database_errors() {
        let err = ApiError::from_write_error(sqlx::Error::RowNotFound, "email");
        assert!(matches!(err, ApiError::Database(_)));
    }
}
