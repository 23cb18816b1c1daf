//! Input validation utilities
//!
//! Per-entity field constraints applied before any write reaches the store.
//! A violation short-circuits the request with the constraint message.

use crate::models::{
    CreateProductRequest, CreateUserRequest, DeliveryStatus, NewProduct, NewUser,
    UpdateProductRequest, UpdateUserRequest,
};

/// Validate a user creation payload
pub fn validate_new_user(payload: &CreateUserRequest) -> Result<NewUser, String> {
    let name = payload.name.as_deref().unwrap_or("");
    if name.is_empty() {
        return Err("name is required".to_string());
    }

    let email = payload.email.as_deref().unwrap_or("");
    if email.is_empty() {
        return Err("email is required".to_string());
    }

    Ok(NewUser {
        name: name.to_string(),
        email: email.to_string(),
    })
}

/// Validate a partial user update
pub fn validate_user_update(payload: &UpdateUserRequest) -> Result<(), String> {
    if let Some(name) = payload.name.as_deref() {
        if name.is_empty() {
            return Err("name must not be empty".to_string());
        }
    }

    if let Some(email) = payload.email.as_deref() {
        if email.is_empty() {
            return Err("email must not be empty".to_string());
        }
    }

    Ok(())
}

/// Validate a product creation payload
pub fn validate_new_product(payload: &CreateProductRequest) -> Result<NewProduct, String> {
    let name = payload.name.as_deref().unwrap_or("").trim();
    if name.is_empty() {
        return Err("name is required".to_string());
    }

    let price = payload.price.ok_or_else(|| "price is required".to_string())?;
    validate_price(price)?;

    Ok(NewProduct {
        name: name.to_string(),
        price,
        description: payload.description.clone().unwrap_or_default(),
    })
}

/// Validate a partial product update
pub fn validate_product_update(payload: &UpdateProductRequest) -> Result<(), String> {
    if let Some(name) = payload.name.as_deref() {
        if name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }
    }

    if let Some(price) = payload.price {
        validate_price(price)?;
    }

    Ok(())
}

/// Validate a product price: numeric and non-negative
pub fn validate_price(price: f64) -> Result<(), String> {
    if !price.is_finite() || price < 0.0 {
        return Err("price must be a non-negative number".to_string());
    }

    Ok(())
}

/// Parse a delivery status against the closed vocabulary
pub fn validate_status(value: &str) -> Result<DeliveryStatus, String> {
    DeliveryStatus::parse(value).ok_or_else(|| {
        format!(
            "status must be one of: {}",
            DeliveryStatus::ALL.join(", ")
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_requires_name_and_email() {
        let missing_both = CreateUserRequest {
            name: None,
            email: None,
        };
        assert_eq!(
            validate_new_user(&missing_both).unwrap_err(),
            "name is required"
        );

        let missing_email = CreateUserRequest {
            name: Some("No Email".to_string()),
            email: None,
        };
        assert!(
            validate_new_user(&missing_email)
                .unwrap_err()
                .contains("email")
        );

        let complete = CreateUserRequest {
            name: Some("Alice".to_string()),
            email: Some("alice@example.com".to_string()),
        };
        let user = validate_new_user(&complete).expect("valid user payload");
        assert_eq!(user.email, "alice@example.com");
    }

    #[test]
    fn user_update_rejects_empty_fields() {
        let empty_email = UpdateUserRequest {
            name: None,
            email: Some(String::new()),
        };
        assert!(validate_user_update(&empty_email).is_err());

        let name_only = UpdateUserRequest {
            name: Some("Alice2".to_string()),
            email: None,
        };
        assert!(validate_user_update(&name_only).is_ok());
    }

    #[test]
    fn product_requires_name_and_price() {
        let missing = CreateProductRequest {
            name: None,
            price: None,
            description: None,
        };
        assert!(validate_new_product(&missing).is_err());

        let no_price = CreateProductRequest {
            name: Some("Widget".to_string()),
            price: None,
            description: None,
        };
        assert_eq!(
            validate_new_product(&no_price).unwrap_err(),
            "price is required"
        );
    }

    #[test]
    fn product_name_is_trimmed() {
        let padded = CreateProductRequest {
            name: Some("  Widget  ".to_string()),
            price: Some(9.99),
            description: None,
        };
        let product = validate_new_product(&padded).expect("valid product payload");
        assert_eq!(product.name, "Widget");
        assert_eq!(product.description, "");
    }

    #[test]
    fn negative_or_non_finite_price_is_rejected() {
        assert!(validate_price(-1.0).is_err());
        assert!(validate_price(-0.01).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(9.99).is_ok());
    }

    #[test]
    fn status_vocabulary_is_closed() {
        assert_eq!(
            validate_status("Delivered").expect("member value"),
            DeliveryStatus::Delivered
        );
        let err = validate_status("NotAStatus").unwrap_err();
        assert!(err.contains("status"));
        assert!(err.contains("In Transit"));
    }
}
