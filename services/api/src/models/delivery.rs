//! Delivery model, status enum, and request payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Product, User};

/// Delivery status vocabulary
///
/// There is no enforced transition graph: any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Pending,
    #[serde(rename = "In Transit")]
    InTransit,
    Delivered,
    Cancelled,
}

impl DeliveryStatus {
    /// The accepted wire values, in declaration order
    pub const ALL: [&'static str; 4] = ["Pending", "In Transit", "Delivered", "Cancelled"];

    /// The wire/storage representation of this status
    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "Pending",
            DeliveryStatus::InTransit => "In Transit",
            DeliveryStatus::Delivered => "Delivered",
            DeliveryStatus::Cancelled => "Cancelled",
        }
    }

    /// Parse a wire/storage value; `None` if outside the vocabulary
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Pending" => Some(DeliveryStatus::Pending),
            "In Transit" => Some(DeliveryStatus::InTransit),
            "Delivered" => Some(DeliveryStatus::Delivered),
            "Cancelled" => Some(DeliveryStatus::Cancelled),
            _ => None,
        }
    }
}

impl Default for DeliveryStatus {
    fn default() -> Self {
        DeliveryStatus::Pending
    }
}

/// Delivery entity as returned by the API
///
/// `product` and `user` are expanded to the full referenced records; a
/// dangling reference (the referenced record was deleted) expands to `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    pub id: Uuid,
    pub tracking_id: String,
    pub product: Option<Product>,
    pub user: Option<User>,
    pub status: DeliveryStatus,
    pub location: Option<String>,
    pub expected_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request for delivery creation
///
/// `product` and `user` arrive as raw strings and are parsed and resolved
/// against the store before anything is written. `status` is parsed against
/// the status vocabulary; absent means `Pending`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeliveryRequest {
    pub tracking_id: Option<String>,
    pub product: Option<String>,
    pub user: Option<String>,
    pub status: Option<String>,
    pub location: Option<String>,
    pub expected_date: Option<DateTime<Utc>>,
}

/// Request for partial delivery update
///
/// References are checked for well-formedness only; updates do not re-resolve
/// `product`/`user` against the store.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeliveryRequest {
    pub tracking_id: Option<String>,
    pub product: Option<String>,
    pub user: Option<String>,
    pub status: Option<String>,
    pub location: Option<String>,
    pub expected_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_wire_values() {
        for value in DeliveryStatus::ALL {
            let status = DeliveryStatus::parse(value).expect("known status must parse");
            assert_eq!(status.as_str(), value);
        }
    }

    #[test]
    fn status_rejects_unknown_values() {
        assert_eq!(DeliveryStatus::parse("NotAStatus"), None);
        assert_eq!(DeliveryStatus::parse("pending"), None);
        assert_eq!(DeliveryStatus::parse(""), None);
    }

    #[test]
    fn in_transit_serializes_with_a_space() {
        let json = serde_json::to_string(&DeliveryStatus::InTransit).expect("serialize status");
        assert_eq!(json, "\"In Transit\"");

        let status: DeliveryStatus =
            serde_json::from_str("\"In Transit\"").expect("deserialize status");
        assert_eq!(status, DeliveryStatus::InTransit);
    }

    #[test]
    fn default_status_is_pending() {
        assert_eq!(DeliveryStatus::default(), DeliveryStatus::Pending);
    }
}
