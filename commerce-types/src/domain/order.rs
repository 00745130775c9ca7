//! Order identifiers and the remote order representation.
//!
//! Orders live in a separate service. Payments only hold a reference to
//! them; the summary below mirrors what that service returns and is never
//! persisted on this side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unique identifier for an Order, assigned by the Order service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct OrderId(i64);

impl OrderId {
    /// Wraps an Order service identifier.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    pub fn get(self) -> i64 {
        self.0
    }

    /// Order identifiers handed out by the Order service are positive.
    pub fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for OrderId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Summary of an order as served by the Order service.
///
/// The id is taken from the response body, not from the request, so a
/// disagreeing upstream shows up as a summary whose id differs from the
/// payment's `order_id`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderSummary {
    /// Identifier reported by the Order service
    pub id: OrderId,
    /// Free-text description of the order
    #[schema(example = "Grocery delivery")]
    pub description: String,
    /// Fee charged for the order, as reported upstream
    #[schema(example = 100.0)]
    pub fee: f64,
    /// When the order was placed
    pub ordered_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_validity() {
        assert!(OrderId::new(1).is_valid());
        assert!(!OrderId::new(0).is_valid());
        assert!(!OrderId::new(-7).is_valid());
    }

    #[test]
    fn test_summary_deserializes_from_service_payload() {
        let payload = r#"{
            "id": 1,
            "description": "Test Order",
            "fee": 100.0,
            "ordered_at": "2024-05-01T12:00:00Z"
        }"#;
        let summary: OrderSummary = serde_json::from_str(payload).unwrap();
        assert_eq!(summary.id, OrderId::new(1));
        assert_eq!(summary.description, "Test Order");
        assert_eq!(summary.fee, 100.0);
    }
}
