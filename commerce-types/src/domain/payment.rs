//! Payment domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::order::OrderId;
use crate::error::DomainError;

/// Unique identifier for a Payment, assigned by the payment store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct PaymentId(i64);

impl PaymentId {
    /// Wraps a store-assigned identifier.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PaymentId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Lifecycle state of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// Recorded but no processing attempted yet
    NotStarted,
    /// Processing has begun but not finished
    InProgress,
    /// Fully settled
    Completed,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::NotStarted => write!(f, "NOT_STARTED"),
            PaymentStatus::InProgress => write!(f, "IN_PROGRESS"),
            PaymentStatus::Completed => write!(f, "COMPLETED"),
        }
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NOT_STARTED" => Ok(PaymentStatus::NotStarted),
            "IN_PROGRESS" => Ok(PaymentStatus::InProgress),
            "COMPLETED" => Ok(PaymentStatus::Completed),
            other => Err(DomainError::ValidationError(format!(
                "Unknown payment status: {}",
                other
            ))),
        }
    }
}

/// A payment recorded against an order.
///
/// The order reference is fixed at creation time; only the paid flag and
/// the status change over a payment's life.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Payment {
    /// Unique identifier
    pub id: PaymentId,
    /// The order this payment settles (lives in the Order service)
    pub order_id: OrderId,
    /// Whether the payment has been settled
    pub is_paid: bool,
    /// Current lifecycle state
    pub status: PaymentStatus,
    /// When the payment was recorded
    pub created_at: DateTime<Utc>,
}

impl Payment {
    /// Creates a payment with all fields specified (for database reconstruction).
    pub fn from_parts(
        id: PaymentId,
        order_id: OrderId,
        is_paid: bool,
        status: PaymentStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            order_id,
            is_paid,
            status,
            created_at,
        }
    }
}
