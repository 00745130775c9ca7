//! Data Transfer Objects (DTOs) for requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{OrderId, OrderSummary, Payment, PaymentId, PaymentStatus};

// ─────────────────────────────────────────────────────────────────────────────
// Payment DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to record a new payment against an order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePaymentRequest {
    /// The order this payment settles
    #[schema(example = 1)]
    pub order_id: OrderId,
    /// Whether the payment is already settled
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default = "default_status")]
    pub status: PaymentStatus,
}

fn default_status() -> PaymentStatus {
    PaymentStatus::NotStarted
}

/// Request to update a payment's mutable fields.
///
/// The order reference is not part of this request; it is fixed when the
/// payment is created.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdatePaymentRequest {
    /// New value for the paid flag
    pub is_paid: bool,
    /// New lifecycle state
    pub status: PaymentStatus,
}

/// A payment with its order reference resolved against the Order service.
///
/// `order` carries whatever the Order service returned for the payment's
/// reference; it is absent when the lookup yielded no data.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentDetails {
    /// Unique payment identifier
    pub id: PaymentId,
    /// The order reference stored with the payment
    pub order_id: OrderId,
    /// Whether the payment has been settled
    pub is_paid: bool,
    pub status: PaymentStatus,
    /// When the payment was recorded
    pub created_at: DateTime<Utc>,
    /// Order summary as returned by the Order service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<OrderSummary>,
}

impl PaymentDetails {
    /// Builds the enriched view from a stored payment and a lookup result.
    pub fn new(payment: Payment, order: Option<OrderSummary>) -> Self {
        Self {
            id: payment.id,
            order_id: payment.order_id,
            is_paid: payment.is_paid,
            status: payment.status,
            created_at: payment.created_at,
            order,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// User DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// Given name
    #[schema(example = "Alice")]
    pub first_name: String,
    /// Family name
    #[schema(example = "Smith")]
    pub last_name: String,
    /// Contact email
    #[schema(example = "alice@example.com")]
    pub email: String,
}

/// Request to replace a user's profile fields.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Contact email
    pub email: String,
}
