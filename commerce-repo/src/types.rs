//! Shared database types with feature-gated fields for SQLite and PostgreSQL.

use sqlx::FromRow;

use commerce_types::{OrderId, Payment, PaymentId, PaymentStatus, RepoError, User, UserId};

// ─────────────────────────────────────────────────────────────────────────────
// Feature-gated imports
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(not(feature = "sqlite"))]
use chrono::{DateTime, Utc};

// ─────────────────────────────────────────────────────────────────────────────
// Database row structs (derive FromRow for automatic mapping)
// ─────────────────────────────────────────────────────────────────────────────

/// Payment row from database.
#[derive(FromRow)]
pub struct DbPayment {
    pub id: i64,
    pub order_id: i64,

    #[cfg(not(feature = "sqlite"))]
    pub is_paid: bool,
    #[cfg(feature = "sqlite")]
    pub is_paid: i64,

    pub status: String,

    #[cfg(not(feature = "sqlite"))]
    pub created_at: DateTime<Utc>,
    #[cfg(feature = "sqlite")]
    pub created_at: String,
}

/// User row from database.
#[derive(FromRow)]
pub struct DbUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,

    #[cfg(not(feature = "sqlite"))]
    pub created_at: DateTime<Utc>,
    #[cfg(feature = "sqlite")]
    pub created_at: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Parsing helpers
// ─────────────────────────────────────────────────────────────────────────────

pub fn parse_payment_status(s: &str) -> Result<PaymentStatus, RepoError> {
    s.parse()
        .map_err(|_| RepoError::Database(format!("Unknown payment status: {}", s)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Domain conversion (feature-gated implementations)
// ─────────────────────────────────────────────────────────────────────────────

impl DbPayment {
    /// Convert database row to domain Payment.
    pub fn into_domain(self) -> Result<Payment, RepoError> {
        let status = parse_payment_status(&self.status)?;

        #[cfg(not(feature = "sqlite"))]
        let (is_paid, created_at) = (self.is_paid, self.created_at);

        #[cfg(feature = "sqlite")]
        let (is_paid, created_at) = {
            let dt = chrono::DateTime::parse_from_rfc3339(&self.created_at)
                .map_err(|e| RepoError::Database(e.to_string()))?
                .with_timezone(&chrono::Utc);
            (self.is_paid != 0, dt)
        };

        Ok(Payment::from_parts(
            PaymentId::new(self.id),
            OrderId::new(self.order_id),
            is_paid,
            status,
            created_at,
        ))
    }
}

impl DbUser {
    /// Convert database row to domain User.
    pub fn into_domain(self) -> Result<User, RepoError> {
        #[cfg(not(feature = "sqlite"))]
        let created_at = self.created_at;

        #[cfg(feature = "sqlite")]
        let created_at = chrono::DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| RepoError::Database(e.to_string()))?
            .with_timezone(&chrono::Utc);

        Ok(User::from_parts(
            UserId::new(self.id),
            self.first_name,
            self.last_name,
            self.email,
            created_at,
        ))
    }
}
