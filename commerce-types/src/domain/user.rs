//! User domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::DomainError;

/// Unique identifier for a User, assigned by the user store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wraps a store-assigned identifier.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// A registered user of the storefront.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier
    pub id: UserId,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Contact email, unique per user
    pub email: String,
    /// When the user registered
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Checks the invariants a user profile must satisfy.
    ///
    /// # Validation
    /// - Names cannot be empty
    /// - Email must contain an `@`
    pub fn validate(first_name: &str, last_name: &str, email: &str) -> Result<(), DomainError> {
        if first_name.trim().is_empty() || last_name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "User name cannot be empty".into(),
            ));
        }
        if !email.contains('@') {
            return Err(DomainError::ValidationError(format!(
                "Invalid email address: {}",
                email
            )));
        }
        Ok(())
    }

    /// Creates a user with all fields specified (for database reconstruction).
    pub fn from_parts(
        id: UserId,
        first_name: String,
        last_name: String,
        email: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            email,
            created_at,
        }
    }
}
