//! Repository port traits.
//!
//! These are the primary ports in our hexagonal architecture.
//! Adapters (Postgres, SQLite, InMemory) will implement them.

use crate::domain::{Payment, PaymentId, User, UserId};
use crate::dto::{
    CreatePaymentRequest, CreateUserRequest, UpdatePaymentRequest, UpdateUserRequest,
};
use crate::error::RepoError;

/// Store port for payment records.
///
/// Listing returns records in store order (ascending id); the read path
/// mirrors that ordering in its output, so implementations must keep it
/// stable.
#[async_trait::async_trait]
pub trait PaymentRepository: Send + Sync + 'static {
    /// Persists a new payment and returns it with its assigned id.
    async fn create_payment(&self, req: CreatePaymentRequest) -> Result<Payment, RepoError>;

    /// Gets a payment by id.
    async fn find_payment(&self, id: PaymentId) -> Result<Option<Payment>, RepoError>;

    /// Lists all payments in ascending id order.
    async fn list_payments(&self) -> Result<Vec<Payment>, RepoError>;

    /// Updates the paid flag and status of an existing payment.
    ///
    /// The order reference is deliberately absent from the request type;
    /// it cannot change after creation.
    async fn update_payment(
        &self,
        id: PaymentId,
        req: UpdatePaymentRequest,
    ) -> Result<Payment, RepoError>;

    /// Deletes a payment. Returns `false` when no such record existed.
    async fn delete_payment(&self, id: PaymentId) -> Result<bool, RepoError>;
}

/// Store port for user records.
#[async_trait::async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persists a new user and returns it with its assigned id.
    async fn create_user(&self, req: CreateUserRequest) -> Result<User, RepoError>;

    /// Gets a user by id.
    async fn find_user(&self, id: UserId) -> Result<Option<User>, RepoError>;

    /// Lists all users in ascending id order.
    async fn list_users(&self) -> Result<Vec<User>, RepoError>;

    /// Replaces the profile fields of an existing user.
    async fn update_user(&self, id: UserId, req: UpdateUserRequest) -> Result<User, RepoError>;

    /// Deletes a user. Returns `false` when no such record existed.
    async fn delete_user(&self, id: UserId) -> Result<bool, RepoError>;
}
