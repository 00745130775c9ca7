//! Application services
//!
//! Orchestrate domain operations through the repository and lookup ports.
//! Contains NO infrastructure logic - pure business orchestration.

use commerce_types::{
    AppError, CreatePaymentRequest, CreateUserRequest, DomainError, OrderLookup, Payment,
    PaymentDetails, PaymentId, PaymentRepository, RepoError, UpdatePaymentRequest,
    UpdateUserRequest, User, UserId, UserRepository,
};

/// Application service for the payment resource.
///
/// Generic over its two ports - the payment store and the remote order
/// lookup - so adapters are injected at compile time. This enables:
/// - Swapping repositories without code changes
/// - Testing the read path with scripted lookups
/// - Compile-time checks for port implementation
pub struct PaymentService<R: PaymentRepository, L: OrderLookup> {
    repo: R,
    orders: L,
}

impl<R: PaymentRepository, L: OrderLookup> PaymentService<R, L> {
    /// Creates a new payment service with the given adapters.
    pub fn new(repo: R, orders: L) -> Self {
        Self { repo, orders }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Read Path (order enrichment)
    // ─────────────────────────────────────────────────────────────────────────────

    /// Lists every payment with its order reference resolved.
    ///
    /// Output mirrors the store's ordering, one entry per record, and each
    /// record gets its own lookup even when several share an order id. A
    /// lookup failure of any kind leaves only that record's summary absent;
    /// the rest of the batch is unaffected.
    pub async fn list_payments(&self) -> Result<Vec<PaymentDetails>, AppError> {
        let payments = self.repo.list_payments().await?;

        let mut details = Vec::with_capacity(payments.len());
        for payment in payments {
            let order = match self.orders.get_order(payment.order_id).await {
                Ok(order) => order,
                Err(err) => {
                    tracing::warn!(
                        payment_id = %payment.id,
                        order_id = %payment.order_id,
                        error = %err,
                        "order lookup failed, listing payment without order data"
                    );
                    None
                }
            };
            details.push(PaymentDetails::new(payment, order));
        }

        Ok(details)
    }

    /// Gets one payment with its order reference resolved.
    ///
    /// Unlike the listing, a hard lookup failure here surfaces to the
    /// caller unchanged; a lookup that merely finds no data yields a view
    /// without a summary.
    pub async fn get_payment(&self, id: PaymentId) -> Result<PaymentDetails, AppError> {
        let payment = self
            .repo
            .find_payment(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Payment {}", id)))?;

        let order = self.orders.get_order(payment.order_id).await?;
        Ok(PaymentDetails::new(payment, order))
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Payment Lifecycle
    // ─────────────────────────────────────────────────────────────────────────────

    /// Records a new payment.
    pub async fn create_payment(&self, req: CreatePaymentRequest) -> Result<Payment, AppError> {
        if !req.order_id.is_valid() {
            return Err(DomainError::InvalidOrderReference(req.order_id).into());
        }

        self.repo.create_payment(req).await.map_err(Into::into)
    }

    /// Updates a payment's paid flag and status.
    pub async fn update_payment(
        &self,
        id: PaymentId,
        req: UpdatePaymentRequest,
    ) -> Result<Payment, AppError> {
        self.repo.update_payment(id, req).await.map_err(|err| match err {
            RepoError::NotFound => AppError::NotFound(format!("Payment {}", id)),
            other => other.into(),
        })
    }

    /// Deletes a payment.
    pub async fn delete_payment(&self, id: PaymentId) -> Result<(), AppError> {
        let deleted = self.repo.delete_payment(id).await?;
        if deleted {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Payment {}", id)))
        }
    }
}

/// Application service for the user resource.
pub struct UserService<U: UserRepository> {
    repo: U,
}

impl<U: UserRepository> UserService<U> {
    /// Creates a new user service with the given repository.
    pub fn new(repo: U) -> Self {
        Self { repo }
    }

    /// Registers a new user.
    pub async fn create_user(&self, req: CreateUserRequest) -> Result<User, AppError> {
        User::validate(&req.first_name, &req.last_name, &req.email)?;

        self.repo.create_user(req).await.map_err(Into::into)
    }

    /// Gets a user by ID.
    pub async fn get_user(&self, id: UserId) -> Result<User, AppError> {
        self.repo
            .find_user(id)
            .await
            .map_err(Into::into)
            .and_then(|opt| opt.ok_or_else(|| AppError::NotFound(format!("User {}", id))))
    }

    /// Lists all users.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repo.list_users().await.map_err(Into::into)
    }

    /// Replaces a user's profile fields.
    pub async fn update_user(&self, id: UserId, req: UpdateUserRequest) -> Result<User, AppError> {
        User::validate(&req.first_name, &req.last_name, &req.email)?;

        self.repo.update_user(id, req).await.map_err(|err| match err {
            RepoError::NotFound => AppError::NotFound(format!("User {}", id)),
            other => other.into(),
        })
    }

    /// Deletes a user.
    pub async fn delete_user(&self, id: UserId) -> Result<(), AppError> {
        let deleted = self.repo.delete_user(id).await?;
        if deleted {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("User {}", id)))
        }
    }
}
