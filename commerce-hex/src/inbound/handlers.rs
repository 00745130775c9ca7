//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use commerce_types::{
    AppError, CreatePaymentRequest, CreateUserRequest, OrderLookup, PaymentId, PaymentRepository,
    UpdatePaymentRequest, UpdateUserRequest, UserId, UserRepository,
};

use crate::{PaymentService, UserService};

/// Application state shared across handlers.
pub struct AppState<R: PaymentRepository, U: UserRepository, L: OrderLookup> {
    pub payments: PaymentService<R, L>,
    pub users: UserService<U>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            // Upstream failures surface with the upstream message untouched.
            AppError::OrderService(err) => (StatusCode::BAD_GATEWAY, err.to_string()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Payments
// ─────────────────────────────────────────────────────────────────────────────

/// List all payments, each enriched with its order when available.
#[tracing::instrument(skip(state))]
pub async fn list_payments<R: PaymentRepository, U: UserRepository, L: OrderLookup>(
    State(state): State<Arc<AppState<R, U, L>>>,
) -> Result<impl IntoResponse, ApiError> {
    let payments = state.payments.list_payments().await?;
    Ok(Json(payments))
}

/// Get payment by ID.
#[tracing::instrument(skip(state), fields(payment_id = %id))]
pub async fn get_payment<R: PaymentRepository, U: UserRepository, L: OrderLookup>(
    State(state): State<Arc<AppState<R, U, L>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let payment_id: PaymentId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid payment ID".into()))?;

    let payment = state.payments.get_payment(payment_id).await?;
    Ok(Json(payment))
}

#[tracing::instrument(skip(state), fields(order_id = %req.order_id))]
pub async fn create_payment<R: PaymentRepository, U: UserRepository, L: OrderLookup>(
    State(state): State<Arc<AppState<R, U, L>>>,
    Json(req): Json<CreatePaymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let payment = state.payments.create_payment(req).await?;
    Ok((StatusCode::CREATED, Json(payment)))
}

/// Update a payment's paid flag and status.
#[tracing::instrument(skip(state), fields(payment_id = %id))]
pub async fn update_payment<R: PaymentRepository, U: UserRepository, L: OrderLookup>(
    State(state): State<Arc<AppState<R, U, L>>>,
    Path(id): Path<String>,
    Json(req): Json<UpdatePaymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let payment_id: PaymentId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid payment ID".into()))?;

    let payment = state.payments.update_payment(payment_id, req).await?;
    Ok(Json(payment))
}

/// Delete a payment.
#[tracing::instrument(skip(state), fields(payment_id = %id))]
pub async fn delete_payment<R: PaymentRepository, U: UserRepository, L: OrderLookup>(
    State(state): State<Arc<AppState<R, U, L>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let payment_id: PaymentId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid payment ID".into()))?;

    state.payments.delete_payment(payment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

/// List all users.
#[tracing::instrument(skip(state))]
pub async fn list_users<R: PaymentRepository, U: UserRepository, L: OrderLookup>(
    State(state): State<Arc<AppState<R, U, L>>>,
) -> Result<impl IntoResponse, ApiError> {
    let users = state.users.list_users().await?;
    Ok(Json(users))
}

/// Get user by ID.
#[tracing::instrument(skip(state), fields(user_id = %id))]
pub async fn get_user<R: PaymentRepository, U: UserRepository, L: OrderLookup>(
    State(state): State<Arc<AppState<R, U, L>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id: UserId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid user ID".into()))?;

    let user = state.users.get_user(user_id).await?;
    Ok(Json(user))
}

#[tracing::instrument(skip(state), fields(email = %req.email))]
pub async fn create_user<R: PaymentRepository, U: UserRepository, L: OrderLookup>(
    State(state): State<Arc<AppState<R, U, L>>>,
    Json(req): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.users.create_user(req).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Update a user's profile fields.
#[tracing::instrument(skip(state), fields(user_id = %id))]
pub async fn update_user<R: PaymentRepository, U: UserRepository, L: OrderLookup>(
    State(state): State<Arc<AppState<R, U, L>>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id: UserId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid user ID".into()))?;

    let user = state.users.update_user(user_id, req).await?;
    Ok(Json(user))
}

/// Delete a user.
#[tracing::instrument(skip(state), fields(user_id = %id))]
pub async fn delete_user<R: PaymentRepository, U: UserRepository, L: OrderLookup>(
    State(state): State<Arc<AppState<R, U, L>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id: UserId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid user ID".into()))?;

    state.users.delete_user(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
