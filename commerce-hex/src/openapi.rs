//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use commerce_types::domain::{OrderId, OrderSummary, Payment, PaymentId, PaymentStatus, User, UserId};
use commerce_types::dto::{
    CreatePaymentRequest, CreateUserRequest, PaymentDetails, UpdatePaymentRequest,
    UpdateUserRequest,
};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// List all payments with their order details
#[utoipa::path(
    get,
    path = "/api/payments",
    tag = "payments",
    responses(
        (status = 200, description = "List of payments, each with its order when the order service had data for it", body = Vec<PaymentDetails>)
    )
)]
async fn list_payments() {}

/// Get payment by ID
#[utoipa::path(
    get,
    path = "/api/payments/{id}",
    tag = "payments",
    params(
        ("id" = PaymentId, Path, description = "Payment ID")
    ),
    responses(
        (status = 200, description = "Payment with its order details", body = PaymentDetails),
        (status = 404, description = "Payment not found"),
        (status = 502, description = "Order service failed while resolving the order")
    )
)]
async fn get_payment() {}

/// Create a new payment
#[utoipa::path(
    post,
    path = "/api/payments",
    tag = "payments",
    request_body = CreatePaymentRequest,
    responses(
        (status = 201, description = "Payment created successfully", body = Payment),
        (status = 400, description = "Invalid request")
    )
)]
async fn create_payment() {}

/// Update a payment
#[utoipa::path(
    put,
    path = "/api/payments/{id}",
    tag = "payments",
    request_body = UpdatePaymentRequest,
    params(
        ("id" = PaymentId, Path, description = "Payment ID")
    ),
    responses(
        (status = 200, description = "Payment updated successfully", body = Payment),
        (status = 404, description = "Payment not found")
    )
)]
async fn update_payment() {}

/// Delete a payment
#[utoipa::path(
    delete,
    path = "/api/payments/{id}",
    tag = "payments",
    params(
        ("id" = PaymentId, Path, description = "Payment ID")
    ),
    responses(
        (status = 204, description = "Payment deleted"),
        (status = 404, description = "Payment not found")
    )
)]
async fn delete_payment() {}

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses(
        (status = 200, description = "List of users", body = Vec<User>)
    )
)]
async fn list_users() {}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(
        ("id" = UserId, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 404, description = "User not found")
    )
)]
async fn get_user() {}

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = User),
        (status = 400, description = "Invalid request")
    )
)]
async fn create_user() {}

/// Update a user
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "users",
    request_body = UpdateUserRequest,
    params(
        ("id" = UserId, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User updated successfully", body = User),
        (status = 404, description = "User not found")
    )
)]
async fn update_user() {}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "users",
    params(
        ("id" = UserId, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
async fn delete_user() {}

/// OpenAPI documentation for the Commerce API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Commerce Service API",
        version = "1.0.0",
        description = "Payment and user service backed by an external order service.\n\nPayment reads are enriched with order data fetched per payment; when the order service has no data for an order the payment is returned without it.",
        license(name = "MIT"),
    ),
    paths(
        health,
        list_payments,
        get_payment,
        create_payment,
        update_payment,
        delete_payment,
        list_users,
        get_user,
        create_user,
        update_user,
        delete_user,
    ),
    components(
        schemas(
            CreatePaymentRequest,
            UpdatePaymentRequest,
            PaymentDetails,
            Payment,
            PaymentStatus,
            PaymentId,
            OrderSummary,
            OrderId,
            CreateUserRequest,
            UpdateUserRequest,
            User,
            UserId,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "payments", description = "Payment management and order enrichment"),
        (name = "users", description = "User management operations"),
    )
)]
pub struct ApiDoc;
