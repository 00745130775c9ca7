//! # Commerce Client SDK
//!
//! A typed Rust client for the Commerce API.

use commerce_types::{
    CreatePaymentRequest, CreateUserRequest, OrderId, Payment, PaymentDetails, PaymentId,
    PaymentStatus, UpdatePaymentRequest, UpdateUserRequest, User, UserId,
};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Commerce API client.
pub struct CommerceClient {
    base_url: String,
    http: Client,
}

impl CommerceClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Lists all payments with their order details.
    pub async fn list_payments(&self) -> Result<Vec<PaymentDetails>, ClientError> {
        self.get("/api/payments").await
    }

    /// Gets a payment by ID, including its order when available.
    pub async fn get_payment(&self, id: PaymentId) -> Result<PaymentDetails, ClientError> {
        self.get(&format!("/api/payments/{}", id)).await
    }

    /// Creates a new payment for an order.
    pub async fn create_payment(
        &self,
        order_id: OrderId,
        is_paid: bool,
        status: PaymentStatus,
    ) -> Result<Payment, ClientError> {
        let req = CreatePaymentRequest {
            order_id,
            is_paid,
            status,
        };
        self.post("/api/payments", &req).await
    }

    /// Updates a payment's paid flag and status.
    pub async fn update_payment(
        &self,
        id: PaymentId,
        is_paid: bool,
        status: PaymentStatus,
    ) -> Result<Payment, ClientError> {
        let req = UpdatePaymentRequest { is_paid, status };
        self.put(&format!("/api/payments/{}", id), &req).await
    }

    /// Deletes a payment.
    pub async fn delete_payment(&self, id: PaymentId) -> Result<(), ClientError> {
        self.delete(&format!("/api/payments/{}", id)).await
    }

    /// Creates a new user.
    pub async fn create_user(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<User, ClientError> {
        let req = CreateUserRequest {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
        };
        self.post("/api/users", &req).await
    }

    /// Gets a user by ID.
    pub async fn get_user(&self, id: UserId) -> Result<User, ClientError> {
        self.get(&format!("/api/users/{}", id)).await
    }

    /// Lists all users.
    pub async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        self.get("/api/users").await
    }

    /// Updates a user's profile fields.
    pub async fn update_user(
        &self,
        id: UserId,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<User, ClientError> {
        let req = UpdateUserRequest {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
        };
        self.put(&format!("/api/users/{}", id), &req).await
    }

    /// Deletes a user.
    pub async fn delete_user(&self, id: UserId) -> Result<(), ClientError> {
        self.delete(&format!("/api/users/{}", id)).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .put(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let resp = self
            .http
            .delete(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(api_error(status.as_u16(), body))
        }
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(api_error(status.as_u16(), body))
        }
    }
}

/// Pulls the `error` field out of an API error body, falling back to the
/// raw body.
fn api_error(status: u16, body: String) -> ClientError {
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or(body);
    ClientError::Api { status, message }
}
