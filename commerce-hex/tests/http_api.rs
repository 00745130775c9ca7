//! Integration tests for the HTTP API.
//!
//! These tests drive the full Axum router with in-memory adapters and a
//! scripted order service, verifying status codes and response bodies at
//! the HTTP boundary.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use chrono::Utc;
use http_body_util::BodyExt;
use tower::ServiceExt;

use commerce_hex::{PaymentService, UserService, inbound::HttpServer};
use commerce_types::{
    CreatePaymentRequest, CreateUserRequest, OrderId, OrderLookup, OrderLookupError, OrderSummary,
    Payment, PaymentId, PaymentRepository, PaymentStatus, RepoError, UpdatePaymentRequest,
    UpdateUserRequest, User, UserId, UserRepository,
};

/// In-memory store backing both repositories. Clones share state, like the
/// real adapters share a connection pool.
#[derive(Clone)]
struct TestRepo {
    payments: Arc<Mutex<Vec<Payment>>>,
    users: Arc<Mutex<Vec<User>>>,
    next_payment_id: Arc<AtomicI64>,
    next_user_id: Arc<AtomicI64>,
}

impl TestRepo {
    fn with_payments(payments: Vec<Payment>) -> Self {
        let next = payments.iter().map(|p| p.id.get()).max().unwrap_or(0) + 1;
        Self {
            payments: Arc::new(Mutex::new(payments)),
            users: Arc::new(Mutex::new(Vec::new())),
            next_payment_id: Arc::new(AtomicI64::new(next)),
            next_user_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

#[async_trait]
impl PaymentRepository for TestRepo {
    async fn create_payment(&self, req: CreatePaymentRequest) -> Result<Payment, RepoError> {
        let id = PaymentId::new(self.next_payment_id.fetch_add(1, Ordering::SeqCst));
        let payment = Payment::from_parts(id, req.order_id, req.is_paid, req.status, Utc::now());
        self.payments.lock().unwrap().push(payment.clone());
        Ok(payment)
    }

    async fn find_payment(&self, id: PaymentId) -> Result<Option<Payment>, RepoError> {
        Ok(self
            .payments
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn list_payments(&self) -> Result<Vec<Payment>, RepoError> {
        Ok(self.payments.lock().unwrap().clone())
    }

    async fn update_payment(
        &self,
        id: PaymentId,
        req: UpdatePaymentRequest,
    ) -> Result<Payment, RepoError> {
        let mut payments = self.payments.lock().unwrap();
        let payment = payments
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;
        payment.is_paid = req.is_paid;
        payment.status = req.status;
        Ok(payment.clone())
    }

    async fn delete_payment(&self, id: PaymentId) -> Result<bool, RepoError> {
        let mut payments = self.payments.lock().unwrap();
        let before = payments.len();
        payments.retain(|p| p.id != id);
        Ok(payments.len() < before)
    }
}

#[async_trait]
impl UserRepository for TestRepo {
    async fn create_user(&self, req: CreateUserRequest) -> Result<User, RepoError> {
        let id = UserId::new(self.next_user_id.fetch_add(1, Ordering::SeqCst));
        let user = User::from_parts(id, req.first_name, req.last_name, req.email, Utc::now());
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn find_user(&self, id: UserId) -> Result<Option<User>, RepoError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, RepoError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn update_user(&self, id: UserId, req: UpdateUserRequest) -> Result<User, RepoError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(RepoError::NotFound)?;
        user.first_name = req.first_name;
        user.last_name = req.last_name;
        user.email = req.email;
        Ok(user.clone())
    }

    async fn delete_user(&self, id: UserId) -> Result<bool, RepoError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() < before)
    }
}

/// Scripted response for one order id.
#[derive(Clone)]
enum Scripted {
    Found(OrderSummary),
    NoData,
    Down(String),
}

/// Order service double with a fixed script per order id. Unscripted ids
/// answer as having no data.
struct ScriptedOrderService {
    script: HashMap<OrderId, Scripted>,
}

impl ScriptedOrderService {
    fn new() -> Self {
        Self {
            script: HashMap::new(),
        }
    }

    fn on(mut self, id: i64, outcome: Scripted) -> Self {
        self.script.insert(OrderId::new(id), outcome);
        self
    }
}

#[async_trait]
impl OrderLookup for ScriptedOrderService {
    async fn get_order(&self, id: OrderId) -> Result<Option<OrderSummary>, OrderLookupError> {
        match self.script.get(&id) {
            Some(Scripted::Found(summary)) => Ok(Some(summary.clone())),
            Some(Scripted::NoData) | None => Ok(None),
            Some(Scripted::Down(msg)) => Err(OrderLookupError::Unavailable(msg.clone())),
        }
    }
}

fn payment(id: i64, order_id: i64, is_paid: bool, status: PaymentStatus) -> Payment {
    Payment::from_parts(
        PaymentId::new(id),
        OrderId::new(order_id),
        is_paid,
        status,
        Utc::now(),
    )
}

fn summary(id: i64, description: &str, fee: f64) -> OrderSummary {
    OrderSummary {
        id: OrderId::new(id),
        description: description.to_string(),
        fee,
        ordered_at: Utc::now(),
    }
}

/// Helper to build a router over seeded payments and a scripted order service.
fn test_router(payments: Vec<Payment>, orders: ScriptedOrderService) -> Router {
    let repo = TestRepo::with_payments(payments);
    let server = HttpServer::new(
        PaymentService::new(repo.clone(), orders),
        UserService::new(repo),
    );
    server.router()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = test_router(Vec::new(), ScriptedOrderService::new());

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_get_payment_returns_enriched_json() {
    let app = test_router(
        vec![payment(1, 1, true, PaymentStatus::Completed)],
        ScriptedOrderService::new().on(1, Scripted::Found(summary(1, "Laptop order", 1299.0))),
    );

    let response = app.oneshot(get("/api/payments/1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["order_id"], 1);
    assert_eq!(json["is_paid"], true);
    assert_eq!(json["status"], "COMPLETED");
    assert_eq!(json["order"]["description"], "Laptop order");
    assert_eq!(json["order"]["fee"], 1299.0);
}

#[tokio::test]
async fn test_get_payment_without_order_data_omits_order_field() {
    let app = test_router(
        vec![payment(1, 1, false, PaymentStatus::InProgress)],
        ScriptedOrderService::new().on(1, Scripted::NoData),
    );

    let response = app.oneshot(get("/api/payments/1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["id"], 1);
    assert!(json.get("order").is_none(), "order key should be absent");
}

#[tokio::test]
async fn test_get_payment_unknown_id_returns_404() {
    let app = test_router(Vec::new(), ScriptedOrderService::new());

    let response = app.oneshot(get("/api/payments/42")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = read_json(response).await;
    assert_eq!(json["error"], "Payment 42");
    assert_eq!(json["code"], 404);
}

#[tokio::test]
async fn test_get_payment_invalid_id_returns_400() {
    let app = test_router(Vec::new(), ScriptedOrderService::new());

    let response = app.oneshot(get("/api/payments/abc")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = read_json(response).await;
    assert_eq!(json["error"], "Invalid payment ID");
}

#[tokio::test]
async fn test_get_payment_upstream_failure_returns_502_with_message() {
    let app = test_router(
        vec![payment(1, 1, true, PaymentStatus::Completed)],
        ScriptedOrderService::new()
            .on(1, Scripted::Down("Order service unavailable".to_string())),
    );

    let response = app.oneshot(get("/api/payments/1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = read_json(response).await;
    // The upstream message passes through unchanged.
    assert_eq!(json["error"], "Order service unavailable");
    assert_eq!(json["code"], 502);
}

#[tokio::test]
async fn test_list_payments_partial_enrichment() {
    let app = test_router(
        vec![
            payment(1, 1, true, PaymentStatus::Completed),
            payment(2, 2, false, PaymentStatus::InProgress),
        ],
        ScriptedOrderService::new()
            .on(1, Scripted::Found(summary(1, "Test Order 1", 100.0)))
            .on(2, Scripted::NoData),
    );

    let response = app.oneshot(get("/api/payments")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], 1);
    assert_eq!(items[0]["order"]["description"], "Test Order 1");
    assert_eq!(items[1]["id"], 2);
    assert!(items[1].get("order").is_none());
}

#[tokio::test]
async fn test_list_payments_survives_upstream_failure() {
    let app = test_router(
        vec![
            payment(1, 1, true, PaymentStatus::Completed),
            payment(2, 2, false, PaymentStatus::InProgress),
        ],
        ScriptedOrderService::new()
            .on(1, Scripted::Down("Order service unavailable".to_string()))
            .on(2, Scripted::Found(summary(2, "Test Order 2", 200.0))),
    );

    let response = app.oneshot(get("/api/payments")).await.unwrap();

    // A failing lookup degrades one record, not the listing.
    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items[0].get("order").is_none());
    assert_eq!(items[1]["order"]["fee"], 200.0);
}

#[tokio::test]
async fn test_create_payment_returns_201_with_defaults() {
    let app = test_router(Vec::new(), ScriptedOrderService::new());

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/payments",
            r#"{"order_id": 5}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = read_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["order_id"], 5);
    assert_eq!(json["is_paid"], false);
    assert_eq!(json["status"], "NOT_STARTED");
}

#[tokio::test]
async fn test_create_payment_invalid_order_reference_returns_400() {
    let app = test_router(Vec::new(), ScriptedOrderService::new());

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/payments",
            r#"{"order_id": 0}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = read_json(response).await;
    assert_eq!(json["error"], "Order reference must be positive, got 0");
}

#[tokio::test]
async fn test_update_then_delete_payment() {
    let app = test_router(
        vec![payment(1, 3, false, PaymentStatus::NotStarted)],
        ScriptedOrderService::new(),
    );

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            "/api/payments/1",
            r#"{"is_paid": true, "status": "COMPLETED"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["is_paid"], true);
    assert_eq!(json["status"], "COMPLETED");
    assert_eq!(json["order_id"], 3, "update must not touch the order link");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/api/payments/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get("/api/payments/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_user_crud_round_trip() {
    let app = test_router(Vec::new(), ScriptedOrderService::new());

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/users",
            r#"{"first_name": "Alice", "last_name": "Smith", "email": "alice@example.com"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = read_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["email"], "alice@example.com");

    let response = app.clone().oneshot(get("/api/users/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["first_name"], "Alice");

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            "/api/users/1",
            r#"{"first_name": "Alice", "last_name": "Jones", "email": "alice.jones@example.com"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["last_name"], "Jones");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/api/users/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get("/api/users/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_user_invalid_email_returns_400() {
    let app = test_router(Vec::new(), ScriptedOrderService::new());

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/users",
            r#"{"first_name": "Alice", "last_name": "Smith", "email": "not-an-email"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = read_json(response).await;
    assert!(json.get("error").is_some(), "response should carry an error");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = test_router(Vec::new(), ScriptedOrderService::new());

    let response = app.oneshot(get("/api-docs/openapi.json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["info"]["title"], "Commerce Service API");
}
