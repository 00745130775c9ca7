//! Client example demonstrating payment and user flows against a running
//! server, backed by a local stand-in for the order service.
//!
//! Run with: cargo run -p commerce-app --example client_example --no-default-features --features sqlite

use std::net::SocketAddr;
use std::time::Duration;

use axum::{Json, extract::Path, http::StatusCode, response::IntoResponse, routing::get};
use tempfile::tempdir;
use tokio::net::TcpListener;

use commerce_client::CommerceClient;
use commerce_hex::{PaymentService, UserService, inbound::HttpServer};
use commerce_repo::build_repo;
use commerce_types::{OrderId, PaymentStatus};
use order_client::HttpOrderLookup;

/// Minimal order service stand-in. Knows orders 1 and 2, answers 404 for
/// everything else.
async fn serve_order(Path(id): Path<i64>) -> axum::response::Response {
    match id {
        1 => Json(serde_json::json!({
            "id": 1,
            "description": "Mechanical keyboard",
            "fee": 149.99,
            "ordered_at": "2026-01-15T10:30:00Z"
        }))
        .into_response(),
        2 => Json(serde_json::json!({
            "id": 2,
            "description": "Ultrawide monitor",
            "fee": 599.0,
            "ordered_at": "2026-02-03T14:00:00Z"
        }))
        .into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Start the order service stand-in on its own port
    let order_listener = TcpListener::bind("127.0.0.1:0").await?;
    let order_addr: SocketAddr = order_listener.local_addr()?;
    let order_router = axum::Router::new().route("/orders/{id}", get(serve_order));
    tokio::spawn(async move {
        axum::serve(order_listener, order_router).await.unwrap();
    });
    println!("🧾 Order service stand-in on {order_addr}");

    // Use a temp file-backed SQLite DB
    let tmp = tempdir()?;
    let db_path = tmp.path().join("commerce.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    // Build repository (handles connection and migration)
    let repo = build_repo(&db_url).await?;

    // Wire the services and start the server in the background
    let orders = HttpOrderLookup::new(format!("http://{order_addr}/orders"))
        .with_timeout(Duration::from_millis(1000));
    let server = HttpServer::new(PaymentService::new(repo.clone(), orders), UserService::new(repo));
    let router = server.router();

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    println!("🚀 Starting server on {addr}...");
    println!("   Database: {db_url}");
    tokio::spawn(async move {
        axum::serve(listener, router.into_make_service()).await.unwrap();
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(500)).await;

    // Create client
    let client = CommerceClient::new(format!("http://{addr}"));

    // ─────────────────────────────────────────────────────────────────────────
    // Demo: Payment and user flows
    // ─────────────────────────────────────────────────────────────────────────

    // Health check
    let health = client.health().await?;
    println!("✅ Server health: {health}");

    // Create a user
    let alice = client
        .create_user("Alice", "Smith", "alice@example.com")
        .await?;
    println!("✅ Created user: {} {} (id={})", alice.first_name, alice.last_name, alice.id);

    // Create payments, one per order. Order 3 does not exist upstream.
    for order in [1, 2, 3] {
        let payment = client
            .create_payment(OrderId::new(order), false, PaymentStatus::NotStarted)
            .await?;
        println!("✅ Created payment {} for order {}", payment.id, payment.order_id);
    }

    // List payments, enriched with order data where the order service has it
    let payments = client.list_payments().await?;
    println!("\n📋 All payments:");
    for p in &payments {
        match &p.order {
            Some(order) => println!(
                "   - payment {} [{}]: {} (${:.2})",
                p.id, p.status, order.description, order.fee
            ),
            None => println!("   - payment {} [{}]: no order data", p.id, p.status),
        }
    }

    // Mark the first payment as completed
    let first = payments[0].id;
    let updated = client
        .update_payment(first, true, PaymentStatus::Completed)
        .await?;
    println!("\n✅ Payment {} marked {}", updated.id, updated.status);

    // Fetch it again with order details
    let detailed = client.get_payment(first).await?;
    if let Some(order) = &detailed.order {
        println!("   Order: {} (${:.2})", order.description, order.fee);
    }

    // Drop the payment whose order never existed
    let orphan = payments[2].id;
    client.delete_payment(orphan).await?;
    println!("✅ Deleted payment {orphan}");

    let remaining = client.list_payments().await?;
    println!("   {} payments remain", remaining.len());

    println!("\n🎉 Example completed successfully!");

    Ok(())
}
