//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use commerce_types::{OrderLookup, PaymentRepository, UserRepository};

use super::handlers::{self, AppState};
use crate::openapi::ApiDoc;
use crate::{PaymentService, UserService};

/// HTTP Server for the Commerce API.
pub struct HttpServer<R: PaymentRepository, U: UserRepository, L: OrderLookup> {
    state: Arc<AppState<R, U, L>>,
}

impl<R: PaymentRepository, U: UserRepository, L: OrderLookup> HttpServer<R, U, L> {
    /// Creates a new HTTP server with the given services.
    pub fn new(payments: PaymentService<R, L>, users: UserService<U>) -> Self {
        Self {
            state: Arc::new(AppState { payments, users }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        // Build HTTP metrics layer (uses globally set MeterProvider)
        let metrics = axum_otel_metrics::HttpMetricsLayerBuilder::new().build();

        Router::new()
            .route("/health", get(handlers::health))
            .route("/api/payments", get(handlers::list_payments::<R, U, L>))
            .route("/api/payments", post(handlers::create_payment::<R, U, L>))
            .route("/api/payments/{id}", get(handlers::get_payment::<R, U, L>))
            .route(
                "/api/payments/{id}",
                put(handlers::update_payment::<R, U, L>),
            )
            .route(
                "/api/payments/{id}",
                delete(handlers::delete_payment::<R, U, L>),
            )
            .route("/api/users", get(handlers::list_users::<R, U, L>))
            .route("/api/users", post(handlers::create_user::<R, U, L>))
            .route("/api/users/{id}", get(handlers::get_user::<R, U, L>))
            .route("/api/users/{id}", put(handlers::update_user::<R, U, L>))
            .route("/api/users/{id}", delete(handlers::delete_user::<R, U, L>))
            .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
            .layer(metrics)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
