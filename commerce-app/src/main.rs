//! # Commerce Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the repository adapter
//! - Connect the order service client
//! - Create the payment and user services
//! - Start the HTTP server

mod config;

use std::time::Duration;

use opentelemetry::global;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commerce_hex::{PaymentService, UserService, inbound::HttpServer};
use commerce_repo::build_repo;
use order_client::HttpOrderLookup;

fn init_tracer() -> (sdktrace::Tracer, sdktrace::SdkTracerProvider) {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // Use gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()
        .expect("failed to create OTLP span exporter");

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    (provider.tracer("commerce-service"), provider)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize OpenTelemetry tracing
    let (otel_tracer, otel_provider) = init_tracer();
    let telemetry = tracing_opentelemetry::layer().with_tracer(otel_tracer);

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,commerce_app=debug,commerce_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(telemetry)
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting commerce server on port {}", config.port);
    tracing::info!("Using database: {}", config.database_url);
    tracing::info!("Order service at: {}", config.order_service_url);

    // Build repository (handles connection and migration)
    let repo = build_repo(&config.database_url).await?;

    // Connect the order service client
    let orders = HttpOrderLookup::new(&config.order_service_url)
        .with_timeout(Duration::from_millis(config.order_timeout_ms));

    // Create the services
    let payments = PaymentService::new(repo.clone(), orders);
    let users = UserService::new(repo);

    // Create and run the HTTP server
    let server = HttpServer::new(payments, users);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Ensure traces are flushed before exit
    let _ = otel_provider.shutdown();
    Ok(())
}
