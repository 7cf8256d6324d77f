//! CaseLink Backend Server
//!
//! Single-process HTTP backend for the CaseLink case-management product:
//! account registration/login, case records, shared messages, and the
//! upload-and-mint pipeline against the Starton API.

use axum::extract::{DefaultBodyLimit, State};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::{routing::get, Json, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};

use caselink_server::accounts::AccountService;
use caselink_server::cases::CaseService;
use caselink_server::config::Config;
use caselink_server::messages::MessageService;
use caselink_server::mint::{MintService, PgTransactionRecorder, StartonClient};
use caselink_server::session::SessionStore;
use caselink_server::state::AppState;
use caselink_server::{db, middleware, routes};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_target(true)
        .init();

    tracing::info!(environment = config.environment.as_str(), "Starting CaseLink server");

    // Initialize database connection pool and schema
    let db_pool = match db::create_pool(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database connection failed: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = db::run_migrations(&db_pool).await {
        tracing::error!("Migration failed: {}", e);
        std::process::exit(1);
    }

    // Build the Starton client and services
    let starton_client = match StartonClient::new(&config.mint) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to build Starton client: {}", e);
            std::process::exit(1);
        }
    };

    let account_service = Arc::new(AccountService::new(db_pool.clone()));
    let case_service = Arc::new(CaseService::new(db_pool.clone()));
    let message_service = Arc::new(MessageService::new(db_pool.clone()));
    let recorder = Arc::new(PgTransactionRecorder::new(db_pool.clone()));
    let mint_service = Arc::new(MintService::new(
        starton_client,
        recorder,
        config.mint.clone(),
    ));

    // Create shared app state
    let app_state = AppState::new(
        account_service,
        case_service,
        message_service,
        mint_service,
        SessionStore::new(),
        db_pool,
    );

    // Uploads are unbounded unless a cap is configured.
    let body_limit = match config.upload_max_bytes {
        Some(max) => DefaultBodyLimit::max(max),
        None => DefaultBodyLimit::disable(),
    };

    // Create the app router
    let app = Router::new()
        .route("/health", get(health_check))
        .merge(routes::page_routes())
        .merge(routes::auth_routes())
        .merge(routes::user_routes())
        .merge(routes::mint_routes())
        .merge(routes::case_routes())
        .merge(routes::message_routes())
        .fallback(route_not_found)
        .with_state(app_state)
        .layer(body_limit)
        .layer(axum::middleware::from_fn(middleware::request_tracing))
        .layer(configure_cors(config.cors_allowed_origins.as_deref()));

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));

    tracing::info!("Server listening on {}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    // Serve with graceful shutdown
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server shutdown complete");
}

/// Health check response
#[derive(serde::Serialize)]
struct HealthResponse {
    status: String,
    database: String,
    version: String,
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_status = match db::check_health(&state.db_pool).await {
        Ok(()) => "connected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    let status = if db_status == "connected" {
        "healthy"
    } else {
        "unhealthy"
    };

    Json(HealthResponse {
        status: status.to_string(),
        database: db_status,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Fixed 404 body for unmatched routes
async fn route_not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Route not found" })),
    )
}

fn configure_cors(allowed_origins: Option<&str>) -> CorsLayer {
    let allowed_origins = allowed_origins.unwrap_or_default();

    if allowed_origins.is_empty() {
        tracing::warn!("CORS_ALLOWED_ORIGINS not set, allowing all origins (permissive)");
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
