//! # todotag-rest - Todo/Tag RESTful API Implementation
//!
//! This crate provides the HTTP surface of the todotag backend: collection
//! and item CRUD for todos and tags, plus the nested association
//! sub-collections that expose the bidirectional Todo/Tag relation.
//!
//! ## API Endpoints
//!
//! | HTTP Method | URL Pattern | Effect |
//! |-------------|-------------|--------|
//! | GET | `/todos` | list all todos, each with inlined `tags` |
//! | POST | `/todos` | create a todo from `{title, completed?, order?}` |
//! | DELETE | `/todos` | delete all todos and their associations |
//! | GET | `/todos/{id}` | read one todo |
//! | PATCH | `/todos/{id}` | partial update |
//! | DELETE | `/todos/{id}` | delete, cascading edge removal |
//! | GET | `/todos/{id}/tags` | list associated tags |
//! | POST | `/todos/{id}/tags` | `{id: tagId}` - create an association |
//! | DELETE | `/todos/{id}/tags` | remove all of the todo's associations |
//! | GET | `/todos/{id}/tags/{tag_id}` | resolve one association |
//! | DELETE | `/todos/{id}/tags/{tag_id}` | remove one association |
//! | GET | `/health` | liveness probe |
//!
//! The same shape is mirrored under `/tags` with `todos` as the sub-resource
//! name and the roles reversed.
//!
//! Every successful response carries a full JSON representation of the
//! affected entity or entity list; mutations echo current state so a client
//! never needs a follow-up GET to observe a write.
//!
//! ## Error Handling
//!
//! Errors are returned as a JSON body `{"error": {"code", "message"}}` with
//! an appropriate HTTP status:
//!
//! | HTTP Status | Code | Description |
//! |-------------|------|-------------|
//! | 400 | invalid | Validation error (missing or ill-typed field) |
//! | 400 | malformed-json | Request body is not parseable JSON |
//! | 404 | not-found | Item or association not found |
//! | 415 | not-supported | Unsupported request content type |
//! | 500 | exception | Internal server error |
//!
//! ## Configuration
//!
//! The server is configured via environment variables (see [`config`]):
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `TODOTAG_PORT` | 8080 | Server port |
//! | `TODOTAG_HOST` | 127.0.0.1 | Host to bind |
//! | `TODOTAG_LOG_LEVEL` | info | Log level |
//! | `TODOTAG_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `TODOTAG_ENABLE_CORS` | true | Enable CORS |
//! | `TODOTAG_CORS_ORIGINS` | * | Allowed CORS origins |
//! | `TODOTAG_BASE_URL` | http://localhost:8080 | Prefix of item urls |
//!
//! CORS defaults to fully permissive: the reference conformance client is a
//! browser page served from another origin.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use todotag_rest::{create_app, ServerConfig};
//! use todotag_store::MemoryBackend;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let config = ServerConfig::default();
//!     let backend = MemoryBackend::new(config.base_url.clone());
//!     let app = create_app(backend);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`error`] - Error types and JSON error body generation
//! - [`config`] - Server configuration
//! - [`state`] - Application state (the shared storage backend)
//! - [`handlers`] - HTTP request handlers per resource
//! - [`representations`] - Response shapes with inlined associations
//! - [`routing`] - Route configuration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod representations;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use todotag_store::TodoTagStorage;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// This is a convenience function that creates the app with default
/// settings. For more control, use [`create_app_with_config`].
pub fn create_app<S>(storage: S) -> Router
where
    S: TodoTagStorage + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// Sets up the complete REST API with all handlers and the middleware
/// stack (trace, timeout, and optionally CORS).
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: TodoTagStorage + 'static,
{
    info!(
        "Creating REST API server with backend: {}",
        storage.backend_name()
    );

    let state = AppState::new(Arc::new(storage));
    let router = routing::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "todotag_rest={level},todotag_store={level},tower_http=debug"
            ))
        });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
