//! Todo/Tag backend server.
//!
//! An in-memory REST backend for todos, tags, and the many-to-many
//! associations between them.

use clap::Parser;
use todotag_rest::{ServerConfig, create_app_with_config, init_logging};
use todotag_store::MemoryBackend;
use tracing::info;

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        base_url = %config.base_url,
        "Starting Todo/Tag server"
    );

    let backend = MemoryBackend::new(config.base_url.clone());
    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}
