//! Binary entrypoint for the course graph HTTP server.
//!
//! Configuration comes from environment variables; see [`ServerConfig`].
//! The catalog is read and the graph built once, before the listener binds.

use coursegraph_server::config::ServerConfig;
use coursegraph_server::router::build_router;
use coursegraph_server::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    tracing::info!(catalog = %config.catalog_path.display(), "loading course catalog");
    let state = AppState::load(&config.catalog_path, config.limits)?;

    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("coursegraph server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
