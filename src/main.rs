//! Bookshelf - in-memory GraphQL API over authors, books and publishers
//!
//! All operations are exposed via GraphQL at /graphql. State lives in process
//! memory, is seeded on startup and discarded on exit.

mod api;
mod app;
mod config;
mod db;
mod graphql;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::{AppState, build_app};
use crate::config::{Config, LogFormat};
use crate::db::Database;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so the log format is known before tracing starts
    dotenvy::dotenv().ok();
    let config = Arc::new(Config::from_env()?);

    init_tracing(config.log_format);

    tracing::info!("Starting Bookshelf");
    tracing::info!(
        author_books_join = ?config.author_books_join,
        graphiql = config.graphiql,
        "Configuration loaded"
    );

    let db = Database::seeded();
    let counts = db.counts();
    tracing::info!(
        authors = counts.authors,
        books = counts.books,
        publishers = counts.publishers,
        "Store seeded"
    );

    let state = AppState::new(config.clone(), db);
    tracing::info!("GraphQL schema built");

    let app = build_app(state);

    let addr = SocketAddr::from((config.host, config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Listening on {}", addr);
    tracing::info!("GraphQL playground: http://localhost:{}/graphql", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("axum::serve")?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bookshelf=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer().pretty()).init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
