//! Application state and HTTP router construction.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::Database;
use crate::graphql::{self, BookshelfSchema};

/// Shared state for HTTP handlers (GraphQL, health routes).
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Database,
    pub schema: BookshelfSchema,
}

impl AppState {
    /// Build the schema over `db` using the join rule from `config`.
    pub fn new(config: Arc<Config>, db: Database) -> Self {
        let schema = graphql::build_schema(db.clone(), config.author_books_join);
        Self { config, db, schema }
    }
}

/// Build the full Axum router: health probes, /graphql, and layers.
pub fn build_app(state: AppState) -> Router<()> {
    Router::new()
        .merge(crate::api::health::router())
        .merge(graphql::routes::router())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
