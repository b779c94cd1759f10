//! scentmatch-ui library - fragrance recommendation web service
//!
//! Serves the preference form, scores the catalog against each submission,
//! and renders the top five matches with images.

use axum::Router;
use sqlx::SqlitePool;
use std::path::PathBuf;

pub mod api;
pub mod images;
pub mod recommend;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Catalog database pool (read-only)
    pub db: SqlitePool,
    /// Directory scanned for fragrance images
    pub image_root: PathBuf,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool, image_root: PathBuf) -> Self {
        Self { db, image_root }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;
    use tower_http::services::ServeDir;

    Router::new()
        .route("/", get(api::form_page).post(api::submit_preferences))
        .merge(api::health_routes())
        .nest_service("/images", ServeDir::new(state.image_root.clone()))
        .with_state(state)
}
