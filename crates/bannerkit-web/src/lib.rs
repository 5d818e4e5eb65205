//! Web front end for bannerkit: interactive preview and banner downloads.

pub mod routes;

use std::sync::Arc;

use axum::Router;
use bannerkit::FontCatalog;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
///
/// The catalog is immutable once the server is up; handlers only read it, so
/// no locking is needed.
pub struct AppState {
    pub catalog: FontCatalog,
}

/// Assembles the application router over `catalog`.
pub fn app(catalog: FontCatalog) -> Router {
    Router::new()
        .merge(routes::banner_routes())
        .with_state(Arc::new(AppState { catalog }))
        .layer(TraceLayer::new_for_http())
}
