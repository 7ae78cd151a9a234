//! Route definitions for the `/registration` resource.

use axum::routing::get_service;
use axum::Router;
use tower_http::services::ServeFile;

use crate::config::ServerConfig;
use crate::handlers::registration;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// GET    /registration   -> frontend index.html
/// POST   /registration   -> register
/// ```
pub fn router(config: &ServerConfig) -> Router<AppState> {
    Router::new().route(
        "/registration",
        get_service(ServeFile::new(config.index_file())).post(registration::register),
    )
}
