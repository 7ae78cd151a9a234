//! Static frontend bundle.

use tower_http::services::ServeDir;

use crate::config::ServerConfig;

/// Service for every path no route claims.
///
/// Looks in `public_dir` first, then in the built bundle.
pub fn service(config: &ServerConfig) -> ServeDir<ServeDir> {
    ServeDir::new(&config.public_dir).fallback(ServeDir::new(&config.static_dir))
}
