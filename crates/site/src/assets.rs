use std::path::Path;

use axum::Router;
use tower_http::services::ServeDir;

/// Serves static assets (stylesheet, logo) when a directory is
/// configured; otherwise contributes nothing to the router.
pub(crate) fn static_routes(static_dir: Option<&Path>) -> Router {
    let Some(dir) = static_dir else {
        return Router::new();
    };
    tracing::info!("serving static assets from {}", dir.display());
    Router::new().fallback_service(ServeDir::new(dir))
}
