//! Router assembly and the listen loop.

use axum::Router;
use session::SessionCodec;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::assets::static_routes;
use crate::config::SiteConfig;
use crate::error::Result;
use crate::routes::{docs_routes, index_routes, login_routes};
use crate::state::AppState;

/// Builds the full application router for the given configuration.
pub fn build_router(config: &SiteConfig) -> Router {
    let state = AppState {
        codec: SessionCodec::new(config.session_secret.as_bytes(), config.production),
    };

    Router::new()
        .merge(index_routes())
        .merge(login_routes())
        .merge(docs_routes())
        .with_state(state)
        .merge(static_routes(config.static_dir.as_deref()))
        .layer(TraceLayer::new_for_http())
}

/// Binds the configured address and serves requests until shutdown.
pub async fn start_server(config: &SiteConfig) -> Result<()> {
    let router = build_router(config);
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on http://{addr}");
    axum::serve(listener, router).await?;
    Ok(())
}
