use std::path::Path;

use axum::Router;
use configs::AppConfig;
use service::file::player_store::FileSystemPlayerStore;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the league document named by `cfg` and build the router over it.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let store_path = Path::new(&cfg.store.path);
    common::env::ensure_parent_dir(store_path).await?;
    let store = FileSystemPlayerStore::open(store_path).await?;
    info!(path = %store_path.display(), "league store ready");
    Ok(routes::build_router(store, build_cors()))
}

/// Public entry: build the app and run the HTTP server until `shutdown` resolves.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let app = build_app(&cfg).await?;

    let addr = cfg.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %listener.local_addr()?, "starting league server");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}
