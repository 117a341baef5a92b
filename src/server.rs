use axum::{
    Extension, Router,
    routing::{get, patch},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use crate::{Res, api, management::SongManager};

pub fn build_router(songs: SongManager) -> Router {
    let state: api::SharedSongs = Arc::new(Mutex::new(songs));

    Router::new()
        .route("/health", get(api::health))
        .route("/songs", get(api::list_songs).post(api::create_song))
        .route(
            "/songs/{id}",
            patch(api::update_song).delete(api::delete_song),
        )
        .fallback(api::not_found)
        .method_not_allowed_fallback(api::method_not_allowed)
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}

/// Serves the song API on `addr` until Ctrl+C is received.
pub async fn start_api_server(addr: SocketAddr, songs: SongManager) -> Res<()> {
    let app = build_router(songs);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
