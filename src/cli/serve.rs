use std::{net::SocketAddr, str::FromStr};

use crate::{config, error, info, management::SongManager, server};

pub async fn serve(addr: Option<String>) {
    let addr = addr.unwrap_or_else(config::server_addr);
    let addr = match SocketAddr::from_str(&addr) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address {}: {}", addr, e),
    };

    let songs = SongManager::seeded();
    info!(
        "Serving {} songs from \"{}\" on http://{}",
        songs.count(),
        songs.album().name,
        addr
    );

    if let Err(e) = server::start_api_server(addr, songs).await {
        error!("Server stopped. Err: {}", e);
    }
}
