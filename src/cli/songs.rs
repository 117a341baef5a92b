use reqwest::{Client, StatusCode};
use tabled::Table;

use crate::{
    Res, config, error, success,
    types::{Song, SongListing, SongTableRow},
    warning,
};

pub async fn list_songs(id: Option<String>, url: Option<String>) {
    let base_url = url.unwrap_or_else(config::api_url);

    let songs = match fetch_songs(&base_url, id.as_deref()).await {
        Ok(songs) => songs,
        Err(e) => error!("Cannot fetch songs from {}. Err: {}", base_url, e),
    };

    if songs.is_empty() {
        warning!("No songs stored on {}", base_url);
        return;
    }

    let table_rows: Vec<SongTableRow> = songs.iter().map(SongTableRow::from).collect();
    println!("{}", Table::new(table_rows));
    success!("Listed {} song(s)", songs.len());
}

async fn fetch_songs(base_url: &str, id: Option<&str>) -> Res<Vec<Song>> {
    let client = Client::new();
    let mut request = client.get(format!("{}/songs", base_url.trim_end_matches('/')));
    if let Some(id) = id {
        request = request.query(&[("id", id)]);
    }

    let res = request.send().await?;
    if res.status() == StatusCode::NOT_FOUND {
        return Err("song not found".into());
    }

    let listing: SongListing = res.error_for_status()?.json().await?;
    Ok(listing.into_songs())
}
