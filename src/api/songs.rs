use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{
        Path, Query,
        rejection::{JsonRejection, QueryRejection},
    },
};
use tokio::sync::Mutex;

use crate::{
    api::ApiError,
    management::SongManager,
    types::{CreateSong, Song, SongListing, SongQuery, UpdateSong},
};

/// Handle to the song collection shared by all handlers.
pub type SharedSongs = Arc<Mutex<SongManager>>;

/// `GET /songs` and `GET /songs?id=X`. An empty `id` lists everything.
pub async fn list_songs(
    query: Result<Query<SongQuery>, QueryRejection>,
    Extension(songs): Extension<SharedSongs>,
) -> Result<Json<SongListing>, ApiError> {
    let Query(query) = query?;
    let songs = songs.lock().await;

    match query.id.as_deref().filter(|id| !id.is_empty()) {
        Some(id) => Ok(Json(SongListing::One(songs.get(id)?.clone()))),
        None => Ok(Json(SongListing::All(songs.list().to_vec()))),
    }
}

pub async fn create_song(
    Extension(songs): Extension<SharedSongs>,
    payload: Result<Json<CreateSong>, JsonRejection>,
) -> Result<Json<Song>, ApiError> {
    let Json(data) = payload?;

    let song = songs.lock().await.create(data);
    tracing::info!(id = %song.id, name = %song.name, "created song");
    Ok(Json(song))
}

pub async fn update_song(
    Path(id): Path<String>,
    Extension(songs): Extension<SharedSongs>,
    payload: Result<Json<UpdateSong>, JsonRejection>,
) -> Result<Json<Song>, ApiError> {
    let Json(patch) = payload?;

    let song = songs.lock().await.update(&id, patch)?;
    tracing::info!(id = %song.id, "updated song");
    Ok(Json(song))
}

pub async fn delete_song(
    Path(id): Path<String>,
    Extension(songs): Extension<SharedSongs>,
) -> Result<Json<Song>, ApiError> {
    let song = songs.lock().await.delete(&id)?;
    tracing::info!(id = %song.id, "deleted song");
    Ok(Json(song))
}

pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
