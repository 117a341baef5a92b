use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::utils;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub release: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub name: String,
    pub duration: i64,
    pub album: Album,
}

/// Request body for `POST /songs`. Both fields are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSong {
    pub name: String,
    pub duration: i64,
}

/// Request body for `PATCH /songs/{id}`.
///
/// `None` leaves the field unchanged. An explicit JSON `null` is treated the
/// same as an omitted field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSong {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub duration: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SongQuery {
    pub id: Option<String>,
}

/// Response of `GET /songs`: the whole collection, or one song when an id
/// was given.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SongListing {
    All(Vec<Song>),
    One(Song),
}

impl SongListing {
    pub fn into_songs(self) -> Vec<Song> {
        match self {
            SongListing::All(songs) => songs,
            SongListing::One(song) => vec![song],
        }
    }
}

#[derive(Tabled)]
pub struct SongTableRow {
    pub id: String,
    pub name: String,
    pub duration: String,
    pub album: String,
}

impl From<&Song> for SongTableRow {
    fn from(song: &Song) -> Self {
        SongTableRow {
            id: song.id.clone(),
            name: song.name.clone(),
            duration: utils::format_duration(song.duration),
            album: song.album.name.clone(),
        }
    }
}
