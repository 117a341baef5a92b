use chrono::Utc;
use thiserror::Error;

use crate::{
    types::{Album, CreateSong, Song, UpdateSong},
    utils,
};

pub const SEED_ALBUM_NAME: &str = "Uke greatest hits";

const SEED_SONGS: [(&str, i64); 2] = [("Tetris Theme", 60), ("Turrican 2 Theme", 30)];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SongError {
    #[error("song not found")]
    NotFound { id: String },
}

/// Owns the song collection and the album every song belongs to.
///
/// Songs are kept in insertion order and looked up by a linear scan over
/// their ids.
pub struct SongManager {
    album: Album,
    songs: Vec<Song>,
}

impl SongManager {
    /// An empty collection whose songs will all belong to `album`.
    pub fn new(album: Album) -> Self {
        Self {
            album,
            songs: Vec::new(),
        }
    }

    /// Builds the startup state: one album released now and two songs on it.
    pub fn seeded() -> Self {
        let album = Album {
            id: utils::generate_id(),
            name: SEED_ALBUM_NAME.to_string(),
            release: Utc::now(),
        };

        let mut manager = Self::new(album);
        for (name, duration) in SEED_SONGS {
            manager.create(CreateSong {
                name: name.to_string(),
                duration,
            });
        }
        manager
    }

    pub fn album(&self) -> &Album {
        &self.album
    }

    pub fn list(&self) -> &[Song] {
        &self.songs
    }

    pub fn count(&self) -> usize {
        self.songs.len()
    }

    pub fn get(&self, id: &str) -> Result<&Song, SongError> {
        self.position(id).map(|index| &self.songs[index])
    }

    pub fn create(&mut self, data: CreateSong) -> Song {
        let song = Song {
            id: self.fresh_id(),
            name: data.name,
            duration: data.duration,
            album: self.album.clone(),
        };
        self.songs.push(song.clone());
        song
    }

    /// Overwrites only the fields set in `patch`; the song keeps its position.
    pub fn update(&mut self, id: &str, patch: UpdateSong) -> Result<Song, SongError> {
        let index = self.position(id)?;

        let mut song = self.songs[index].clone();
        if let Some(name) = patch.name {
            song.name = name;
        }
        if let Some(duration) = patch.duration {
            song.duration = duration;
        }

        self.songs[index] = song.clone();
        Ok(song)
    }

    pub fn delete(&mut self, id: &str) -> Result<Song, SongError> {
        let index = self.position(id)?;
        Ok(self.songs.remove(index))
    }

    fn position(&self, id: &str) -> Result<usize, SongError> {
        self.songs
            .iter()
            .position(|song| song.id == id)
            .ok_or_else(|| SongError::NotFound { id: id.to_string() })
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = utils::generate_id();
            if !self.songs.iter().any(|song| song.id == id) {
                return id;
            }
        }
    }
}
