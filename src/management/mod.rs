mod songs;

pub use songs::SEED_ALBUM_NAME;
pub use songs::SongError;
pub use songs::SongManager;
