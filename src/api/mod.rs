//! # API Module
//!
//! HTTP endpoints of the song service, built on [Axum](https://docs.rs/axum).
//!
//! ## Endpoints
//!
//! ### Songs
//!
//! - [`list_songs`] - `GET /songs` returns the whole collection in insertion
//!   order; `GET /songs?id=X` returns a single song or 404.
//! - [`create_song`] - `POST /songs` appends a song on the shared album.
//! - [`update_song`] - `PATCH /songs/{id}` overwrites only the fields present
//!   in the body.
//! - [`delete_song`] - `DELETE /songs/{id}` removes the song and returns it.
//!
//! ### Monitoring
//!
//! - [`health`] - returns status, crate name and version.
//!
//! ## Errors
//!
//! Handlers return [`ApiError`], which renders as a JSON object with a single
//! `detail` field:
//!
//! - unknown song id: `404 {"detail": "song not found"}`
//! - body missing a field or carrying the wrong type, or a malformed query
//!   string: `422 {"detail": ...}`
//! - unknown route: `404 {"detail": "Not Found"}`
//! - known route, unsupported method: `405 {"detail": "Method Not Allowed"}`
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use songapi::{management::SongManager, server};
//!
//! let app = server::build_router(SongManager::seeded());
//! ```

mod error;
mod health;
mod songs;

pub use error::ApiError;
pub use health::health;
pub use songs::SharedSongs;
pub use songs::create_song;
pub use songs::delete_song;
pub use songs::list_songs;
pub use songs::method_not_allowed;
pub use songs::not_found;
pub use songs::update_song;
