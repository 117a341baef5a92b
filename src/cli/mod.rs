//! # CLI Module
//!
//! Command implementations behind the `songapi` binary.
//!
//! - [`serve`] - seeds the song collection and runs the HTTP server until
//!   Ctrl+C.
//! - [`list_songs`] - asks a running server for its songs and prints them as a
//!   table.
//!
//! Commands report to the terminal through the crate's `info!`, `success!`,
//! `warning!` and `error!` macros. `error!` terminates the process, so a
//! command either completes or exits with status 1.
//!
//! ```bash
//! songapi serve --addr 0.0.0.0:8000
//! songapi list
//! songapi list --id 3f0c...
//! ```

mod serve;
mod songs;

pub use serve::serve;
pub use songs::list_songs;
