//! Configuration management for the song API.
//!
//! Values are read from environment variables, optionally pre-populated from a
//! `.env` file in the local data directory. Every value has a default, so the
//! server runs without any configuration at all.
//!
//! Lookup order:
//! 1. Command-line flags (handled by the caller)
//! 2. Environment variables
//! 3. `.env` file in the local data directory
//! 4. Application defaults

use std::{
    env,
    path::{Path, PathBuf},
};

use tracing_subscriber::EnvFilter;

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8000";
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Loads environment variables from `songapi/.env` in the local data directory.
///
/// The directory is created when missing so users have a place to drop the
/// file. A missing `.env` is not an error; a malformed one is.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/songapi/.env`
/// - macOS: `~/Library/Application Support/songapi/.env`
/// - Windows: `%LOCALAPPDATA%/songapi/.env`
pub async fn load_env() -> Result<(), String> {
    load_env_file(&env_path()).await
}

/// Loads `path` into the process environment, creating its parent directory.
/// Variables already set in the environment win over the file.
pub async fn load_env_file(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(path).map_err(|e| format!("{}: {}", path.display(), e))
}

/// Log filter from `RUST_LOG`, falling back to `info`.
///
/// Reads the environment at call time, so it must run after [`load_env`] for
/// a `RUST_LOG` in `.env` to apply.
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global tracing subscriber using [`log_filter`].
pub fn init_tracing() {
    tracing_subscriber::fmt().with_env_filter(log_filter()).init();
}

/// Address the HTTP server binds to (`SERVER_ADDRESS`).
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Base URL of a running server, used by the `list` command (`SONGAPI_URL`).
pub fn api_url() -> String {
    env::var("SONGAPI_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("songapi/.env");
    path
}
