//! Live demo song API.
//!
//! This library implements a small CRUD service over an in-memory collection of
//! songs that all belong to one album. The collection is owned by a
//! [`management::SongManager`] and served over HTTP by an axum router.
//!
//! # Modules
//!
//! - `api` - HTTP handlers and the API error type
//! - `cli` - Command implementations for the `songapi` binary
//! - `config` - Environment and `.env` configuration
//! - `management` - The song collection and its operations
//! - `server` - Router construction and the HTTP serve loop
//! - `types` - Data structures and type definitions
//! - `utils` - Identifier generation and formatting helpers
//!
//! # Example
//!
//! ```
//! use songapi::{management::SongManager, server};
//!
//! #[tokio::main]
//! async fn main() -> songapi::Res<()> {
//!     let addr = "127.0.0.1:8000".parse()?;
//!     server::start_api_server(addr, SongManager::seeded()).await
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod management;
pub mod server;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used by the binary-facing plumbing (server startup, HTTP client calls),
/// where errors are only reported, never matched on. Keeps Send + Sync
/// bounds for async contexts.
///
/// # Example
///
/// ```
/// use songapi::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints a status line prefixed with a blue `o`.
///
/// Takes the same arguments as `println!`.
///
/// ```
/// info!("Serving {} songs", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a line prefixed with a green checkmark once a command completed.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error prefixed with a red `!` to stderr and exits with status 1.
///
/// The expansion diverges, so the macro can stand in for a value in a `match`
/// arm:
///
/// ```
/// let addr = match addr.parse::<SocketAddr>() {
///     Ok(addr) => addr,
///     Err(e) => error!("Failed to parse server address: {}", e),
/// };
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning prefixed with a yellow `!` to stderr. Does not exit.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
