//! Etsy Open API proxy library
//!
//! This library backs a small HTTP server that forwards calls to the Etsy Open
//! API v3 and completes the OAuth 2.0 authorization-code (PKCE) token exchange
//! on behalf of a local client.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the four public routes
//! - `cli` - Command implementations behind the `etsyproxy` binary
//! - `config` - Environment, `.env` and secrets-file configuration
//! - `etsy` - Outbound client for the Etsy Open API
//! - `server` - Router construction and the listener loop
//! - `types` - Credentials, token request bodies and upstream outcomes
//! - `utils` - PKCE helpers
//! - `views` - Handlebars view rendering
//!
//! # Example
//!
//! ```
//! use etsyproxy::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> etsyproxy::Res<()> {
//!     config::load_env().await?;
//!     let config = config::load(&config::Overrides::default()).await?;
//!     server::start_api_server(config).await
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod etsy;
pub mod server;
pub mod types;
pub mod utils;
pub mod views;

/// A convenient Result type alias for operations that may fail.
///
/// Used for startup plumbing where the concrete error type does not matter
/// to the caller. Keeps `Send + Sync` bounds for async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening at http://{}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for fatal startup failures. Request handlers never call it;
/// they turn failures into responses instead.
///
/// # Example
///
/// ```
/// error!("Cannot load configuration: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable problems such as a failed upstream call or a
/// missing views directory.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
