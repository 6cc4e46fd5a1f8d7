//! # CLI Module
//!
//! Command implementations behind the `etsyproxy` binary. `main.rs` parses
//! the arguments with clap and dispatches here.
//!
//! - [`serve`] - loads the configuration and runs the HTTP server
//! - [`auth_url`] - prints the Etsy consent URL for the configured client
//! - [`verifier`] - generates a new PKCE code verifier and its challenge
//!
//! Fatal problems (bad configuration, a port already in use) end the process
//! through the crate's `error!` macro.

mod auth;
mod serve;

pub use auth::{auth_url, verifier};
pub use serve::serve;
