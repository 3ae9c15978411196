//! # API Module
//!
//! HTTP endpoints of the local callback server used during authentication.
//!
//! ## Endpoints
//!
//! - [`callback`] - Handles OAuth callback requests from Spotify's
//!   authorization server, completing the PKCE flow by exchanging the
//!   authorization code for an access token.
//! - [`health`] - Health check returning application status and version.
//!
//! The module is built on [Axum](https://docs.rs/axum); each endpoint is an
//! async handler wired up in [`crate::server`]. The callback shares PKCE
//! state with the initiating auth command through an `Arc<Mutex<...>>`
//! extension.

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
