//! # CLI Module
//!
//! This module provides the command-line interface layer for Mixcli, a
//! Spotify API client that generates recommendation playlists from the
//! tracks of an existing playlist. It implements all user-facing commands
//! and coordinates between the Spotify integration, the generation engine,
//! and the persistence layer.
//!
//! ## Commands
//!
//! ### Authentication
//!
//! - [`auth`] - Initiates the Spotify OAuth authentication flow with PKCE
//!
//! ### Browsing
//!
//! - [`list_playlists`] - Displays the user's playlists as a table
//! - [`list_tracks`] - Displays the tracks of one playlist
//!
//! ### Generation
//!
//! - [`generate`] - Runs the generation engine seeded by a playlist's
//!   tracks, prints the result, and stores it in the local session
//! - [`save`] - Creates a Spotify playlist from the last generated session
//!   and clears the session
//!
//! ## Architecture Design
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Generator / Management Layer
//!     ↓
//! API Layer (Spotify Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! Each command delegates to the generator, management, and spotify modules
//! while handling user interaction, progress feedback via `indicatif`
//! spinners, and error presentation through the output macros. Fatal
//! failures exit the process with the `error!` macro; recoverable issues
//! are reported with `warning!` and the command continues where useful.
//!
//! ## Typical Session
//!
//! ```bash
//! mixcli auth                          # Authenticate with Spotify
//! mixcli playlists                     # Pick a seed playlist
//! mixcli tracks 37i9dQZF1DXcBWIGoYBM5M # Inspect its tracks
//! mixcli generate 37i9dQZF1DXcBWIGoYBM5M --length 30
//! mixcli save "Monday Mix"             # Accept and save the result
//! ```

mod auth;
mod generate;
mod playlists;
mod save;

pub use auth::auth;
pub use generate::generate;
pub use playlists::list_playlists;
pub use playlists::list_tracks;
pub use save::save;
