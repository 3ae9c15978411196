//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by Mixcli,
//! implementing authentication, library and playlist retrieval, audio-feature
//! lookup and the recommendation endpoint. It is the only layer that performs
//! HTTP communication; the generation engine and the CLI sit on top of it.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Generator)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 PKCE)
//!     ├── Library Operations (saved tracks, playlists, pagination)
//!     ├── Audio Features (batched lookup)
//!     ├── Recommendations (feature-targeted queries)
//!     └── Playlist Operations (create, add tracks)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - OAuth 2.0 PKCE flow: verifier/challenge generation, browser
//!   launch, local callback server coordination, token exchange and refresh.
//! - [`library`] - paginated retrieval of everything the user already owns:
//!   saved tracks, playlists, and the tracks of each playlist. Page responses
//!   carry `{items, next}`; a lazy [`library::Pager`] follows `next` until
//!   absent.
//! - [`features`] - audio-feature vectors for arbitrary track-id batches,
//!   split into requests whose comma-joined id list stays under the
//!   endpoint's size ceiling.
//! - [`recommendations`] - feature-targeted recommendation requests,
//!   surfacing 429 responses with their `Retry-After` delay so the caller
//!   can back off and retry the same request.
//! - [`playlist`] - creating a private playlist and filling it with track
//!   URIs in batches.
//!
//! ## Error Handling
//!
//! Rate limiting is only recovered on the recommendation endpoint where the
//! generation loop knows how to retry; every other non-success status is
//! propagated as a `reqwest::Error` and treated as fatal by the callers.
//! GET endpoints retry 502 Bad Gateway responses after a short delay, since
//! those are transient on the Spotify side.
//!
//! ## Testability
//!
//! Every function takes the API base URL as a parameter. Production call
//! sites pass [`crate::config::spotify_apiurl`]; integration tests point the
//! same functions at a local mock server.

pub mod auth;
pub mod features;
pub mod library;
pub mod playlist;
pub mod recommendations;
