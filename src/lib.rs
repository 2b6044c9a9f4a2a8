//! MusicBingo - client and front-end support for the MusicBingo game
//!
//! This library fetches playlists, artists, albums and tracks from the
//! MusicBingo backend, holds the site's static metadata and bootstraps the
//! localized message catalogs.

/// Client modules for interacting with the MusicBingo backend
pub mod clients;
/// Error types and result aliases
pub mod errors;
/// Static site configuration
pub mod config;
/// Locale setup and message catalogs
pub mod locale;

pub use errors::{Error, Result};
