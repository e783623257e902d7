//! # Favorites Library Module
//!
//! Owns the favorites record and the rules for changing it.
//!
//! ## Overview
//!
//! This module manages:
//! - Domain models for tracks, albums, artists and the favorites record
//! - Track equality used for de-duplication
//! - The `FavoritesStore` read-modify-write cycle over a `PersistentStore`
//! - Action payloads handed to the UI state layer
//! - The download sink port used for auto-downloading favorites

pub mod actions;
pub mod download;
pub mod equality;
pub mod error;
pub mod favorites;
pub mod models;

pub use actions::FavoritesAction;
pub use download::DownloadSink;
pub use equality::{TrackEquality, TrackNameEquality};
pub use error::{LibraryError, Result};
pub use favorites::{FavoritesStore, FAVORITES_KEY, SETTINGS_KEY, STREAM_PROVIDER_KEY};
pub use models::{
    Album, Artist, ArtistSummary, FavoritesRecord, FavoritesSettings, ItemId, StreamProvider,
    Track, TrackArtist,
};
