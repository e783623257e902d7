//! Action payloads emitted by favorites operations.
//!
//! Each operation yields the updated record tagged with the action type the
//! UI state reducer listens for. Serialized as `{"type": ..., "payload": ...}`.

use crate::models::FavoritesRecord;
use serde::{Deserialize, Serialize};

pub const READ_FAVORITES: &str = "READ_FAVORITES";
pub const ADD_FAVORITE_TRACK: &str = "ADD_FAVORITE_TRACK";
pub const REMOVE_FAVORITE_TRACK: &str = "REMOVE_FAVORITE_TRACK";
pub const BULK_ADD_FAVORITE_TRACKS: &str = "BULK_ADD_FAVORITE_TRACKS";
pub const ADD_FAVORITE_ALBUM: &str = "ADD_FAVORITE_ALBUM";
pub const REMOVE_FAVORITE_ALBUM: &str = "REMOVE_FAVORITE_ALBUM";
pub const ADD_FAVORITE_ARTIST: &str = "ADD_FAVORITE_ARTIST";
pub const REMOVE_FAVORITE_ARTIST: &str = "REMOVE_FAVORITE_ARTIST";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FavoritesAction {
    ReadFavorites(FavoritesRecord),
    AddFavoriteTrack(FavoritesRecord),
    RemoveFavoriteTrack(FavoritesRecord),
    BulkAddFavoriteTracks(FavoritesRecord),
    AddFavoriteAlbum(FavoritesRecord),
    RemoveFavoriteAlbum(FavoritesRecord),
    AddFavoriteArtist(FavoritesRecord),
    RemoveFavoriteArtist(FavoritesRecord),
}

impl FavoritesAction {
    pub fn action_type(&self) -> &'static str {
        match self {
            FavoritesAction::ReadFavorites(_) => READ_FAVORITES,
            FavoritesAction::AddFavoriteTrack(_) => ADD_FAVORITE_TRACK,
            FavoritesAction::RemoveFavoriteTrack(_) => REMOVE_FAVORITE_TRACK,
            FavoritesAction::BulkAddFavoriteTracks(_) => BULK_ADD_FAVORITE_TRACKS,
            FavoritesAction::AddFavoriteAlbum(_) => ADD_FAVORITE_ALBUM,
            FavoritesAction::RemoveFavoriteAlbum(_) => REMOVE_FAVORITE_ALBUM,
            FavoritesAction::AddFavoriteArtist(_) => ADD_FAVORITE_ARTIST,
            FavoritesAction::RemoveFavoriteArtist(_) => REMOVE_FAVORITE_ARTIST,
        }
    }

    pub fn payload(&self) -> &FavoritesRecord {
        match self {
            FavoritesAction::ReadFavorites(record)
            | FavoritesAction::AddFavoriteTrack(record)
            | FavoritesAction::RemoveFavoriteTrack(record)
            | FavoritesAction::BulkAddFavoriteTracks(record)
            | FavoritesAction::AddFavoriteAlbum(record)
            | FavoritesAction::RemoveFavoriteAlbum(record)
            | FavoritesAction::AddFavoriteArtist(record)
            | FavoritesAction::RemoveFavoriteArtist(record) => record,
        }
    }

    pub fn into_payload(self) -> FavoritesRecord {
        match self {
            FavoritesAction::ReadFavorites(record)
            | FavoritesAction::AddFavoriteTrack(record)
            | FavoritesAction::RemoveFavoriteTrack(record)
            | FavoritesAction::BulkAddFavoriteTracks(record)
            | FavoritesAction::AddFavoriteAlbum(record)
            | FavoritesAction::RemoveFavoriteAlbum(record)
            | FavoritesAction::AddFavoriteArtist(record)
            | FavoritesAction::RemoveFavoriteArtist(record) => record,
        }
    }
}
