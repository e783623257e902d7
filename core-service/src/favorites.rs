//! Favorites façade consumed by host applications.
//!
//! Every method runs one favorites operation and returns the
//! [`FavoritesAction`] the host's state layer applies to its view state.

use crate::error::Result;
use core_library::{
    Album, Artist, DownloadSink, FavoritesAction, FavoritesRecord, FavoritesStore, Track,
    TrackEquality, TrackNameEquality,
};
use core_runtime::config::{CoreConfig, FeatureFlags};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Host request for a favorites operation.
///
/// Serialized as `{"type": "addTrack", "payload": {...}}` so hosts can send
/// commands over a JSON boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum FavoritesCommand {
    Read,
    AddTrack(Track),
    BulkAddTracks(Vec<Track>),
    RemoveTrack(Track),
    AddAlbum(Album),
    RemoveAlbum(Album),
    AddArtist(Artist),
    RemoveArtist(Artist),
}

/// Primary favorites façade exposed to host applications.
#[derive(Clone)]
pub struct FavoritesService {
    store: Arc<FavoritesStore>,
    features: FeatureFlags,
}

impl FavoritesService {
    /// Create a service over the configured store with name-based track
    /// equality.
    pub fn new(config: CoreConfig, downloads: Option<Arc<dyn DownloadSink>>) -> Result<Self> {
        Self::with_equality(config, downloads, Arc::new(TrackNameEquality))
    }

    /// Create a service with a custom track equality.
    pub fn with_equality(
        config: CoreConfig,
        downloads: Option<Arc<dyn DownloadSink>>,
        equality: Arc<dyn TrackEquality>,
    ) -> Result<Self> {
        config.validate()?;

        let has_download_sink = downloads.is_some();
        let mut store = FavoritesStore::new(Arc::clone(&config.persistent_store))
            .with_equality(equality)
            .with_serialized_writes(config.features.serialize_writes);
        if let Some(sink) = downloads {
            store = store.with_download_sink(sink);
        }

        info!(
            serialize_writes = config.features.serialize_writes,
            auto_download_override = ?config.features.auto_download_favorites_override,
            has_download_sink,
            "Favorites service initialized"
        );

        Ok(Self {
            store: Arc::new(store),
            features: config.features,
        })
    }

    /// Underlying favorites store.
    pub fn store(&self) -> &FavoritesStore {
        &self.store
    }

    pub fn features(&self) -> FeatureFlags {
        self.features
    }

    pub fn read_favorites(&self) -> Result<FavoritesAction> {
        Ok(FavoritesAction::ReadFavorites(self.store.read()?))
    }

    /// Favorite a track. Auto-download follows the configured override when
    /// set, otherwise the persisted `autoDownloadFavourites` setting.
    pub fn add_favorite_track(&self, track: &Track) -> Result<FavoritesAction> {
        let record = match self.features.auto_download_favorites_override {
            Some(enabled) => self.store.add_track_with_setting(track, enabled)?,
            None => self.store.add_favorite_track(track)?,
        };
        Ok(FavoritesAction::AddFavoriteTrack(record))
    }

    pub fn bulk_add_favorite_tracks(&self, tracks: &[Track]) -> Result<FavoritesAction> {
        Ok(FavoritesAction::BulkAddFavoriteTracks(
            self.store.bulk_add_tracks(tracks)?,
        ))
    }

    pub fn remove_favorite_track(&self, track: &Track) -> Result<FavoritesAction> {
        Ok(FavoritesAction::RemoveFavoriteTrack(
            self.store.remove_track(track)?,
        ))
    }

    pub fn add_favorite_album(&self, album: &Album) -> Result<FavoritesAction> {
        Ok(FavoritesAction::AddFavoriteAlbum(self.store.add_album(album)?))
    }

    pub fn remove_favorite_album(&self, album: &Album) -> Result<FavoritesAction> {
        Ok(FavoritesAction::RemoveFavoriteAlbum(
            self.store.remove_album(album)?,
        ))
    }

    pub fn add_favorite_artist(&self, artist: &Artist) -> Result<FavoritesAction> {
        Ok(FavoritesAction::AddFavoriteArtist(
            self.store.add_artist(artist)?,
        ))
    }

    pub fn remove_favorite_artist(&self, artist: &Artist) -> Result<FavoritesAction> {
        Ok(FavoritesAction::RemoveFavoriteArtist(
            self.store.remove_artist(artist)?,
        ))
    }

    /// Whether `track` is currently a favorite under the configured equality.
    pub fn is_favorite_track(&self, track: &Track) -> Result<bool> {
        let record: FavoritesRecord = self.store.read()?;
        Ok(record.contains_track(track, self.store.equality()))
    }

    pub fn is_favorite_album(&self, album: &Album) -> Result<bool> {
        Ok(self.store.read()?.contains_album(album))
    }

    pub fn is_favorite_artist(&self, artist: &Artist) -> Result<bool> {
        Ok(self.store.read()?.contains_artist(artist))
    }

    /// Run `command` and return its action.
    pub fn dispatch(&self, command: FavoritesCommand) -> Result<FavoritesAction> {
        match command {
            FavoritesCommand::Read => self.read_favorites(),
            FavoritesCommand::AddTrack(track) => self.add_favorite_track(&track),
            FavoritesCommand::BulkAddTracks(tracks) => self.bulk_add_favorite_tracks(&tracks),
            FavoritesCommand::RemoveTrack(track) => self.remove_favorite_track(&track),
            FavoritesCommand::AddAlbum(album) => self.add_favorite_album(&album),
            FavoritesCommand::RemoveAlbum(album) => self.remove_favorite_album(&album),
            FavoritesCommand::AddArtist(artist) => self.add_favorite_artist(&artist),
            FavoritesCommand::RemoveArtist(artist) => self.remove_favorite_artist(&artist),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_desktop::MemoryStore;
    use serde_json::json;

    fn service() -> FavoritesService {
        let config = CoreConfig::builder()
            .persistent_store(Arc::new(MemoryStore::new()))
            .build()
            .unwrap();
        FavoritesService::new(config, None).unwrap()
    }

    #[test]
    fn test_each_method_returns_matching_action() {
        let service = service();
        let track = Track::new("Song");
        let album = Album::new("A", "T");
        let artist = Artist::new(1, "n");

        assert_eq!(service.read_favorites().unwrap().action_type(), "READ_FAVORITES");
        assert_eq!(
            service.add_favorite_track(&track).unwrap().action_type(),
            "ADD_FAVORITE_TRACK"
        );
        assert_eq!(
            service
                .bulk_add_favorite_tracks(&[track.clone()])
                .unwrap()
                .action_type(),
            "BULK_ADD_FAVORITE_TRACKS"
        );
        assert_eq!(
            service.remove_favorite_track(&track).unwrap().action_type(),
            "REMOVE_FAVORITE_TRACK"
        );
        assert_eq!(
            service.add_favorite_album(&album).unwrap().action_type(),
            "ADD_FAVORITE_ALBUM"
        );
        assert_eq!(
            service.remove_favorite_album(&album).unwrap().action_type(),
            "REMOVE_FAVORITE_ALBUM"
        );
        assert_eq!(
            service.add_favorite_artist(&artist).unwrap().action_type(),
            "ADD_FAVORITE_ARTIST"
        );
        assert_eq!(
            service.remove_favorite_artist(&artist).unwrap().action_type(),
            "REMOVE_FAVORITE_ARTIST"
        );
    }

    #[test]
    fn test_command_from_json() {
        let command: FavoritesCommand = serde_json::from_value(json!({
            "type": "addAlbum",
            "payload": {"artist": "A", "title": "T"}
        }))
        .unwrap();
        assert_eq!(command, FavoritesCommand::AddAlbum(Album::new("A", "T")));

        let command: FavoritesCommand = serde_json::from_value(json!({"type": "read"})).unwrap();
        assert_eq!(command, FavoritesCommand::Read);
    }

    #[test]
    fn test_is_favorite_queries() {
        let service = service();
        let track = Track::new("Song").with_artist("Band");

        assert!(!service.is_favorite_track(&track).unwrap());
        service.add_favorite_track(&track).unwrap();
        assert!(service.is_favorite_track(&Track::new("song").with_artist("band")).unwrap());

        let album = Album::new("A", "T");
        service.add_favorite_album(&album).unwrap();
        assert!(service.is_favorite_album(&album).unwrap());
        assert!(!service.is_favorite_artist(&Artist::new(1, "n")).unwrap());
    }

    #[test]
    fn test_clones_share_store() {
        let service = service();
        let other = service.clone();

        service.add_favorite_album(&Album::new("A", "T")).unwrap();
        let action = other.read_favorites().unwrap();
        assert_eq!(action.payload().albums.len(), 1);
    }

    #[test]
    fn test_store_and_features_reflect_config() {
        let config = CoreConfig::builder()
            .persistent_store(Arc::new(MemoryStore::with_entries(vec![(
                "StreamProvider",
                json!([{"name": "yt", "sourceName": "YouTube"}]),
            )])))
            .auto_download_override(false)
            .serialize_writes(false)
            .build()
            .unwrap();
        let service = FavoritesService::new(config, None).unwrap();

        let features = service.features();
        assert_eq!(features.auto_download_favorites_override, Some(false));
        assert!(!features.serialize_writes);

        let providers = service.store().stream_providers().unwrap();
        assert_eq!(providers.len(), 1);
        assert_eq!(providers[0].source_name.as_deref(), Some("YouTube"));
    }
}
