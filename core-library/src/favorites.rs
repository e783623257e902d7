//! # Favorites Store
//!
//! Maintains the user's favorite tracks, albums and artists as a single
//! record under the `favorites` key of an injected [`PersistentStore`].
//!
//! Every mutation reads the whole record, changes one list and writes the
//! whole record back. When write serialization is enabled (the default) a
//! mutex is held across that read-modify-write so concurrent mutations
//! through the same store never lose each other's updates.
//!
//! Track de-duplication and removal go through a [`TrackEquality`]; the
//! default is [`TrackNameEquality`]. Albums match on `(artist, title)` and
//! artists on `(id, name)`.

use crate::download::DownloadSink;
use crate::equality::{TrackEquality, TrackNameEquality};
use crate::error::Result;
use crate::models::{
    Album, Artist, FavoritesRecord, FavoritesSettings, StreamProvider, Track,
};
use bridge_traits::PersistentStore;
use parking_lot::{Mutex, MutexGuard};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Store key holding the favorites record
pub const FAVORITES_KEY: &str = "favorites";
/// Store key holding the user settings object
pub const SETTINGS_KEY: &str = "settings";
/// Store key holding the registered stream providers
pub const STREAM_PROVIDER_KEY: &str = "StreamProvider";

pub struct FavoritesStore {
    store: Arc<dyn PersistentStore>,
    equality: Arc<dyn TrackEquality>,
    downloads: Option<Arc<dyn DownloadSink>>,
    write_lock: Option<Mutex<()>>,
}

impl FavoritesStore {
    /// Create a store over `store` with name-based track equality, no
    /// download sink and serialized writes.
    pub fn new(store: Arc<dyn PersistentStore>) -> Self {
        Self {
            store,
            equality: Arc::new(TrackNameEquality),
            downloads: None,
            write_lock: Some(Mutex::new(())),
        }
    }

    pub fn with_equality(mut self, equality: Arc<dyn TrackEquality>) -> Self {
        self.equality = equality;
        self
    }

    pub fn with_download_sink(mut self, sink: Arc<dyn DownloadSink>) -> Self {
        self.downloads = Some(sink);
        self
    }

    /// Toggle the mutex around read-modify-write cycles.
    pub fn with_serialized_writes(mut self, enabled: bool) -> Self {
        self.write_lock = enabled.then(|| Mutex::new(()));
        self
    }

    pub fn equality(&self) -> &dyn TrackEquality {
        self.equality.as_ref()
    }

    /// Current favorites record; an absent record reads as empty lists.
    pub fn read(&self) -> Result<FavoritesRecord> {
        let _guard = self.guard();
        self.load()
    }

    /// Favorite `track`, replacing any existing favorite equal to it.
    ///
    /// The persisted copy carries an identity and no `streams`. When
    /// `auto_download` is set, the original track is handed to the download
    /// sink after the record is written.
    pub fn add_track(
        &self,
        track: &Track,
        auto_download: bool,
        providers: &[StreamProvider],
    ) -> Result<FavoritesRecord> {
        let favorite = track.to_favorite();

        let record = self.mutate("add_track", |record| {
            record
                .tracks
                .retain(|existing| !self.equality.tracks_equal(existing, track));
            record.tracks.push(favorite);
        })?;

        if auto_download {
            self.enqueue_download(providers, track);
        }

        Ok(record)
    }

    /// Favorite `track` using the persisted `autoDownloadFavourites` setting
    /// and the persisted stream providers.
    pub fn add_favorite_track(&self, track: &Track) -> Result<FavoritesRecord> {
        let auto_download = self.auto_download_enabled()?;
        self.add_track_with_setting(track, auto_download)
    }

    /// Like [`add_favorite_track`](Self::add_favorite_track) with the
    /// auto-download decision already made. Providers are read only when it
    /// is enabled.
    pub fn add_track_with_setting(
        &self,
        track: &Track,
        auto_download: bool,
    ) -> Result<FavoritesRecord> {
        let providers = if auto_download {
            self.stream_providers()?
        } else {
            Vec::new()
        };

        self.add_track(track, auto_download, &providers)
    }

    /// Merge `tracks` into the favorites.
    ///
    /// The result is existing tracks followed by incoming ones, keeping the
    /// first of any group of equal tracks. Duplicates inside `tracks` collapse
    /// the same way.
    pub fn bulk_add_tracks(&self, tracks: &[Track]) -> Result<FavoritesRecord> {
        self.mutate("bulk_add_tracks", |record| {
            let existing = std::mem::take(&mut record.tracks);
            let mut merged: Vec<Track> = Vec::with_capacity(existing.len() + tracks.len());

            let candidates = existing
                .into_iter()
                .chain(tracks.iter().map(Track::to_favorite));

            for candidate in candidates {
                if !merged
                    .iter()
                    .any(|kept| self.equality.tracks_equal(kept, &candidate))
                {
                    merged.push(candidate);
                }
            }

            record.tracks = merged;
        })
    }

    /// Remove every favorite track equal to `track`.
    pub fn remove_track(&self, track: &Track) -> Result<FavoritesRecord> {
        self.mutate("remove_track", |record| {
            record
                .tracks
                .retain(|existing| !self.equality.tracks_equal(existing, track));
        })
    }

    /// Append `album`. No de-duplication.
    pub fn add_album(&self, album: &Album) -> Result<FavoritesRecord> {
        self.mutate("add_album", |record| {
            record.albums.push(album.clone());
        })
    }

    /// Remove every album with the same artist and title.
    pub fn remove_album(&self, album: &Album) -> Result<FavoritesRecord> {
        self.mutate("remove_album", |record| {
            record.albums.retain(|existing| !existing.same_release(album));
        })
    }

    /// Append the five-field summary of `artist`. No de-duplication.
    pub fn add_artist(&self, artist: &Artist) -> Result<FavoritesRecord> {
        let summary = artist.summary();
        self.mutate("add_artist", |record| {
            record.artists.push(summary);
        })
    }

    /// Remove every artist with the same id and name.
    pub fn remove_artist(&self, artist: &Artist) -> Result<FavoritesRecord> {
        self.mutate("remove_artist", |record| {
            record.artists.retain(|existing| !existing.matches(artist));
        })
    }

    /// Persisted `settings.autoDownloadFavourites`, false when unset.
    pub fn auto_download_enabled(&self) -> Result<bool> {
        let settings: FavoritesSettings = self.read_key(SETTINGS_KEY)?;
        Ok(settings.auto_download_favourites)
    }

    /// Persisted stream providers, empty when unset.
    pub fn stream_providers(&self) -> Result<Vec<StreamProvider>> {
        self.read_key(STREAM_PROVIDER_KEY)
    }

    fn guard(&self) -> Option<MutexGuard<'_, ()>> {
        self.write_lock.as_ref().map(|lock| lock.lock())
    }

    fn load(&self) -> Result<FavoritesRecord> {
        self.read_key(FAVORITES_KEY)
    }

    fn read_key<T>(&self, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        match self.store.get(key)? {
            None | Some(Value::Null) => Ok(T::default()),
            Some(value) => Ok(serde_json::from_value(value)?),
        }
    }

    fn mutate<F>(&self, operation: &'static str, apply: F) -> Result<FavoritesRecord>
    where
        F: FnOnce(&mut FavoritesRecord),
    {
        let _guard = self.guard();

        let mut record = self.load()?;
        apply(&mut record);
        self.store
            .set(FAVORITES_KEY, serde_json::to_value(&record)?)?;

        debug!(
            operation,
            tracks = record.tracks.len(),
            albums = record.albums.len(),
            artists = record.artists.len(),
            "Favorites updated"
        );

        Ok(record)
    }

    fn enqueue_download(&self, providers: &[StreamProvider], track: &Track) {
        match &self.downloads {
            Some(sink) => {
                if let Err(e) = sink.enqueue(providers, track) {
                    warn!(track = %track.name, "Failed to enqueue favorite for download: {}", e);
                }
            }
            None => {
                debug!(track = %track.name, "Auto-download enabled but no download sink configured");
            }
        }
    }
}
