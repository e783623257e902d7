//! Domain models for the favorites collection
//!
//! Tracks, albums and artists arrive from many providers with fields the core
//! does not know about. Every model keeps its known fields typed and carries
//! the rest in a flattened JSON map, so what goes into the store comes back
//! out unchanged.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;
use uuid::Uuid;

// =============================================================================
// ID Types
// =============================================================================

/// Provider-assigned identifier
///
/// Numbers keep their JSON representation (floats and values past `i64`
/// included); anything else a provider stored is carried as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(Number),
    Text(String),
    Other(Value),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => write!(f, "{}", s),
            ItemId::Other(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        ItemId::Number(value.into())
    }
}

impl From<i32> for ItemId {
    fn from(value: i32) -> Self {
        ItemId::Number(value.into())
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId::Text(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        ItemId::Text(value)
    }
}

// =============================================================================
// Domain Models
// =============================================================================

/// Artist credit on a track: a bare name, an object with a `name`, or some
/// other shape kept verbatim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrackArtist {
    Name(String),
    Credit {
        name: String,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
    Other(Value),
}

impl TrackArtist {
    /// Credited name; empty when the credit carries none
    pub fn name(&self) -> &str {
        match self {
            TrackArtist::Name(name) => name,
            TrackArtist::Credit { name, .. } => name,
            TrackArtist::Other(_) => "",
        }
    }
}

/// Track as handed to the favorites store
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Track {
    /// Identity assigned before persistence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Provider identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    /// Track title
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Track artist
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<TrackArtist>,
    /// Resolved playback streams; never persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streams: Option<Vec<Value>>,
    /// Any other provider fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Track {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(TrackArtist::Name(artist.into()));
        self
    }

    pub fn with_id(mut self, id: impl Into<ItemId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Artist name, whichever shape the credit has
    pub fn artist_name(&self) -> Option<&str> {
        self.artist.as_ref().map(TrackArtist::name)
    }

    pub fn has_identity(&self) -> bool {
        self.uuid.as_deref().is_some_and(|u| !u.trim().is_empty())
    }

    /// Assign a fresh identity if the track has none
    pub fn ensure_identity(&mut self) {
        if !self.has_identity() {
            self.uuid = Some(Uuid::new_v4().to_string());
        }
    }

    /// Persisted shape of this track: identity assigned, streams dropped
    pub fn to_favorite(&self) -> Track {
        let mut favorite = self.clone();
        favorite.ensure_identity();
        favorite.streams = None;
        favorite
    }
}

/// Album as handed to the favorites store
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Album {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Album {
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: Some(artist.into()),
            title: Some(title.into()),
            extra: Map::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Albums are the same release when artist and title both match
    pub fn same_release(&self, other: &Album) -> bool {
        self.artist == other.artist && self.title == other.title
    }
}

/// Full artist as provided by a metadata source
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Artist {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Project to the five fields kept in favorites
    pub fn summary(&self) -> ArtistSummary {
        ArtistSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            source: self.source.clone(),
            cover_image: self.cover_image.clone(),
            thumb: self.thumb.clone(),
        }
    }
}

/// Artist as persisted in favorites
///
/// Unknown fields are dropped on read, so a stored summary never grows beyond
/// these five.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
}

impl ArtistSummary {
    /// Identity match on `(id, name)`
    pub fn matches(&self, artist: &Artist) -> bool {
        self.id == artist.id && self.name == artist.name
    }
}

/// Registered stream provider handle
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamProvider {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StreamProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// The subset of user settings the favorites store reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesSettings {
    #[serde(default, deserialize_with = "null_as_default")]
    pub auto_download_favourites: bool,
}

/// Persisted favorites aggregate
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FavoritesRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub tracks: Vec<Track>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub albums: Vec<Album>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artists: Vec<ArtistSummary>,
    /// Fields written by other versions of the application
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FavoritesRecord {
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty() && self.albums.is_empty() && self.artists.is_empty()
    }

    /// Total number of favorited items across all three lists
    pub fn total_items(&self) -> usize {
        self.tracks.len() + self.albums.len() + self.artists.len()
    }

    pub fn contains_track(
        &self,
        track: &Track,
        equality: &dyn crate::equality::TrackEquality,
    ) -> bool {
        self.tracks.iter().any(|t| equality.tracks_equal(t, track))
    }

    pub fn contains_album(&self, album: &Album) -> bool {
        self.albums.iter().any(|a| a.same_release(album))
    }

    pub fn contains_artist(&self, artist: &Artist) -> bool {
        self.artists.iter().any(|a| a.matches(artist))
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_track_preserves_unknown_fields() {
        let raw = json!({
            "id": "t1",
            "name": "Song",
            "artist": {"name": "Band", "mbid": "x"},
            "thumbnail": "thumb.png",
            "duration": 215
        });

        let track: Track = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(track.id, Some(ItemId::from("t1")));
        assert_eq!(track.artist_name(), Some("Band"));
        assert_eq!(track.extra.get("thumbnail"), Some(&json!("thumb.png")));

        assert_eq!(serde_json::to_value(&track).unwrap(), raw);
    }

    #[test]
    fn test_track_artist_as_string() {
        let track: Track = serde_json::from_value(json!({"name": "Song", "artist": "Band"})).unwrap();
        assert_eq!(track.artist, Some(TrackArtist::Name("Band".to_string())));
        assert_eq!(track.artist_name(), Some("Band"));
    }

    #[test]
    fn test_to_favorite_strips_streams_and_assigns_identity() {
        let track = Track::new("Song")
            .with_artist("Band")
            .with_field("thumbnail", json!("t.png"));
        let mut with_streams = track.clone();
        with_streams.streams = Some(vec![json!({"source": "yt", "stream": "http://x"})]);

        let favorite = with_streams.to_favorite();
        assert!(favorite.streams.is_none());
        assert!(favorite.has_identity());
        assert_eq!(favorite.extra.get("thumbnail"), Some(&json!("t.png")));

        let value = serde_json::to_value(&favorite).unwrap();
        assert!(value.get("streams").is_none());
        assert!(value.get("uuid").is_some());
    }

    #[test]
    fn test_ensure_identity_keeps_existing() {
        let mut track = Track::new("Song");
        track.uuid = Some("keep-me".to_string());
        track.ensure_identity();
        assert_eq!(track.uuid.as_deref(), Some("keep-me"));

        let mut blank = Track::new("Song");
        blank.uuid = Some("  ".to_string());
        blank.ensure_identity();
        assert_ne!(blank.uuid.as_deref(), Some("  "));
        assert!(blank.has_identity());
    }

    #[test]
    fn test_artist_summary_projection() {
        let artist: Artist = serde_json::from_value(json!({
            "id": 1,
            "name": "n",
            "extra": "x",
            "source": "s",
            "coverImage": "c",
            "thumb": "t"
        }))
        .unwrap();

        let value = serde_json::to_value(artist.summary()).unwrap();
        assert_eq!(
            value,
            json!({"id": 1, "name": "n", "source": "s", "coverImage": "c", "thumb": "t"})
        );
    }

    #[test]
    fn test_artist_summary_drops_unknown_fields_on_read() {
        let summary: ArtistSummary =
            serde_json::from_value(json!({"id": "a1", "name": "n", "bio": "long"})).unwrap();
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value, json!({"id": "a1", "name": "n"}));
    }

    #[test]
    fn test_artist_summary_matches_on_id_and_name() {
        let artist = Artist::new(7, "Name");
        let summary = artist.summary();
        assert!(summary.matches(&artist));
        assert!(!summary.matches(&Artist::new(7, "Other")));
        assert!(!summary.matches(&Artist::new(8, "Name")));
    }

    #[test]
    fn test_album_same_release() {
        let album = Album::new("Artist", "Title").with_field("year", json!(1999));
        assert!(album.same_release(&Album::new("Artist", "Title")));
        assert!(!album.same_release(&Album::new("Artist", "Other")));
        assert!(!album.same_release(&Album::new("Other", "Title")));
    }

    #[test]
    fn test_record_defaults_missing_and_null_lists() {
        let record: FavoritesRecord =
            serde_json::from_value(json!({"tracks": [{"name": "A"}], "artists": null})).unwrap();
        assert_eq!(record.tracks.len(), 1);
        assert!(record.albums.is_empty());
        assert!(record.artists.is_empty());
    }

    #[test]
    fn test_record_keeps_foreign_fields() {
        let raw = json!({"tracks": [], "albums": [], "artists": [], "playlists": ["p"]});
        let record: FavoritesRecord = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&record).unwrap(), raw);
    }

    #[test]
    fn test_record_counts() {
        let mut record = FavoritesRecord::default();
        assert!(record.is_empty());

        record.tracks.push(Track::new("A"));
        record.albums.push(Album::new("X", "Y"));
        assert!(!record.is_empty());
        assert_eq!(record.total_items(), 2);
        assert!(record.contains_album(&Album::new("X", "Y")));
        assert!(!record.contains_artist(&Artist::new(1, "n")));
    }

    #[test]
    fn test_settings_defaults() {
        let settings: FavoritesSettings = serde_json::from_value(json!({"theme": "dark"})).unwrap();
        assert!(!settings.auto_download_favourites);

        let settings: FavoritesSettings =
            serde_json::from_value(json!({"autoDownloadFavourites": true})).unwrap();
        assert!(settings.auto_download_favourites);
    }

    #[test]
    fn test_item_id_display() {
        assert_eq!(ItemId::from(42).to_string(), "42");
        assert_eq!(ItemId::from("abc").to_string(), "abc");
        assert_eq!(
            serde_json::from_value::<ItemId>(json!(42)).unwrap(),
            ItemId::from(42)
        );
    }

    #[test]
    fn test_item_id_accepts_any_json_number() {
        let float: ItemId = serde_json::from_value(json!(1.5)).unwrap();
        assert_eq!(float.to_string(), "1.5");

        let large: ItemId = serde_json::from_value(json!(u64::MAX)).unwrap();
        assert_eq!(large.to_string(), u64::MAX.to_string());

        let odd: ItemId = serde_json::from_value(json!(true)).unwrap();
        assert_eq!(odd, ItemId::Other(json!(true)));
        assert_eq!(serde_json::to_value(&odd).unwrap(), json!(true));
    }

    #[test]
    fn test_null_names_read_as_empty() {
        let track: Track = serde_json::from_value(json!({"name": null})).unwrap();
        assert_eq!(track.name, "");

        let summary: ArtistSummary =
            serde_json::from_value(json!({"id": 1, "name": null})).unwrap();
        assert_eq!(summary.name, "");

        let artist: Artist = serde_json::from_value(json!({"name": null})).unwrap();
        assert_eq!(artist.name, "");
    }

    #[test]
    fn test_track_artist_without_name_is_kept() {
        let raw = json!({"name": "Song", "artist": {"id": 3}});
        let track: Track = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(track.artist, Some(TrackArtist::Other(json!({"id": 3}))));
        assert_eq!(track.artist_name(), Some(""));
        assert_eq!(serde_json::to_value(&track).unwrap(), raw);
    }
}
