//! Track equality used for de-duplication and removal.

use crate::models::Track;

/// Decides whether two tracks are the same favorite.
///
/// Implemented for plain closures so callers can swap the matching rule
/// without a dedicated type.
pub trait TrackEquality: Send + Sync {
    fn tracks_equal(&self, a: &Track, b: &Track) -> bool;
}

impl<F> TrackEquality for F
where
    F: Fn(&Track, &Track) -> bool + Send + Sync,
{
    fn tracks_equal(&self, a: &Track, b: &Track) -> bool {
        self(a, b)
    }
}

/// Matches tracks by name and artist name, ignoring case and surrounding
/// whitespace. Identity and provider ids are not compared.
///
/// The case and whitespace folding is this crate's choice of default. Hosts
/// that need exact name matching should inject their own [`TrackEquality`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackNameEquality;

impl TrackEquality for TrackNameEquality {
    fn tracks_equal(&self, a: &Track, b: &Track) -> bool {
        normalize(&a.name) == normalize(&b.name)
            && a.artist_name().map(normalize) == b.artist_name().map(normalize)
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}
