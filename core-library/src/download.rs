use crate::error::Result;
use crate::models::{StreamProvider, Track};

/// Queue that accepts tracks for background download.
///
/// Called after a favorite has been persisted. Implementations should hand
/// the work off and return promptly; the favorites store logs a failed
/// enqueue and carries on.
pub trait DownloadSink: Send + Sync {
    /// Enqueue `track` for download using the registered stream providers.
    ///
    /// `track` is the caller's original track, streams included.
    fn enqueue(&self, providers: &[StreamProvider], track: &Track) -> Result<()>;
}
