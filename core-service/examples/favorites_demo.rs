//! Favorites walkthrough against a JSON store in a temp directory.
//!
//! Run with:
//! ```bash
//! cargo run -p core-service --example favorites_demo
//!
//! # JSON logs
//! cargo run -p core-service --example favorites_demo -- json
//! ```

use anyhow::Context;
use core_library::{Album, Artist, StreamProvider, Track};
use core_runtime::logging::{init_logging, LogFormat, LogLevel, LoggingConfig};
use core_service::{CoreConfig, DownloadSink, FavoritesService};
use std::env;
use std::sync::Arc;
use tracing::info;

/// Download sink that only logs what it would fetch
struct LoggingDownloads;

impl DownloadSink for LoggingDownloads {
    fn enqueue(&self, providers: &[StreamProvider], track: &Track) -> core_library::Result<()> {
        info!(
            track = %track.name,
            providers = providers.len(),
            "Queued favorite for download"
        );
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let format = match env::args().nth(1).as_deref() {
        Some("json") => LogFormat::Json,
        Some("compact") => LogFormat::Compact,
        _ => LogFormat::Pretty,
    };
    init_logging(
        LoggingConfig::default()
            .with_format(format)
            .with_level(LogLevel::Debug),
    )
    .context("initializing logging")?;

    let data_dir = env::temp_dir().join("favorites-demo");
    let config = CoreConfig::builder()
        .data_dir(&data_dir)
        .auto_download_override(true)
        .build()
        .context("building core config")?;
    let service = FavoritesService::new(config, Some(Arc::new(LoggingDownloads)))?;

    service.add_favorite_track(&Track::new("Windowlicker").with_artist("Aphex Twin"))?;
    service.add_favorite_track(&Track::new("windowlicker").with_artist("aphex twin"))?;
    service.bulk_add_favorite_tracks(&[
        Track::new("Roygbiv").with_artist("Boards of Canada"),
        Track::new("Avril 14th").with_artist("Aphex Twin"),
    ])?;
    service.add_favorite_album(&Album::new("Aphex Twin", "Drukqs"))?;
    service.add_favorite_artist(&Artist::new("aphex-twin", "Aphex Twin"))?;

    let action = service.read_favorites()?;
    info!(
        action = action.action_type(),
        tracks = action.payload().tracks.len(),
        albums = action.payload().albums.len(),
        artists = action.payload().artists.len(),
        "Favorites loaded"
    );

    println!("{}", serde_json::to_string_pretty(&action)?);

    std::fs::remove_dir_all(&data_dir).context("cleaning up demo store")?;
    Ok(())
}
