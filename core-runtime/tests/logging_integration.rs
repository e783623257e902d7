//! Integration tests for logging system

use core_runtime::logging::{init_logging, strip_path, LogFormat, LogLevel, LoggingConfig};
use core_runtime::Error;
use tracing::{debug, info, warn};

#[test]
fn test_logging_initializes_once() {
    // A subscriber can only be installed once per process
    let config = LoggingConfig::default()
        .with_format(LogFormat::Compact)
        .with_level(LogLevel::Debug)
        .with_spans(false);

    init_logging(config.clone()).unwrap();

    info!(file = %strip_path("/home/user/.config/app/config.json"), "Opened store");
    debug!(operation = "add_track", tracks = 1, "Favorites updated");
    warn!("Failed to enqueue favorite for download: queue full");

    let err = init_logging(config).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().contains("Failed to initialize logging"));
}

#[test]
fn test_path_stripping() {
    // Unix paths
    assert_eq!(strip_path("/home/user/.config/app/config.json"), "config.json");

    // Windows paths
    assert_eq!(
        strip_path("C:\\Users\\John\\AppData\\Roaming\\app\\config.json"),
        "config.json"
    );

    // Already basename
    assert_eq!(strip_path("config.json"), "config.json");

    // Edge cases
    assert_eq!(strip_path("/var/log/"), "");
    assert_eq!(strip_path(""), "");
}

#[test]
fn test_format_selection() {
    // Debug builds should default to Pretty
    #[cfg(debug_assertions)]
    {
        let config = LoggingConfig::default();
        assert_eq!(config.format, LogFormat::Pretty);
    }

    // Release builds should default to JSON
    #[cfg(not(debug_assertions))]
    {
        let config = LoggingConfig::default();
        assert_eq!(config.format, LogFormat::Json);
    }
}

#[test]
fn test_invalid_filter_rejected() {
    let config = LoggingConfig::default().with_filter("core_library=notalevel");

    let err = init_logging(config).unwrap_err();
    assert!(err.to_string().contains("Invalid log filter"));
}
