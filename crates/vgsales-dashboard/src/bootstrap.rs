use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive.
/// Falls back to `"info"` if the level string is not recognised. All output
/// goes to stderr so stdout stays reserved for the JSON payload.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    let upper = log_level.to_uppercase();
    let normalised = match upper.as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" => "error",
        other => other,
    };

    let filter = EnvFilter::try_new(normalised).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();

    Ok(())
}

// ── Data-path discovery ────────────────────────────────────────────────────────

/// Attempt to locate the sales dataset on the local system.
///
/// Checks the following paths in order and returns the first that exists:
/// 1. `./data/vgsales.json` (the bundled page resource)
/// 2. `./data/`
/// 3. `~/.vgsales-dashboard/data/`
///
/// Returns `None` when none of them exist.
pub fn discover_data_path() -> Option<PathBuf> {
    discover_data_path_in(Path::new("."), dirs::home_dir().as_deref())
}

/// Data-path discovery with explicit roots (used for testing).
pub fn discover_data_path_in(base_dir: &Path, home_dir: Option<&Path>) -> Option<PathBuf> {
    let mut candidates = vec![
        base_dir.join("data").join("vgsales.json"),
        base_dir.join("data"),
    ];
    if let Some(home) = home_dir {
        candidates.push(home.join(".vgsales-dashboard").join("data"));
    }
    candidates.into_iter().find(|p| p.exists())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
