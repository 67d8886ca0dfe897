//! Dataset discovery and loading for the vgsales dashboard.
//!
//! Reads the JSON sales dataset from disk and converts it into
//! [`SaleRecord`] structs for downstream aggregation. A load failure
//! propagates to the caller unrecovered: there is no retry and no partial
//! load.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use vgsales_core::error::{DashboardError, Result};
use vgsales_core::models::SaleRecord;

// ── Public API ────────────────────────────────────────────────────────────────

/// Find all `.json` files recursively under `data_path`, sorted by path.
pub fn find_dataset_files(data_path: &Path) -> Vec<PathBuf> {
    if !data_path.exists() {
        warn!("Data path does not exist: {}", data_path.display());
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(data_path)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .map(|ext| ext == "json")
                    .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// Load and parse the sales dataset into [`SaleRecord`] objects.
///
/// `path` may name a single JSON file (an array of record objects) or a
/// directory, in which case every discovered `.json` file is parsed and the
/// record lists are concatenated in path order.
///
/// Any I/O or parse failure aborts the whole load.
pub fn load_sale_records(path: &Path) -> Result<Vec<SaleRecord>> {
    if path.is_file() {
        return parse_dataset_file(path);
    }

    if !path.is_dir() {
        return Err(DashboardError::DataPathNotFound(path.to_path_buf()));
    }

    let files = find_dataset_files(path);
    if files.is_empty() {
        return Err(DashboardError::NoDataFiles(path.to_path_buf()));
    }

    let mut all_records: Vec<SaleRecord> = Vec::new();
    for file_path in &files {
        all_records.extend(parse_dataset_file(file_path)?);
    }

    debug!(
        "Loaded {} records from {} files",
        all_records.len(),
        files.len()
    );

    Ok(all_records)
}

/// Resolve the data path: use `data_path` when given, otherwise fall back to
/// the conventional `./data` directory next to the page assets.
pub fn resolve_data_path(data_path: Option<&str>) -> PathBuf {
    match data_path {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from("data"),
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Parse a single dataset file as a JSON array of sale records.
fn parse_dataset_file(path: &Path) -> Result<Vec<SaleRecord>> {
    let content = std::fs::read_to_string(path).map_err(|source| DashboardError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<SaleRecord> = serde_json::from_str(&content)?;

    debug!("Parsed {} records from {}", records.len(), path.display());

    Ok(records)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
