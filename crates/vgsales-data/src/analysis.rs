//! Load-and-summarize pipeline for the vgsales dashboard.
//!
//! Orchestrates dataset loading and headline-figure computation, returning a
//! [`LoadResult`] whose snapshot feeds every aggregation call.

use std::collections::HashSet;
use std::path::Path;

use chrono::Utc;
use vgsales_core::error::Result;
use vgsales_core::models::{Dataset, SaleRecord};

use crate::loader::load_sale_records;

// ── Public types ──────────────────────────────────────────────────────────────

/// Headline figures describing a loaded dataset.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    /// ISO-8601 timestamp when this summary was generated.
    pub generated_at: String,
    /// Total number of records loaded.
    pub record_count: usize,
    /// Number of distinct game titles.
    pub distinct_games: usize,
    /// Number of distinct specific platforms.
    pub distinct_platforms: usize,
    /// Number of distinct platform groups.
    pub distinct_platform_groups: usize,
    /// Number of distinct publishers.
    pub distinct_publishers: usize,
    /// Records whose release year is the non-numeric sentinel.
    pub records_without_year: usize,
    /// Earliest known release year, if any record has one.
    pub first_year: Option<i32>,
    /// Latest known release year, if any record has one.
    pub last_year: Option<i32>,
    /// Sum of all reported global sales, in millions.
    pub total_global_sales: f64,
    /// Wall-clock seconds spent loading and parsing the dataset.
    pub load_time_seconds: f64,
}

/// The complete output of [`load_dataset`].
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Immutable snapshot of the record list.
    pub dataset: Dataset,
    /// Headline figures for the snapshot.
    pub summary: DatasetSummary,
}

// ── Public functions ──────────────────────────────────────────────────────────

/// Run the load pipeline: parse the dataset at `path`, wrap the records in
/// an immutable snapshot, and attach a [`DatasetSummary`].
pub fn load_dataset(path: &Path) -> Result<LoadResult> {
    let load_start = std::time::Instant::now();
    let records = load_sale_records(path)?;
    let load_time = load_start.elapsed().as_secs_f64();

    let summary = summarize(&records, load_time);

    Ok(LoadResult {
        dataset: Dataset::new(records),
        summary,
    })
}

/// Compute headline figures for a record list.
pub fn summarize(records: &[SaleRecord], load_time_seconds: f64) -> DatasetSummary {
    let mut games: HashSet<&str> = HashSet::new();
    let mut platforms: HashSet<&str> = HashSet::new();
    let mut platform_groups: HashSet<&str> = HashSet::new();
    let mut publishers: HashSet<&str> = HashSet::new();

    let mut records_without_year = 0usize;
    let mut first_year: Option<i32> = None;
    let mut last_year: Option<i32> = None;
    let mut total_global_sales = 0.0f64;

    for record in records {
        games.insert(record.name.as_str());
        platforms.insert(record.platform.as_str());
        platform_groups.insert(record.platform_group.as_str());
        publishers.insert(record.publisher.as_str());
        total_global_sales += record.global_sales;

        match record.year.numeric() {
            Some(year) => {
                first_year = Some(first_year.map_or(year, |y| y.min(year)));
                last_year = Some(last_year.map_or(year, |y| y.max(year)));
            }
            None => records_without_year += 1,
        }
    }

    DatasetSummary {
        generated_at: Utc::now().to_rfc3339(),
        record_count: records.len(),
        distinct_games: games.len(),
        distinct_platforms: platforms.len(),
        distinct_platform_groups: platform_groups.len(),
        distinct_publishers: publishers.len(),
        records_without_year,
        first_year,
        last_year,
        total_global_sales,
        load_time_seconds,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
