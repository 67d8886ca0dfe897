//! Chart-ready aggregations over the raw sale records.
//!
//! Every function is a single pass over the record slice plus a final sort,
//! allocates a fresh result, and never mutates or caches its input. Ranked
//! views sort descending by total with ties keeping first-encounter order;
//! year-indexed views sort ascending by year and skip records whose year is
//! the non-numeric sentinel.

use std::cmp::Ordering;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;
use vgsales_core::models::{Region, SaleRecord};

// ── Derived structures ────────────────────────────────────────────────────────

/// One entry of a ranked-totals view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTotal {
    /// Group label (platform group or publisher).
    pub label: String,
    /// Accumulated global sales, in millions.
    pub sales: f64,
}

/// Per-platform game counts within one platform group.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformGroupGames {
    pub platform_group: String,
    /// Game count per specific platform.
    pub games: BTreeMap<String, u32>,
}

impl PlatformGroupGames {
    /// Sum of all per-platform counts; the sort key of the view.
    pub fn total_games(&self) -> u32 {
        self.games.values().sum()
    }
}

/// Number of distinct titles released in one year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyGameCount {
    pub year: i32,
    pub games: u32,
}

/// The best-selling record of one year.
#[derive(Debug, Clone, Serialize)]
pub struct YearlyBestSeller {
    pub year: i32,
    pub game: SaleRecord,
}

/// Distinct-title counts per allowed platform group within one year.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformYearSeries {
    pub year: i32,
    pub platform_games: BTreeMap<String, u32>,
}

/// Accumulated sales per region for one platform group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalTotals {
    pub japan: f64,
    pub europe: f64,
    pub north_america: f64,
    pub others: f64,
}

impl RegionalTotals {
    fn add_record(&mut self, record: &SaleRecord) {
        self.japan += record.jp_sales;
        self.europe += record.eu_sales;
        self.north_america += record.na_sales;
        self.others += record.other_sales;
    }

    /// The accumulated figure for one region.
    pub fn get(&self, region: Region) -> f64 {
        match region {
            Region::Japan => self.japan,
            Region::Europe => self.europe,
            Region::NorthAmerica => self.north_america,
            Region::Others => self.others,
        }
    }

    /// Sum across all four regions.
    pub fn total(&self) -> f64 {
        self.japan + self.europe + self.north_america + self.others
    }
}

/// Regional sales breakdown for one platform group.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalSales {
    pub platform_group: String,
    pub sales: RegionalTotals,
}

/// The best-selling record of one platform group.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformBestSeller {
    pub platform_group: String,
    pub game: SaleRecord,
}

// ── SalesAggregator ───────────────────────────────────────────────────────────

/// Stateless namespace for the dashboard's aggregation passes.
pub struct SalesAggregator;

impl SalesAggregator {
    /// Global sales totals per platform group, descending.
    pub fn sales_by_platform_group(
        records: &[SaleRecord],
        limit: Option<usize>,
    ) -> Vec<RankedTotal> {
        Self::rank_by_key(records, |r| r.platform_group.as_str(), limit)
    }

    /// Global sales totals per publisher, descending.
    pub fn sales_by_publisher(records: &[SaleRecord], limit: Option<usize>) -> Vec<RankedTotal> {
        Self::rank_by_key(records, |r| r.publisher.as_str(), limit)
    }

    /// Game counts per specific platform, grouped by platform family.
    ///
    /// Groups are ordered descending by their total game count and truncated
    /// to the `limit` top groups.
    pub fn games_by_platform(
        records: &[SaleRecord],
        limit: Option<usize>,
    ) -> Vec<PlatformGroupGames> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<PlatformGroupGames> = Vec::new();

        for record in records {
            let slot = match index.get(record.platform_group.as_str()) {
                Some(&slot) => slot,
                None => {
                    groups.push(PlatformGroupGames {
                        platform_group: record.platform_group.clone(),
                        games: BTreeMap::new(),
                    });
                    index.insert(record.platform_group.as_str(), groups.len() - 1);
                    groups.len() - 1
                }
            };
            *groups[slot].games.entry(record.platform.clone()).or_insert(0) += 1;
        }

        // Stable sort keeps first-encounter order between equal totals.
        groups.sort_by(|a, b| b.total_games().cmp(&a.total_games()));
        truncate(groups, limit)
    }

    /// Distinct titles released per year, ascending by year.
    ///
    /// A `limit` keeps the most recent years, not the earliest.
    pub fn games_by_year(records: &[SaleRecord], limit: Option<usize>) -> Vec<YearlyGameCount> {
        let mut titles: BTreeMap<i32, HashSet<&str>> = BTreeMap::new();

        for record in records {
            let Some(year) = record.year.numeric() else {
                continue;
            };
            titles.entry(year).or_default().insert(record.name.as_str());
        }

        let counts: Vec<YearlyGameCount> = titles
            .into_iter()
            .map(|(year, names)| YearlyGameCount {
                year,
                games: names.len() as u32,
            })
            .collect();

        keep_most_recent(counts, limit)
    }

    /// The top-grossing record of each year, ascending by year.
    ///
    /// Comparison is strictly greater-than, so the first record encountered
    /// wins ties. A `limit` keeps the most recent years.
    pub fn best_seller_by_year(
        records: &[SaleRecord],
        limit: Option<usize>,
    ) -> Vec<YearlyBestSeller> {
        let mut best: BTreeMap<i32, &SaleRecord> = BTreeMap::new();

        for record in records {
            let Some(year) = record.year.numeric() else {
                continue;
            };
            match best.entry(year) {
                Entry::Vacant(slot) => {
                    slot.insert(record);
                }
                Entry::Occupied(mut slot) => {
                    if record.global_sales > slot.get().global_sales {
                        slot.insert(record);
                    }
                }
            }
        }

        let sellers: Vec<YearlyBestSeller> = best
            .into_iter()
            .map(|(year, game)| YearlyBestSeller {
                year,
                game: game.clone(),
            })
            .collect();

        keep_most_recent(sellers, limit)
    }

    /// Distinct titles per allowed platform group, per year, ascending.
    ///
    /// Records outside the `platform_groups` allow-list are skipped (an
    /// empty allow-list means all groups), as are records without a numeric
    /// year. A `limit` keeps the most recent years.
    pub fn games_on_platform_by_year(
        records: &[SaleRecord],
        platform_groups: &[String],
        limit: Option<usize>,
    ) -> Vec<PlatformYearSeries> {
        let mut titles: BTreeMap<i32, BTreeMap<&str, HashSet<&str>>> = BTreeMap::new();

        for record in records {
            let Some(year) = record.year.numeric() else {
                continue;
            };
            if !platform_groups.is_empty()
                && !platform_groups.iter().any(|g| g == &record.platform_group)
            {
                continue;
            }
            titles
                .entry(year)
                .or_default()
                .entry(record.platform_group.as_str())
                .or_default()
                .insert(record.name.as_str());
        }

        let series: Vec<PlatformYearSeries> = titles
            .into_iter()
            .map(|(year, groups)| PlatformYearSeries {
                year,
                platform_games: groups
                    .into_iter()
                    .map(|(group, names)| (group.to_string(), names.len() as u32))
                    .collect(),
            })
            .collect();

        keep_most_recent(series, limit)
    }

    /// Regional sales totals per platform group, alphabetical by group.
    ///
    /// An empty `platform_groups` allow-list means all groups. All four
    /// regional accumulators start at zero for a newly seen group.
    pub fn regional_sales_by_platform_group(
        records: &[SaleRecord],
        platform_groups: &[String],
    ) -> Vec<RegionalSales> {
        let mut totals: BTreeMap<&str, RegionalTotals> = BTreeMap::new();

        for record in records {
            if !platform_groups.is_empty()
                && !platform_groups.iter().any(|g| g == &record.platform_group)
            {
                continue;
            }
            totals
                .entry(record.platform_group.as_str())
                .or_default()
                .add_record(record);
        }

        // BTreeMap iteration yields the contract's alphabetical ordering.
        totals
            .into_iter()
            .map(|(group, sales)| RegionalSales {
                platform_group: group.to_string(),
                sales,
            })
            .collect()
    }

    /// The top-grossing record of each platform group, alphabetical by group.
    ///
    /// Comparison is strictly greater-than: the first record encountered wins
    /// ties.
    pub fn best_seller_by_platform_group(
        records: &[SaleRecord],
        limit: Option<usize>,
    ) -> Vec<PlatformBestSeller> {
        let mut best: BTreeMap<&str, &SaleRecord> = BTreeMap::new();

        for record in records {
            match best.entry(record.platform_group.as_str()) {
                Entry::Vacant(slot) => {
                    slot.insert(record);
                }
                Entry::Occupied(mut slot) => {
                    if record.global_sales > slot.get().global_sales {
                        slot.insert(record);
                    }
                }
            }
        }

        let sellers: Vec<PlatformBestSeller> = best
            .into_iter()
            .map(|(group, game)| PlatformBestSeller {
                platform_group: group.to_string(),
                game: game.clone(),
            })
            .collect();

        truncate(sellers, limit)
    }

    // ── Private ───────────────────────────────────────────────────────────────

    /// Generic ranking driver.
    ///
    /// Accumulates `global_sales` per key with a direct map lookup, keeping
    /// accumulators in first-seen order so the stable descending sort leaves
    /// equal totals in encounter order.
    fn rank_by_key<'a, F>(
        records: &'a [SaleRecord],
        key_fn: F,
        limit: Option<usize>,
    ) -> Vec<RankedTotal>
    where
        F: Fn(&'a SaleRecord) -> &'a str,
    {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut totals: Vec<RankedTotal> = Vec::new();

        for record in records {
            let key = key_fn(record);
            let slot = match index.get(key) {
                Some(&slot) => slot,
                None => {
                    totals.push(RankedTotal {
                        label: key.to_string(),
                        sales: 0.0,
                    });
                    index.insert(key, totals.len() - 1);
                    totals.len() - 1
                }
            };
            totals[slot].sales += record.global_sales;
        }

        totals.sort_by(|a, b| b.sales.partial_cmp(&a.sales).unwrap_or(Ordering::Equal));
        truncate(totals, limit)
    }
}

// ── Result-limit helpers ──────────────────────────────────────────────────────

/// Keep at most the first `limit` entries; `None` means no truncation.
fn truncate<T>(mut items: Vec<T>, limit: Option<usize>) -> Vec<T> {
    if let Some(limit) = limit {
        items.truncate(limit);
    }
    items
}

/// Keep the `limit` most recent entries of an ascending-by-year sequence.
fn keep_most_recent<T>(mut items: Vec<T>, limit: Option<usize>) -> Vec<T> {
    if let Some(limit) = limit {
        if items.len() > limit {
            items.drain(..items.len() - limit);
        }
    }
    items
}

// ── Tests ─────────────────────────────────────────────────────────────────────
