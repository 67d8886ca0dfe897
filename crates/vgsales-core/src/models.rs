use serde::{Deserialize, Deserializer, Serialize};

/// The release-year column of the source dataset.
///
/// The source data stores years as JSON numbers but uses the literal string
/// `"N/A"` for unknown years, and some exports carry numeric years as
/// strings. Both arrive intact; [`YearField::numeric`] applies the loose
/// numeric test the dashboard runs before every time-indexed view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YearField {
    /// A year that arrived as a JSON number.
    Numeric(f64),
    /// A string value, either a numeric year or the `"N/A"` sentinel.
    Text(String),
}

impl Default for YearField {
    fn default() -> Self {
        YearField::Text("N/A".to_string())
    }
}

impl YearField {
    /// The year as an integer, or `None` for the non-numeric sentinel.
    ///
    /// Numeric strings such as `"2009"` resolve; records for which this
    /// returns `None` are excluded from every year-indexed aggregation but
    /// still count toward platform, publisher and regional views.
    pub fn numeric(&self) -> Option<i32> {
        match self {
            YearField::Numeric(y) if y.is_finite() => Some(*y as i32),
            YearField::Numeric(_) => None,
            YearField::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// A single sales row of the source dataset.
///
/// Field names map onto the dataset's column headers. Sales figures are in
/// millions of units; `global_sales` is a reported figure of its own and is
/// not guaranteed to equal the sum of the four regional columns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Game title. Not unique: multi-platform releases repeat the title.
    #[serde(rename = "Name", default)]
    pub name: String,
    /// Specific hardware platform, e.g. `"PS4"`.
    #[serde(rename = "Platform", default)]
    pub platform: String,
    /// Coarse platform family, e.g. `"PlayStation"`. The primary grouping key.
    #[serde(rename = "Platform Group", default)]
    pub platform_group: String,
    /// Release year, possibly the `"N/A"` sentinel.
    #[serde(rename = "Year", default)]
    pub year: YearField,
    /// Publishing company.
    #[serde(rename = "Publisher", default)]
    pub publisher: String,
    /// Worldwide copies sold, in millions.
    #[serde(rename = "Global_Sales", default, deserialize_with = "lenient_sales")]
    pub global_sales: f64,
    /// North America copies sold, in millions.
    #[serde(rename = "NA_Sales", default, deserialize_with = "lenient_sales")]
    pub na_sales: f64,
    /// Europe copies sold, in millions.
    #[serde(rename = "EU_Sales", default, deserialize_with = "lenient_sales")]
    pub eu_sales: f64,
    /// Japan copies sold, in millions.
    #[serde(rename = "JP_Sales", default, deserialize_with = "lenient_sales")]
    pub jp_sales: f64,
    /// Copies sold everywhere else, in millions.
    #[serde(rename = "Other_Sales", default, deserialize_with = "lenient_sales")]
    pub other_sales: f64,
}

/// Deserialize a sales figure, coercing anything non-numeric to `0.0`.
///
/// The dataset is assumed externally validated; rather than letting a stray
/// string or null poison downstream sums with NaN, malformed figures
/// contribute nothing.
fn lenient_sales<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

/// One of the four sales regions reported by the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Region {
    Japan,
    Europe,
    NorthAmerica,
    Others,
}

impl Region {
    /// All regions, in the order the stacked regional chart lays them out.
    pub const ALL: [Region; 4] = [
        Region::Japan,
        Region::Europe,
        Region::NorthAmerica,
        Region::Others,
    ];

    /// Legend label used by the rendering layer.
    pub fn display_name(&self) -> &'static str {
        match self {
            Region::Japan => "Japan",
            Region::Europe => "Europe",
            Region::NorthAmerica => "North America",
            Region::Others => "Other Regions",
        }
    }

    /// The record column holding this region's sales figure.
    pub fn sales(&self, record: &SaleRecord) -> f64 {
        match self {
            Region::Japan => record.jp_sales,
            Region::Europe => record.eu_sales,
            Region::NorthAmerica => record.na_sales,
            Region::Others => record.other_sales,
        }
    }
}

/// Immutable snapshot of the full record list.
///
/// Constructed once at load time and shared read-only with every aggregation
/// call; there is no mutation API. Derived views are recomputed from the
/// snapshot on each invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<SaleRecord>,
}

impl Dataset {
    /// Wrap a parsed record list into a snapshot.
    pub fn new(records: Vec<SaleRecord>) -> Self {
        Self { records }
    }

    /// The raw record list.
    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }

    /// Number of records in the snapshot.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` when the snapshot holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── YearField ──────────────────────────────────────────────────────────

    #[test]
    fn test_year_numeric_from_number() {
        let year: YearField = serde_json::from_str("2006").unwrap();
        assert_eq!(year.numeric(), Some(2006));
    }

    #[test]
    fn test_year_numeric_from_numeric_string() {
        let year: YearField = serde_json::from_str(r#""2009""#).unwrap();
        assert_eq!(year.numeric(), Some(2009));
    }

    #[test]
    fn test_year_sentinel_is_none() {
        let year: YearField = serde_json::from_str(r#""N/A""#).unwrap();
        assert_eq!(year.numeric(), None);
    }

    #[test]
    fn test_year_default_is_sentinel() {
        assert_eq!(YearField::default().numeric(), None);
    }

    // ── SaleRecord deserialization ─────────────────────────────────────────

    #[test]
    fn test_record_from_source_row() {
        let json = r#"{
            "Name": "Wii Sports",
            "Platform": "Wii",
            "Platform Group": "Nintendo",
            "Year": 2006,
            "Publisher": "Nintendo",
            "Global_Sales": 82.74,
            "NA_Sales": 41.49,
            "EU_Sales": 29.02,
            "JP_Sales": 3.77,
            "Other_Sales": 8.46
        }"#;
        let record: SaleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Wii Sports");
        assert_eq!(record.platform_group, "Nintendo");
        assert_eq!(record.year.numeric(), Some(2006));
        assert!((record.global_sales - 82.74).abs() < 1e-9);
    }

    #[test]
    fn test_record_missing_fields_default() {
        let record: SaleRecord = serde_json::from_str(r#"{"Name": "Orphan"}"#).unwrap();
        assert_eq!(record.name, "Orphan");
        assert_eq!(record.platform_group, "");
        assert_eq!(record.year.numeric(), None);
        assert_eq!(record.global_sales, 0.0);
        assert_eq!(record.jp_sales, 0.0);
    }

    #[test]
    fn test_record_non_numeric_sales_coerced_to_zero() {
        let json = r#"{"Name": "Bad Row", "Global_Sales": "oops", "NA_Sales": null}"#;
        let record: SaleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.global_sales, 0.0);
        assert_eq!(record.na_sales, 0.0);
    }

    #[test]
    fn test_record_sales_from_numeric_string() {
        let json = r#"{"Name": "Stringly", "Global_Sales": "1.5"}"#;
        let record: SaleRecord = serde_json::from_str(json).unwrap();
        assert!((record.global_sales - 1.5).abs() < 1e-9);
    }

    // ── Region ─────────────────────────────────────────────────────────────

    #[test]
    fn test_region_display_names() {
        assert_eq!(Region::Japan.display_name(), "Japan");
        assert_eq!(Region::NorthAmerica.display_name(), "North America");
        assert_eq!(Region::Others.display_name(), "Other Regions");
    }

    #[test]
    fn test_region_sales_accessor() {
        let record = SaleRecord {
            na_sales: 1.0,
            eu_sales: 2.0,
            jp_sales: 3.0,
            other_sales: 4.0,
            ..Default::default()
        };
        assert_eq!(Region::NorthAmerica.sales(&record), 1.0);
        assert_eq!(Region::Europe.sales(&record), 2.0);
        assert_eq!(Region::Japan.sales(&record), 3.0);
        assert_eq!(Region::Others.sales(&record), 4.0);
    }

    #[test]
    fn test_region_serde_camel_case() {
        let json = serde_json::to_string(&Region::NorthAmerica).unwrap();
        assert_eq!(json, r#""northAmerica""#);
    }

    // ── Dataset ────────────────────────────────────────────────────────────

    #[test]
    fn test_dataset_empty() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert_eq!(dataset.len(), 0);
        assert!(dataset.records().is_empty());
    }

    #[test]
    fn test_dataset_holds_records() {
        let dataset = Dataset::new(vec![SaleRecord::default(), SaleRecord::default()]);
        assert_eq!(dataset.len(), 2);
        assert!(!dataset.is_empty());
    }
}
