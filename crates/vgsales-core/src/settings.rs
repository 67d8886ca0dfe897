use clap::Parser;

/// The aggregation views the dashboard can emit.
pub const VIEWS: [&str; 10] = [
    "summary",
    "sales-by-platform",
    "sales-by-publisher",
    "games-by-platform",
    "games-by-year",
    "best-sellers-by-year",
    "games-on-platform-by-year",
    "regional-sales",
    "best-sellers-by-platform",
    "all",
];

/// Chart-ready aggregate views over a video game sales dataset
#[derive(Parser, Debug, Clone)]
#[command(
    name = "vgsales-dashboard",
    about = "Chart-ready aggregate views over a video game sales dataset",
    version
)]
pub struct Settings {
    /// Aggregation view to emit
    #[arg(long, default_value = "all", value_parser = VIEWS)]
    pub view: String,

    /// Dataset file or directory (auto-discovered if not specified)
    #[arg(long)]
    pub data_path: Option<String>,

    /// Keep only the top-ranked (or most recent) entries
    #[arg(long)]
    pub limit: Option<usize>,

    /// Platform-group allow-list for the filtered views ("all" selects every group)
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "Nintendo,Xbox,PlayStation,PC"
    )]
    pub platform_groups: Vec<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,
}

impl Settings {
    /// The platform-group allow-list handed to the filtered views.
    ///
    /// Blank entries are dropped, and the sentinel `all` (or an entirely
    /// blank argument) selects every group, expressed downstream as the
    /// empty allow-list.
    pub fn platform_group_filter(&self) -> Vec<String> {
        let groups: Vec<String> = self
            .platform_groups
            .iter()
            .map(|g| g.trim().to_string())
            .filter(|g| !g.is_empty())
            .collect();

        if groups.len() == 1 && groups[0].eq_ignore_ascii_case("all") {
            return Vec::new();
        }
        groups
    }
}
