mod bootstrap;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use vgsales_core::error::DashboardError;
use vgsales_core::settings::Settings;
use vgsales_data::aggregator::{
    PlatformBestSeller, PlatformGroupGames, PlatformYearSeries, RankedTotal, RegionalSales,
    SalesAggregator, YearlyBestSeller, YearlyGameCount,
};
use vgsales_data::analysis::DatasetSummary;
use vgsales_runtime::dataset_manager::DatasetManager;

// Per-chart result limits the dashboard page applies in its full payload.
const SALES_BY_PLATFORM_LIMIT: usize = 5;
const SALES_BY_PUBLISHER_LIMIT: usize = 8;
const GAMES_BY_PLATFORM_LIMIT: usize = 4;
const GAMES_BY_YEAR_LIMIT: usize = 40;

/// Every chart view in one document: the payload the rendering layer
/// consumes on page load.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardViews<'a> {
    summary: &'a DatasetSummary,
    sales_by_platform: Vec<RankedTotal>,
    sales_by_publisher: Vec<RankedTotal>,
    games_by_platform: Vec<PlatformGroupGames>,
    games_by_year: Vec<YearlyGameCount>,
    best_sellers_by_year: Vec<YearlyBestSeller>,
    games_on_platform_by_year: Vec<PlatformYearSeries>,
    regional_sales: Vec<RegionalSales>,
    best_sellers_by_platform: Vec<PlatformBestSeller>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("vgsales dashboard v{} starting", env!("CARGO_PKG_VERSION"));

    let data_path = settings.data_path.clone().or_else(|| {
        bootstrap::discover_data_path().map(|p| p.to_string_lossy().to_string())
    });
    if data_path.is_none() {
        tracing::warn!("no dataset discovered; falling back to ./data");
    }

    let mut manager = DatasetManager::new(data_path);
    let dataset = manager.load().await?;
    tracing::info!(records = dataset.len(), "dataset loaded");

    let records = dataset.records();
    let limit = settings.limit;
    let groups = settings.platform_group_filter();
    let pretty = settings.pretty;

    match settings.view.as_str() {
        "summary" => {
            let summary = manager
                .summary()
                .ok_or(DashboardError::DatasetNotLoaded)?;
            emit(&summary, pretty)?;
        }
        "sales-by-platform" => {
            emit(&SalesAggregator::sales_by_platform_group(records, limit), pretty)?;
        }
        "sales-by-publisher" => {
            emit(&SalesAggregator::sales_by_publisher(records, limit), pretty)?;
        }
        "games-by-platform" => {
            emit(&SalesAggregator::games_by_platform(records, limit), pretty)?;
        }
        "games-by-year" => {
            emit(&SalesAggregator::games_by_year(records, limit), pretty)?;
        }
        "best-sellers-by-year" => {
            emit(&SalesAggregator::best_seller_by_year(records, limit), pretty)?;
        }
        "games-on-platform-by-year" => {
            emit(
                &SalesAggregator::games_on_platform_by_year(records, &groups, limit),
                pretty,
            )?;
        }
        "regional-sales" => {
            emit(
                &SalesAggregator::regional_sales_by_platform_group(records, &groups),
                pretty,
            )?;
        }
        "best-sellers-by-platform" => {
            emit(
                &SalesAggregator::best_seller_by_platform_group(records, limit),
                pretty,
            )?;
        }
        "all" => {
            let summary = manager
                .summary()
                .ok_or(DashboardError::DatasetNotLoaded)?;
            let views = DashboardViews {
                summary,
                sales_by_platform: SalesAggregator::sales_by_platform_group(
                    records,
                    limit.or(Some(SALES_BY_PLATFORM_LIMIT)),
                ),
                sales_by_publisher: SalesAggregator::sales_by_publisher(
                    records,
                    limit.or(Some(SALES_BY_PUBLISHER_LIMIT)),
                ),
                games_by_platform: SalesAggregator::games_by_platform(
                    records,
                    limit.or(Some(GAMES_BY_PLATFORM_LIMIT)),
                ),
                games_by_year: SalesAggregator::games_by_year(
                    records,
                    limit.or(Some(GAMES_BY_YEAR_LIMIT)),
                ),
                best_sellers_by_year: SalesAggregator::best_seller_by_year(records, limit),
                games_on_platform_by_year: SalesAggregator::games_on_platform_by_year(
                    records, &groups, limit,
                ),
                regional_sales: SalesAggregator::regional_sales_by_platform_group(
                    records, &groups,
                ),
                best_sellers_by_platform: SalesAggregator::best_seller_by_platform_group(
                    records, limit,
                ),
            };
            emit(&views, pretty)?;
        }
        unknown => {
            // clap's value_parser rejects anything else before we get here.
            return Err(DashboardError::Config(format!("unknown view: {unknown}")).into());
        }
    }

    Ok(())
}

/// Serialize a view to stdout.
fn emit<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}
