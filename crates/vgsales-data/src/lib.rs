//! Data layer for the vgsales dashboard.
//!
//! Responsible for discovering and parsing the JSON sales dataset, running
//! the chart-ready aggregation passes over the raw records, and producing
//! the top-level load-and-summarize pipeline result.

pub mod aggregator;
pub mod analysis;
pub mod loader;

pub use vgsales_core as core;
