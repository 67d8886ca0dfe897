//! Load-once owner of the dataset snapshot.
//!
//! Wraps the load pipeline behind the dashboard's lifecycle contract: the
//! raw record list is populated exactly once, before any aggregation runs,
//! and is never mutated afterward. Aggregation callers obtain the snapshot
//! through [`DatasetManager::snapshot`]; calling it before the load has
//! completed is an error rather than a data race.

use std::sync::Arc;

use tracing::debug;
use vgsales_core::error::{DashboardError, Result};
use vgsales_core::models::Dataset;
use vgsales_data::analysis::{load_dataset, DatasetSummary};
use vgsales_data::loader::resolve_data_path;

// ── DatasetManager ────────────────────────────────────────────────────────────

/// Owner of the immutable dataset snapshot.
///
/// # Example
/// ```no_run
/// use vgsales_runtime::dataset_manager::DatasetManager;
///
/// # async fn run() -> vgsales_core::error::Result<()> {
/// let mut manager = DatasetManager::new(None);
/// let dataset = manager.load().await?;
/// println!("records: {}", dataset.len());
/// # Ok(())
/// # }
/// ```
pub struct DatasetManager {
    /// Optional override for the dataset file or directory.
    data_path: Option<String>,
    /// The loaded snapshot; `None` until the first `load` completes.
    snapshot: Option<Arc<Dataset>>,
    /// Headline figures captured at load time.
    summary: Option<DatasetSummary>,
}

impl DatasetManager {
    /// Create a manager for the given dataset path override.
    pub fn new(data_path: Option<String>) -> Self {
        Self {
            data_path,
            snapshot: None,
            summary: None,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Load the dataset. This is the single asynchronous suspension point
    /// of the dashboard.
    ///
    /// The snapshot is populated exactly once; further calls return the
    /// existing snapshot without touching the filesystem. Load failures
    /// propagate unrecovered, matching the no-retry contract of the data
    /// source.
    pub async fn load(&mut self) -> Result<Arc<Dataset>> {
        if let Some(snapshot) = &self.snapshot {
            debug!("dataset already loaded; returning existing snapshot");
            return Ok(Arc::clone(snapshot));
        }

        let path = resolve_data_path(self.data_path.as_deref());

        // File I/O and JSON parsing run off the async executor.
        let result = tokio::task::spawn_blocking(move || load_dataset(&path))
            .await
            .map_err(|e| DashboardError::Other(anyhow::anyhow!("dataset load task failed: {e}")))??;

        let snapshot = Arc::new(result.dataset);
        self.snapshot = Some(Arc::clone(&snapshot));
        self.summary = Some(result.summary);

        debug!(records = snapshot.len(), "dataset snapshot populated");

        Ok(snapshot)
    }

    /// The loaded snapshot.
    ///
    /// Returns [`DashboardError::DatasetNotLoaded`] when called before
    /// [`DatasetManager::load`] has completed.
    pub fn snapshot(&self) -> Result<Arc<Dataset>> {
        self.snapshot
            .as_ref()
            .map(Arc::clone)
            .ok_or(DashboardError::DatasetNotLoaded)
    }

    /// Headline figures captured at load time, or `None` before the load.
    pub fn summary(&self) -> Option<&DatasetSummary> {
        self.summary.as_ref()
    }

    /// `true` once the snapshot has been populated.
    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_some()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
