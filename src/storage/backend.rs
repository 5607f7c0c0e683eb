use super::record::StoredPerformanceResult;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::info;

/// Persistence backend for the results store.
///
/// Implementations:
/// - `JsonFileBackend`: JSON file on disk (production)
/// - `MemoryBackend`: in-process only (tests, throwaway stores)
#[async_trait::async_trait]
pub trait ResultsBackend: Send + Sync {
    /// Load all persisted results, newest first. A backend with nothing
    /// persisted yet returns an empty list, not an error.
    async fn load(&self) -> Result<Vec<StoredPerformanceResult>>;

    /// Replace the persisted list with the given one.
    async fn persist(&self, results: &[StoredPerformanceResult]) -> Result<()>;

    /// Backend name for logging
    fn name(&self) -> &str;
}

/// Stores the result list as a single pretty-printed JSON file.
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl ResultsBackend for JsonFileBackend {
    async fn load(&self) -> Result<Vec<StoredPerformanceResult>> {
        if !self.path.exists() {
            info!("No results file at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }

        let data = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("Failed to read results file: {}", self.path.display()))?;

        let results: Vec<StoredPerformanceResult> = serde_json::from_slice(&data)
            .with_context(|| format!("Failed to decode results file: {}", self.path.display()))?;

        info!(
            "Loaded {} stored performance results from {}",
            results.len(),
            self.path.display()
        );

        Ok(results)
    }

    async fn persist(&self, results: &[StoredPerformanceResult]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .context("Failed to create results directory")?;
        }

        let data = serde_json::to_vec_pretty(results).context("Failed to encode results")?;

        tokio::fs::write(&self.path, data)
            .await
            .with_context(|| format!("Failed to write results file: {}", self.path.display()))?;

        Ok(())
    }

    fn name(&self) -> &str {
        "json-file"
    }
}

/// Keeps results in memory only. Loading back returns whatever was last
/// persisted within the same process.
#[derive(Default)]
pub struct MemoryBackend {
    results: Mutex<Vec<StoredPerformanceResult>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ResultsBackend for MemoryBackend {
    async fn load(&self) -> Result<Vec<StoredPerformanceResult>> {
        Ok(self.results.lock().await.clone())
    }

    async fn persist(&self, results: &[StoredPerformanceResult]) -> Result<()> {
        *self.results.lock().await = results.to_vec();
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
