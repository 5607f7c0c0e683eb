use super::backend::ResultsBackend;
use super::charts::{self, ChartDataPoint, TrendPeriod};
use super::record::StoredPerformanceResult;
use crate::analysis::PerformanceResult;
use crate::feedback::FeedbackResult;
use anyhow::{Context, Result};
use chrono::{DateTime, Months, Utc};
use tracing::info;
use uuid::Uuid;

/// Hard cap on stored results; the oldest beyond it are dropped on save.
pub const MAX_STORED_RESULTS: usize = 50;

/// Results older than this many months are swept on load.
const EXPIRY_MONTHS: u32 = 6;

/// Repository of past performance results, newest first.
///
/// Owns the ordered record list; callers hold an explicit reference rather
/// than going through any ambient singleton. Every mutation persists through
/// the backend before returning, so a save is never interleaved with another
/// save on the same store.
pub struct ResultsStore {
    results: Vec<StoredPerformanceResult>,
    backend: Box<dyn ResultsBackend>,
}

impl ResultsStore {
    /// Load the store from its backend, sweeping out results older than six
    /// months.
    pub async fn open(backend: Box<dyn ResultsBackend>) -> Result<Self> {
        let mut results = backend.load().await.context("Failed to load results")?;

        let cutoff = Utc::now() - Months::new(EXPIRY_MONTHS);
        let before = results.len();
        results.retain(|r| r.date >= cutoff);

        let mut store = Self { results, backend };

        if store.results.len() != before {
            info!(
                "Swept {} expired results ({} backend)",
                before - store.results.len(),
                store.backend.name()
            );
            store.persist().await?;
        }

        Ok(store)
    }

    /// Record a completed recording session: build the stored record, insert
    /// newest-first, enforce the cap, persist.
    pub async fn save(
        &mut self,
        prompt: &str,
        metrics: &PerformanceResult,
        feedback: &FeedbackResult,
        audio_file_name: &str,
    ) -> Result<StoredPerformanceResult> {
        let record = StoredPerformanceResult::new(
            Utc::now(),
            prompt.to_string(),
            metrics,
            feedback,
            audio_file_name.to_string(),
        );

        self.results.insert(0, record.clone());
        self.results.truncate(MAX_STORED_RESULTS);

        self.persist().await?;

        info!("Saved performance result: overall {}%", metrics.overall);

        Ok(record)
    }

    /// The most recent results, newest first.
    pub fn get_recent(&self, limit: usize) -> Vec<StoredPerformanceResult> {
        self.results.iter().take(limit).cloned().collect()
    }

    pub fn get_for_date_range(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Vec<StoredPerformanceResult> {
        self.results
            .iter()
            .filter(|r| r.date >= from && r.date <= to)
            .cloned()
            .collect()
    }

    /// Results inside the period's lookback window ending at `now`.
    pub fn get_for_period(
        &self,
        period: TrendPeriod,
        now: DateTime<Utc>,
    ) -> Vec<StoredPerformanceResult> {
        self.get_for_date_range(period.window_start(now), now)
    }

    /// Remove one result by identity. Returns whether anything was removed.
    pub async fn delete(&mut self, id: Uuid) -> Result<bool> {
        let before = self.results.len();
        self.results.retain(|r| r.id != id);

        if self.results.len() == before {
            return Ok(false);
        }

        self.persist().await?;
        info!("Deleted result {}", id);
        Ok(true)
    }

    /// Remove every stored result.
    pub async fn clear(&mut self) -> Result<()> {
        self.results.clear();
        self.persist().await?;
        info!("Cleared all stored results");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Mean overall score over the period's window, 0.0 when empty.
    pub fn average_score(&self, period: TrendPeriod, now: DateTime<Utc>) -> f64 {
        charts::average_score(&self.results, period, now)
    }

    /// Trend chart buckets for the period, chronological ending at `now`.
    pub fn chart_series(&self, period: TrendPeriod, now: DateTime<Utc>) -> Vec<ChartDataPoint> {
        charts::chart_series(&self.results, period, now)
    }

    async fn persist(&self) -> Result<()> {
        self.backend
            .persist(&self.results)
            .await
            .context("Failed to persist results")
    }
}
