use super::record::StoredPerformanceResult;
use chrono::{DateTime, Datelike, Duration, Months, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three trend tiers shown on the progress screen.
///
/// Each tier pairs a lookback window with a fixed bucket layout: the daily
/// tier looks back 7 days and draws 7 day buckets, the weekly tier looks
/// back one month and draws 4 week buckets, the monthly tier looks back one
/// year and draws 12 month buckets. The asymmetric pairing is the accepted
/// contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendPeriod {
    Daily,
    Weekly,
    Monthly,
}

impl TrendPeriod {
    /// Start of the lookback window ending at `now`.
    pub fn window_start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            TrendPeriod::Daily => now - Duration::days(7),
            TrendPeriod::Weekly => now - Months::new(1),
            TrendPeriod::Monthly => now - Months::new(12),
        }
    }
}

impl fmt::Display for TrendPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrendPeriod::Daily => "daily",
            TrendPeriod::Weekly => "weekly",
            TrendPeriod::Monthly => "monthly",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for TrendPeriod {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(TrendPeriod::Daily),
            "weekly" => Ok(TrendPeriod::Weekly),
            "monthly" => Ok(TrendPeriod::Monthly),
            other => anyhow::bail!("Unknown trend period: {}", other),
        }
    }
}

/// One labeled time-slice of a trend chart. Derived fresh on every query,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataPoint {
    /// Short calendar label (weekday initial, "W1".."W4", or month initial)
    pub label: String,

    /// Mean overall score of the results in this bucket (0 when empty)
    pub value: f64,
}

/// Mean overall score of the results inside the period's lookback window,
/// or 0.0 when the window is empty.
pub fn average_score(
    results: &[StoredPerformanceResult],
    period: TrendPeriod,
    now: DateTime<Utc>,
) -> f64 {
    let windowed = filter_to_window(results, period, now);

    if windowed.is_empty() {
        return 0.0;
    }

    windowed.iter().map(|r| r.metrics.overall as f64).sum::<f64>() / windowed.len() as f64
}

/// Bucket the period's results into the fixed chart layout, chronological
/// order ending at `now`. Every bucket is always emitted; empty buckets
/// carry a zero value.
pub fn chart_series(
    results: &[StoredPerformanceResult],
    period: TrendPeriod,
    now: DateTime<Utc>,
) -> Vec<ChartDataPoint> {
    let windowed = filter_to_window(results, period, now);

    match period {
        TrendPeriod::Daily => daily_series(&windowed, now),
        TrendPeriod::Weekly => weekly_series(&windowed, now),
        TrendPeriod::Monthly => monthly_series(&windowed, now),
    }
}

fn filter_to_window<'a>(
    results: &'a [StoredPerformanceResult],
    period: TrendPeriod,
    now: DateTime<Utc>,
) -> Vec<&'a StoredPerformanceResult> {
    let start = period.window_start(now);
    results
        .iter()
        .filter(|r| r.date >= start && r.date <= now)
        .collect()
}

fn mean_overall(bucket: &[&&StoredPerformanceResult]) -> f64 {
    if bucket.is_empty() {
        return 0.0;
    }
    bucket.iter().map(|r| r.metrics.overall as f64).sum::<f64>() / bucket.len() as f64
}

/// Seven buckets, one per calendar day, labeled with the weekday initial.
fn daily_series(results: &[&StoredPerformanceResult], now: DateTime<Utc>) -> Vec<ChartDataPoint> {
    (0..7)
        .rev()
        .map(|i| {
            let day = now - Duration::days(i);
            let bucket: Vec<_> = results
                .iter()
                .filter(|r| r.date.date_naive() == day.date_naive())
                .collect();

            ChartDataPoint {
                label: initial_of(&day.format("%A").to_string()),
                value: mean_overall(&bucket),
            }
        })
        .collect()
}

/// Four buckets labeled W1..W4, each covering the bucket's start day through
/// six days after it.
fn weekly_series(results: &[&StoredPerformanceResult], now: DateTime<Utc>) -> Vec<ChartDataPoint> {
    (0..4)
        .rev()
        .map(|i| {
            let week_start = now - Duration::weeks(i);
            let week_end = week_start + Duration::days(6);
            let bucket: Vec<_> = results
                .iter()
                .filter(|r| r.date >= week_start && r.date <= week_end)
                .collect();

            ChartDataPoint {
                label: format!("W{}", 4 - i),
                value: mean_overall(&bucket),
            }
        })
        .collect()
}

/// Twelve buckets, one per calendar month, labeled with the month initial.
fn monthly_series(results: &[&StoredPerformanceResult], now: DateTime<Utc>) -> Vec<ChartDataPoint> {
    (0..12u32)
        .rev()
        .map(|i| {
            let month = now - Months::new(i);
            let bucket: Vec<_> = results
                .iter()
                .filter(|r| r.date.year() == month.year() && r.date.month() == month.month())
                .collect();

            ChartDataPoint {
                label: initial_of(&month.format("%B").to_string()),
                value: mean_overall(&bucket),
            }
        })
        .collect()
}

fn initial_of(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}
