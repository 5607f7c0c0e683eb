mod backend;
mod charts;
mod record;
mod store;

pub use backend::{JsonFileBackend, MemoryBackend, ResultsBackend};
pub use charts::{average_score, chart_series, ChartDataPoint, TrendPeriod};
pub use record::{StoredFeedback, StoredMetrics, StoredPerformanceResult};
pub use store::{ResultsStore, MAX_STORED_RESULTS};
