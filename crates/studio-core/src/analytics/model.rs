//! CSV analytics models.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{StudioError, StudioResult};
use crate::messages;

/// A CSV export picked for upload.
#[derive(Clone, PartialEq, Eq)]
pub struct CsvUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for CsvUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsvUpload")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl CsvUpload {
    /// Wrap in-memory contents. Only `.csv` names are accepted.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> StudioResult<Self> {
        let file_name = file_name.into();
        if !file_name.to_lowercase().ends_with(".csv") {
            return Err(StudioError::validation(messages::CSV_ONLY));
        }
        Ok(Self { file_name, bytes })
    }

    /// Read a CSV file from disk.
    pub fn from_path(path: &Path) -> StudioResult<Self> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if !file_name.to_lowercase().ends_with(".csv") {
            return Err(StudioError::validation(messages::CSV_ONLY));
        }
        let bytes = std::fs::read(path)?;
        Ok(Self { file_name, bytes })
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Channel-wide totals over the analysed period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelMetrics {
    #[serde(default)]
    pub total_views: u64,
    #[serde(default)]
    pub total_watch_time_hours: f64,
    #[serde(default)]
    pub average_view_duration_seconds: f64,
    #[serde(default)]
    pub subscriber_change: i64,
    #[serde(default)]
    pub total_videos_analyzed: u64,
    #[serde(default)]
    pub date_range: String,
}

/// A video that stood out on one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPerformer {
    pub title: String,
    #[serde(default)]
    pub metric_name: String,
    #[serde(default)]
    pub metric_value: f64,
    #[serde(default)]
    pub why_successful: String,
}

/// A finding with a recommended action. `priority` is 高, 中 or 低.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub finding: String,
    #[serde(default)]
    pub recommendation: String,
    #[serde(default)]
    pub expected_impact: String,
}

/// Response of the CSV analysis endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    #[serde(default)]
    pub channel_metrics: ChannelMetrics,
    #[serde(default)]
    pub top_performers: Vec<TopPerformer>,
    #[serde(default)]
    pub insights: Vec<Insight>,
    #[serde(default)]
    pub content_recommendations: Vec<String>,
    #[serde(default)]
    pub optimization_tips: Vec<String>,
    #[serde(default)]
    pub next_actions: Vec<String>,
}
