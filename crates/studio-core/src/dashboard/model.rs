//! Dashboard overview models.

use serde::{Deserialize, Serialize};

use crate::trends::model::TrendingVideo;
use crate::viral::model::ViralVideo;

pub const DEFAULT_MAX_RESULTS_PER_PLATFORM: u32 = 5;
pub const DEFAULT_MAX_VIRAL_RESULTS: u32 = 6;

/// Body of `POST /api/v1/dashboard/overview`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardRequest {
    pub persona_keywords: Vec<String>,
    pub channel_goal: Option<String>,
    pub platforms: Vec<String>,
    pub max_results_per_platform: u32,
    pub include_viral: bool,
    pub viral_platforms: Vec<String>,
    pub min_viral_ratio: f64,
    pub max_subscribers: u64,
    pub max_viral_results: u32,
}

/// A headline number for the metric cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickMetric {
    pub id: String,
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub delta: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
}

/// Per-platform aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformSummary {
    pub platform: String,
    #[serde(default)]
    pub total_videos: u64,
    #[serde(default)]
    pub total_views: u64,
    #[serde(default)]
    pub average_views: u64,
    #[serde(default)]
    pub top_videos: Vec<TrendingVideo>,
    #[serde(default)]
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendingHighlights {
    #[serde(default)]
    pub overall_insights: Vec<String>,
    #[serde(default)]
    pub platform_summaries: Vec<PlatformSummary>,
    #[serde(default)]
    pub top_video: Option<TrendingVideo>,
    #[serde(default)]
    pub top_tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViralHighlights {
    #[serde(default)]
    pub videos: Vec<ViralVideo>,
    #[serde(default)]
    pub insights: Vec<String>,
    #[serde(default)]
    pub content_strategies: Vec<String>,
}

/// Aggregated dashboard data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardOverview {
    #[serde(default)]
    pub generated_at: Option<String>,
    #[serde(default)]
    pub persona_keywords: Vec<String>,
    #[serde(default)]
    pub channel_goal: Option<String>,
    #[serde(default)]
    pub quick_metrics: Vec<QuickMetric>,
    #[serde(default)]
    pub trending: TrendingHighlights,
    #[serde(default)]
    pub viral: Option<ViralHighlights>,
    #[serde(default)]
    pub recommended_actions: Vec<String>,
}
