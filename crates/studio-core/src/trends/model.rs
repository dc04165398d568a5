//! Trend analysis models.

use serde::{Deserialize, Serialize};

/// Default number of videos fetched per platform.
pub const DEFAULT_MAX_RESULTS_PER_PLATFORM: u32 = 10;

/// Body of `POST /api/v1/trends/analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendsRequest {
    pub persona_keywords: Vec<String>,
    pub platforms: Vec<String>,
    pub max_results_per_platform: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
}

/// A trending short video on one platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingVideo {
    pub platform: String,
    pub title: String,
    pub channel_name: String,
    pub video_id: String,
    pub url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub like_count: Option<u64>,
    #[serde(default)]
    pub comment_count: Option<u64>,
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub relevance_score: Option<f64>,
    #[serde(default)]
    pub why_trending: String,
}

/// Trending videos and observations for one platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformTrends {
    pub platform: String,
    #[serde(default)]
    pub videos: Vec<TrendingVideo>,
    #[serde(default)]
    pub total_views: u64,
    #[serde(default)]
    pub insights: Vec<String>,
}

/// Response of the trend analysis endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendsReport {
    #[serde(default)]
    pub platforms: Vec<PlatformTrends>,
    #[serde(default)]
    pub overall_insights: Vec<String>,
    #[serde(default)]
    pub analyzed_at: Option<String>,
}
