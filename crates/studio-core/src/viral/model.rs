//! Viral video finder models.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_VIRAL_RATIO: f64 = 3.0;
pub const DEFAULT_MAX_SUBSCRIBERS: u64 = 100_000;
pub const DEFAULT_MAX_RESULTS: u32 = 20;

/// Body of `POST /api/v1/viral/find`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViralRequest {
    pub keywords: Vec<String>,
    pub min_viral_ratio: f64,
    pub max_subscribers: u64,
    pub platforms: Vec<String>,
    pub max_results: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
}

/// A video whose views far exceed its channel's subscriber count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViralVideo {
    pub platform: String,
    pub title: String,
    pub channel_name: String,
    #[serde(default)]
    pub subscriber_count: u64,
    #[serde(default)]
    pub view_count: u64,
    pub video_id: String,
    pub url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub like_count: Option<u64>,
    #[serde(default)]
    pub comment_count: Option<u64>,
    #[serde(default)]
    pub published_at: String,
    /// Views divided by subscribers.
    #[serde(default)]
    pub viral_ratio: f64,
    #[serde(default)]
    pub why_viral: String,
    #[serde(default)]
    pub key_takeaways: Vec<String>,
}

/// Response of the viral finder endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViralReport {
    #[serde(default)]
    pub videos: Vec<ViralVideo>,
    #[serde(default)]
    pub insights: Vec<String>,
    #[serde(default)]
    pub content_strategies: Vec<String>,
}

impl ViralReport {
    /// Highest viral ratio among the returned videos, if any is positive.
    pub fn highest_ratio(&self) -> Option<f64> {
        self.videos
            .iter()
            .map(|v| v.viral_ratio)
            .filter(|r| r.is_finite() && *r > 0.0)
            .fold(None, |max, r| Some(max.map_or(r, |m: f64| m.max(r))))
    }
}
