//! Channel planning models.

use serde::{Deserialize, Serialize};

pub const DEFAULT_VIDEO_COUNT: u8 = 5;
pub const MAX_VIDEO_COUNT: u8 = 20;

/// Target viewer persona.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub age_range: String,
    pub gender: String,
    pub interests: Vec<String>,
    pub pain_points: Vec<String>,
    pub goals: Vec<String>,
    pub content_preferences: String,
}

/// Body of the strategy, full-plan and planning report endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyRequest {
    pub persona: Persona,
    pub channel_genre: String,
    pub channel_name: Option<String>,
}

/// Body of `POST /api/v1/planning/video-concepts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoConceptRequest {
    pub persona: Persona,
    pub channel_genre: String,
    pub video_count: u8,
}

/// One proposed video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoConcept {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hook: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub cta: String,
    #[serde(default)]
    pub estimated_length: String,
}

/// Channel positioning proposed by the planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelStrategy {
    #[serde(default)]
    pub channel_concept: String,
    #[serde(default)]
    pub unique_value: String,
    #[serde(default)]
    pub target_audience: String,
    #[serde(default)]
    pub content_pillars: Vec<String>,
    #[serde(default)]
    pub posting_frequency: String,
    #[serde(default)]
    pub growth_strategy: Vec<String>,
    #[serde(default)]
    pub video_concepts: Vec<VideoConcept>,
}

/// One week of the content calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarWeek {
    pub week: u32,
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub videos: Vec<VideoConcept>,
}

/// Strategy plus a four-week calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningResult {
    pub strategy: ChannelStrategy,
    #[serde(default)]
    pub calendar: Vec<CalendarWeek>,
}
