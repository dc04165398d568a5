//! Channel domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::model::{AnalysisRun, AnalysisStats, KeywordCount};

/// A YouTube channel registered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    /// YouTube's own channel id.
    #[serde(default)]
    pub channel_id: Option<String>,
    pub channel_name: String,
    pub channel_url: String,
    #[serde(default)]
    pub subscriber_count: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for registering a channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewChannel {
    pub channel_url: String,
}

/// Everything shown when a channel row is expanded.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelDetails {
    pub stats: AnalysisStats,
    pub analyses: Vec<AnalysisRun>,
    pub top_keywords: Vec<KeywordCount>,
}
