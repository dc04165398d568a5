//! Saved analysis run models.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which analysis produced a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisType {
    Trends,
    Viral,
}

impl AnalysisType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisType::Trends => "trends",
            AnalysisType::Viral => "viral",
        }
    }

    /// Short label used in listings.
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisType::Trends => "トレンド",
            AnalysisType::Viral => "バイラル",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "trends" | "trend" => Some(AnalysisType::Trends),
            "viral" => Some(AnalysisType::Viral),
            _ => None,
        }
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted analysis run as returned by the backend.
///
/// `result` and `meta` are backend-defined documents kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRun {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub analysis_type: AnalysisType,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub meta: serde_json::Value,
    #[serde(default)]
    pub result: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl AnalysisRun {
    /// Summary, or a generic title when the run was saved without one.
    pub fn title(&self) -> String {
        match self.summary.as_deref().map(str::trim) {
            Some(summary) if !summary.is_empty() => summary.to_string(),
            _ => format!("保存した{}分析", self.analysis_type.label()),
        }
    }
}

/// Payload for `POST /api/v1/analysis`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRunCreate {
    pub analysis_type: AnalysisType,
    pub keywords: Vec<String>,
    pub platforms: Vec<String>,
    pub summary: String,
    pub channel_id: Option<String>,
    pub meta: serde_json::Value,
    pub result: serde_json::Value,
}

/// One page of analysis history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRunList {
    #[serde(default)]
    pub items: Vec<AnalysisRun>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Aggregated counts over saved runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisStats {
    #[serde(default)]
    pub total_runs: u64,
    #[serde(default)]
    pub trends_runs: u64,
    #[serde(default)]
    pub viral_runs: u64,
    #[serde(default)]
    pub viral_videos: u64,
}

/// How often a keyword appears across saved runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: u64,
}

/// Filters for listing saved runs. Unset fields are left out of the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunQuery {
    pub analysis_type: Option<AnalysisType>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl RunQuery {
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Query-string pairs, only for the fields that are set.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(kind) = self.analysis_type {
            pairs.push(("analysis_type", kind.as_str().to_string()));
        }
        if let Some(limit) = self.limit.filter(|l| *l > 0) {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(cursor) = self.cursor.as_deref().filter(|c| !c.is_empty()) {
            pairs.push(("cursor", cursor.to_string()));
        }
        pairs
    }
}
