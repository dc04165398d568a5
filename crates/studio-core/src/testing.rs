//! In-memory `StudioApi` used by the page tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tokio::sync::Barrier;

use crate::analysis::model::{
    AnalysisRun, AnalysisRunCreate, AnalysisRunList, AnalysisStats, KeywordCount, RunQuery,
};
use crate::analytics::model::{AnalyticsReport, CsvUpload};
use crate::api::StudioApi;
use crate::channel::model::{Channel, NewChannel};
use crate::combined::model::CombinedPlanRequest;
use crate::dashboard::model::{DashboardOverview, DashboardRequest};
use crate::error::{StudioError, StudioResult};
use crate::planning::model::{
    ChannelStrategy, PlanningResult, StrategyRequest, VideoConcept, VideoConceptRequest,
};
use crate::session::{Session, User};
use crate::trends::model::{TrendsReport, TrendsRequest};
use crate::viral::model::{ViralReport, ViralRequest};

const PARALLEL_OPS: [&str; 3] = ["channel_stats", "channel_analyses", "channel_top_keywords"];

/// Scripted backend: canned JSON per operation, every call recorded.
#[derive(Default)]
pub struct FakeApi {
    calls: Mutex<Vec<(&'static str, Value)>>,
    responses: Mutex<HashMap<&'static str, Result<Value, String>>>,
    barrier: Option<Arc<Barrier>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, op: &'static str, body: Value) -> Self {
        self.responses.lock().unwrap().insert(op, Ok(body));
        self
    }

    pub fn fail(self, op: &'static str, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(op, Err(message.to_string()));
        self
    }

    /// Make the three channel-detail calls wait for each other, so the test
    /// only completes if they run concurrently.
    pub fn rendezvous(mut self) -> Self {
        self.barrier = Some(Arc::new(Barrier::new(PARALLEL_OPS.len())));
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().iter().map(|(op, _)| *op).collect()
    }

    /// Body of the most recent call to `op`.
    pub fn body(&self, op: &str) -> Option<Value> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(name, _)| *name == op)
            .map(|(_, body)| body.clone())
    }

    async fn reply<T: DeserializeOwned + Send>(
        &self,
        session: &Session,
        op: &'static str,
        body: Value,
    ) -> StudioResult<T> {
        session.require_user()?;
        self.calls.lock().unwrap().push((op, body));

        if let Some(barrier) = &self.barrier {
            if PARALLEL_OPS.contains(&op) {
                barrier.wait().await;
            }
        }

        let response = self.responses.lock().unwrap().get(op).cloned();
        match response {
            Some(Ok(value)) => {
                serde_json::from_value(value).map_err(|e| StudioError::Decode(e.to_string()))
            }
            Some(Err(message)) => Err(StudioError::api(500, message)),
            None => Err(StudioError::api(404, format!("no response scripted for {op}"))),
        }
    }
}

pub fn session() -> Session {
    Session::signed_in(User::new("user-1"))
}

pub fn trends_report_json() -> Value {
    json!({
        "platforms": [{
            "platform": "YouTube",
            "videos": [{
                "platform": "YouTube",
                "title": "副業で月5万円",
                "channel_name": "副業ch",
                "video_id": "abc",
                "url": "https://youtube.com/shorts/abc",
                "view_count": 120000,
                "published_at": "2025-01-01",
                "why_trending": "具体的な金額"
            }],
            "total_views": 120000,
            "insights": ["数字入りのタイトルが強い"]
        }],
        "overall_insights": ["短尺が伸びている"],
        "analyzed_at": "2025-01-02T00:00:00Z"
    })
}

pub fn viral_report_json() -> Value {
    json!({
        "videos": [
            {
                "platform": "YouTube",
                "title": "小さなチャンネルの大ヒット",
                "channel_name": "small",
                "subscriber_count": 1000,
                "view_count": 12500,
                "video_id": "v1",
                "url": "https://youtube.com/watch?v=v1",
                "published_at": "2025-01-01",
                "viral_ratio": 12.5,
                "why_viral": "フックが強い",
                "key_takeaways": ["冒頭3秒"]
            },
            {
                "platform": "YouTube",
                "title": "二本目",
                "channel_name": "tiny",
                "subscriber_count": 500,
                "view_count": 2000,
                "video_id": "v2",
                "url": "https://youtube.com/watch?v=v2",
                "published_at": "2025-01-02",
                "viral_ratio": 4.0,
                "why_viral": "共感",
                "key_takeaways": []
            }
        ],
        "insights": ["共通パターン"],
        "content_strategies": ["シリーズ化"]
    })
}

pub fn planning_result_json() -> Value {
    json!({
        "strategy": {
            "channel_concept": "忙しい会社員のための副業入門",
            "unique_value": "実体験ベース",
            "target_audience": "20-30代会社員",
            "content_pillars": ["副業紹介", "時間術"],
            "posting_frequency": "週3本",
            "growth_strategy": ["ショートで集客"],
            "video_concepts": [{
                "title": "副業の始め方",
                "description": "最初の一歩",
                "hook": "まだ始めてないの？",
                "key_points": ["準備", "実践"],
                "cta": "チャンネル登録",
                "estimated_length": "8-10分"
            }]
        },
        "calendar": [{ "week": 1, "theme": "導入", "videos": [] }]
    })
}

pub fn run_json(id: &str, kind: &str) -> Value {
    json!({
        "id": id,
        "user_id": "user-1",
        "analysis_type": kind,
        "keywords": ["副業"],
        "platforms": ["YouTube"],
        "summary": format!("run {id}"),
        "meta": {},
        "result": {},
        "created_at": "2025-01-05T10:00:00Z"
    })
}

pub fn stats_json() -> Value {
    json!({ "total_runs": 3, "trends_runs": 2, "viral_runs": 1, "viral_videos": 8 })
}

#[async_trait]
impl StudioApi for FakeApi {
    async fn generate_full_plan(
        &self,
        session: &Session,
        request: &StrategyRequest,
    ) -> StudioResult<PlanningResult> {
        self.reply(session, "generate_full_plan", json!(request)).await
    }

    async fn generate_strategy(
        &self,
        session: &Session,
        request: &StrategyRequest,
    ) -> StudioResult<ChannelStrategy> {
        self.reply(session, "generate_strategy", json!(request)).await
    }

    async fn generate_video_concepts(
        &self,
        session: &Session,
        request: &VideoConceptRequest,
    ) -> StudioResult<Vec<VideoConcept>> {
        self.reply(session, "generate_video_concepts", json!(request)).await
    }

    async fn analyze_trends(
        &self,
        session: &Session,
        request: &TrendsRequest,
    ) -> StudioResult<TrendsReport> {
        self.reply(session, "analyze_trends", json!(request)).await
    }

    async fn find_viral(
        &self,
        session: &Session,
        request: &ViralRequest,
    ) -> StudioResult<ViralReport> {
        self.reply(session, "find_viral", json!(request)).await
    }

    async fn analyze_csv(
        &self,
        session: &Session,
        upload: &CsvUpload,
    ) -> StudioResult<AnalyticsReport> {
        self.reply(session, "analyze_csv", json!(upload.file_name)).await
    }

    async fn combined_plan(
        &self,
        session: &Session,
        request: &CombinedPlanRequest,
    ) -> StudioResult<PlanningResult> {
        self.reply(session, "combined_plan", json!(request)).await
    }

    async fn dashboard_overview(
        &self,
        session: &Session,
        request: &DashboardRequest,
    ) -> StudioResult<DashboardOverview> {
        self.reply(session, "dashboard_overview", json!(request)).await
    }

    async fn planning_report(
        &self,
        session: &Session,
        request: &StrategyRequest,
    ) -> StudioResult<String> {
        self.reply(session, "planning_report", json!(request)).await
    }

    async fn trends_report(
        &self,
        session: &Session,
        request: &TrendsRequest,
    ) -> StudioResult<String> {
        self.reply(session, "trends_report", json!(request)).await
    }

    async fn viral_report(
        &self,
        session: &Session,
        request: &ViralRequest,
    ) -> StudioResult<String> {
        self.reply(session, "viral_report", json!(request)).await
    }

    async fn analytics_report(
        &self,
        session: &Session,
        upload: &CsvUpload,
    ) -> StudioResult<String> {
        self.reply(session, "analytics_report", json!(upload.file_name)).await
    }

    async fn list_channels(&self, session: &Session) -> StudioResult<Vec<Channel>> {
        self.reply(session, "list_channels", Value::Null).await
    }

    async fn add_channel(&self, session: &Session, channel: &NewChannel) -> StudioResult<Channel> {
        self.reply(session, "add_channel", json!(channel)).await
    }

    async fn delete_channel(&self, session: &Session, channel_id: &str) -> StudioResult<()> {
        self.reply::<Value>(session, "delete_channel", json!(channel_id))
            .await
            .map(|_| ())
    }

    async fn channel_stats(
        &self,
        session: &Session,
        channel_id: &str,
    ) -> StudioResult<AnalysisStats> {
        self.reply(session, "channel_stats", json!(channel_id)).await
    }

    async fn channel_analyses(
        &self,
        session: &Session,
        channel_id: &str,
    ) -> StudioResult<AnalysisRunList> {
        self.reply(session, "channel_analyses", json!(channel_id)).await
    }

    async fn channel_top_keywords(
        &self,
        session: &Session,
        channel_id: &str,
    ) -> StudioResult<Vec<KeywordCount>> {
        self.reply(session, "channel_top_keywords", json!(channel_id)).await
    }

    async fn save_run(
        &self,
        session: &Session,
        run: &AnalysisRunCreate,
    ) -> StudioResult<AnalysisRun> {
        self.reply(session, "save_run", json!(run)).await
    }

    async fn list_runs(
        &self,
        session: &Session,
        query: &RunQuery,
    ) -> StudioResult<AnalysisRunList> {
        let pairs: serde_json::Map<String, Value> = query
            .to_pairs()
            .into_iter()
            .map(|(k, v)| (k.to_string(), Value::String(v)))
            .collect();
        self.reply(session, "list_runs", Value::Object(pairs)).await
    }

    async fn get_run(&self, session: &Session, analysis_id: &str) -> StudioResult<AnalysisRun> {
        self.reply(session, "get_run", json!(analysis_id)).await
    }

    async fn delete_run(&self, session: &Session, analysis_id: &str) -> StudioResult<()> {
        self.reply::<Value>(session, "delete_run", json!(analysis_id))
            .await
            .map(|_| ())
    }

    async fn analysis_stats(&self, session: &Session) -> StudioResult<AnalysisStats> {
        self.reply(session, "analysis_stats", Value::Null).await
    }

    async fn top_keywords(&self, session: &Session) -> StudioResult<Vec<KeywordCount>> {
        self.reply(session, "top_keywords", Value::Null).await
    }
}
