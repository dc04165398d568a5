use async_trait::async_trait;
use reqwest::Method;
use studio_core::analysis::model::{
    AnalysisRun, AnalysisRunCreate, AnalysisRunList, AnalysisStats, KeywordCount, RunQuery,
};
use studio_core::analytics::model::{AnalyticsReport, CsvUpload};
use studio_core::channel::model::{Channel, NewChannel};
use studio_core::combined::model::CombinedPlanRequest;
use studio_core::dashboard::model::{DashboardOverview, DashboardRequest};
use studio_core::messages;
use studio_core::planning::model::{
    ChannelStrategy, PlanningResult, StrategyRequest, VideoConcept, VideoConceptRequest,
};
use studio_core::trends::model::{TrendsReport, TrendsRequest};
use studio_core::viral::model::{ViralReport, ViralRequest};
use studio_core::{Session, StudioApi, StudioResult};

use crate::client::{csv_form, ApiClient};

#[async_trait]
impl StudioApi for ApiClient {
    async fn generate_full_plan(
        &self,
        session: &Session,
        request: &StrategyRequest,
    ) -> StudioResult<PlanningResult> {
        let req = self
            .request(session, Method::POST, "/api/v1/planning/full-plan")?
            .json(request);
        self.json(req, messages::FULL_PLAN_FAILED).await
    }

    async fn generate_strategy(
        &self,
        session: &Session,
        request: &StrategyRequest,
    ) -> StudioResult<ChannelStrategy> {
        let req = self
            .request(session, Method::POST, "/api/v1/planning/strategy")?
            .json(request);
        self.json(req, messages::STRATEGY_FAILED).await
    }

    async fn generate_video_concepts(
        &self,
        session: &Session,
        request: &VideoConceptRequest,
    ) -> StudioResult<Vec<VideoConcept>> {
        let req = self
            .request(session, Method::POST, "/api/v1/planning/video-concepts")?
            .json(request);
        self.json(req, messages::VIDEO_CONCEPTS_FAILED).await
    }

    async fn analyze_trends(
        &self,
        session: &Session,
        request: &TrendsRequest,
    ) -> StudioResult<TrendsReport> {
        let req = self
            .request(session, Method::POST, "/api/v1/trends/analyze")?
            .json(request);
        self.json(req, messages::TRENDS_FAILED).await
    }

    async fn find_viral(
        &self,
        session: &Session,
        request: &ViralRequest,
    ) -> StudioResult<ViralReport> {
        let req = self
            .request(session, Method::POST, "/api/v1/viral/find")?
            .json(request);
        self.json(req, messages::VIRAL_FAILED).await
    }

    async fn analyze_csv(
        &self,
        session: &Session,
        upload: &CsvUpload,
    ) -> StudioResult<AnalyticsReport> {
        let req = self
            .request(session, Method::POST, "/api/v1/analytics/analyze-csv")?
            .multipart(csv_form(upload, messages::CSV_ANALYSIS_FAILED)?);
        self.json(req, messages::CSV_ANALYSIS_FAILED).await
    }

    async fn combined_plan(
        &self,
        session: &Session,
        request: &CombinedPlanRequest,
    ) -> StudioResult<PlanningResult> {
        let req = self
            .request(session, Method::POST, "/api/v1/reports/combined-plan")?
            .json(request);
        self.json(req, messages::COMBINED_PLAN_FAILED).await
    }

    async fn dashboard_overview(
        &self,
        session: &Session,
        request: &DashboardRequest,
    ) -> StudioResult<DashboardOverview> {
        let req = self
            .request(session, Method::POST, "/api/v1/dashboard/overview")?
            .json(request);
        self.json(req, messages::DASHBOARD_FAILED).await
    }

    async fn planning_report(
        &self,
        session: &Session,
        request: &StrategyRequest,
    ) -> StudioResult<String> {
        let req = self
            .request(session, Method::POST, "/api/v1/reports/planning-markdown")?
            .json(request);
        self.text(req, messages::REPORT_FAILED).await
    }

    async fn trends_report(
        &self,
        session: &Session,
        request: &TrendsRequest,
    ) -> StudioResult<String> {
        let req = self
            .request(session, Method::POST, "/api/v1/reports/trends-markdown")?
            .json(request);
        self.text(req, messages::REPORT_FAILED).await
    }

    async fn viral_report(
        &self,
        session: &Session,
        request: &ViralRequest,
    ) -> StudioResult<String> {
        let req = self
            .request(session, Method::POST, "/api/v1/reports/viral-markdown")?
            .json(request);
        self.text(req, messages::REPORT_FAILED).await
    }

    async fn analytics_report(
        &self,
        session: &Session,
        upload: &CsvUpload,
    ) -> StudioResult<String> {
        let req = self
            .request(session, Method::POST, "/api/v1/reports/analytics-markdown")?
            .multipart(csv_form(upload, messages::REPORT_FAILED)?);
        self.text(req, messages::REPORT_FAILED).await
    }

    async fn list_channels(&self, session: &Session) -> StudioResult<Vec<Channel>> {
        let req = self.request(session, Method::GET, "/api/v1/channels/")?;
        self.json(req, messages::LIST_CHANNELS_FAILED).await
    }

    async fn add_channel(&self, session: &Session, channel: &NewChannel) -> StudioResult<Channel> {
        let req = self
            .request(session, Method::POST, "/api/v1/channels/")?
            .json(channel);
        self.json(req, messages::ADD_CHANNEL_FAILED).await
    }

    async fn delete_channel(&self, session: &Session, channel_id: &str) -> StudioResult<()> {
        let req = self.request_at(session, Method::DELETE, "/api/v1/channels", &[channel_id])?;
        self.empty(req, messages::DELETE_CHANNEL_FAILED).await
    }

    async fn channel_stats(
        &self,
        session: &Session,
        channel_id: &str,
    ) -> StudioResult<AnalysisStats> {
        let req =
            self.request_at(session, Method::GET, "/api/v1/channels", &[channel_id, "stats"])?;
        self.json(req, messages::CHANNEL_STATS_FAILED).await
    }

    async fn channel_analyses(
        &self,
        session: &Session,
        channel_id: &str,
    ) -> StudioResult<AnalysisRunList> {
        let req =
            self.request_at(session, Method::GET, "/api/v1/channels", &[channel_id, "analyses"])?;
        self.json(req, messages::CHANNEL_ANALYSES_FAILED).await
    }

    async fn channel_top_keywords(
        &self,
        session: &Session,
        channel_id: &str,
    ) -> StudioResult<Vec<KeywordCount>> {
        let req = self.request_at(
            session,
            Method::GET,
            "/api/v1/channels",
            &[channel_id, "top-keywords"],
        )?;
        self.json(req, messages::KEYWORD_STATS_FAILED).await
    }

    async fn save_run(
        &self,
        session: &Session,
        run: &AnalysisRunCreate,
    ) -> StudioResult<AnalysisRun> {
        let req = self
            .request(session, Method::POST, "/api/v1/analysis")?
            .json(run);
        self.json(req, messages::SAVE_RUN_FAILED).await
    }

    async fn list_runs(
        &self,
        session: &Session,
        query: &RunQuery,
    ) -> StudioResult<AnalysisRunList> {
        let req = self
            .request(session, Method::GET, "/api/v1/analysis")?
            .query(&query.to_pairs());
        self.json(req, messages::LIST_RUNS_FAILED).await
    }

    async fn get_run(&self, session: &Session, analysis_id: &str) -> StudioResult<AnalysisRun> {
        let req = self.request_at(session, Method::GET, "/api/v1/analysis", &[analysis_id])?;
        self.json(req, messages::GET_RUN_FAILED).await
    }

    async fn delete_run(&self, session: &Session, analysis_id: &str) -> StudioResult<()> {
        let req = self.request_at(session, Method::DELETE, "/api/v1/analysis", &[analysis_id])?;
        self.empty(req, messages::DELETE_RUN_FAILED).await
    }

    async fn analysis_stats(&self, session: &Session) -> StudioResult<AnalysisStats> {
        let req = self.request(session, Method::GET, "/api/v1/analysis/stats")?;
        self.json(req, messages::ANALYSIS_STATS_FAILED).await
    }

    async fn top_keywords(&self, session: &Session) -> StudioResult<Vec<KeywordCount>> {
        let req = self.request(session, Method::GET, "/api/v1/stats/top-keywords")?;
        self.json(req, messages::KEYWORD_STATS_FAILED).await
    }
}
