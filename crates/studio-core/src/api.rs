//! The backend seam.
//!
//! Pages talk to the backend only through [`StudioApi`]. The HTTP
//! implementation lives in the `studio-api` crate; tests use an in-memory
//! fake.
//!
//! Contract for every method: the session must hold a user, otherwise the
//! call fails with [`StudioError::MissingUserId`](crate::StudioError) before
//! anything is sent. Non-success responses become
//! [`StudioError::Api`](crate::StudioError) carrying the server's `detail`
//! or an operation-specific fallback message.

use async_trait::async_trait;

use crate::analysis::model::{
    AnalysisRun, AnalysisRunCreate, AnalysisRunList, AnalysisStats, KeywordCount, RunQuery,
};
use crate::analytics::model::{AnalyticsReport, CsvUpload};
use crate::channel::model::{Channel, NewChannel};
use crate::combined::model::CombinedPlanRequest;
use crate::dashboard::model::{DashboardOverview, DashboardRequest};
use crate::error::StudioResult;
use crate::planning::model::{
    ChannelStrategy, PlanningResult, StrategyRequest, VideoConcept, VideoConceptRequest,
};
use crate::session::Session;
use crate::trends::model::{TrendsReport, TrendsRequest};
use crate::viral::model::{ViralReport, ViralRequest};

#[async_trait]
pub trait StudioApi: Send + Sync {
    // Planning
    async fn generate_full_plan(
        &self,
        session: &Session,
        request: &StrategyRequest,
    ) -> StudioResult<PlanningResult>;

    async fn generate_strategy(
        &self,
        session: &Session,
        request: &StrategyRequest,
    ) -> StudioResult<ChannelStrategy>;

    async fn generate_video_concepts(
        &self,
        session: &Session,
        request: &VideoConceptRequest,
    ) -> StudioResult<Vec<VideoConcept>>;

    // Research
    async fn analyze_trends(
        &self,
        session: &Session,
        request: &TrendsRequest,
    ) -> StudioResult<TrendsReport>;

    async fn find_viral(&self, session: &Session, request: &ViralRequest)
        -> StudioResult<ViralReport>;

    async fn analyze_csv(
        &self,
        session: &Session,
        upload: &CsvUpload,
    ) -> StudioResult<AnalyticsReport>;

    async fn combined_plan(
        &self,
        session: &Session,
        request: &CombinedPlanRequest,
    ) -> StudioResult<PlanningResult>;

    async fn dashboard_overview(
        &self,
        session: &Session,
        request: &DashboardRequest,
    ) -> StudioResult<DashboardOverview>;

    // Markdown reports (raw text bodies)
    async fn planning_report(&self, session: &Session, request: &StrategyRequest)
        -> StudioResult<String>;

    async fn trends_report(&self, session: &Session, request: &TrendsRequest)
        -> StudioResult<String>;

    async fn viral_report(&self, session: &Session, request: &ViralRequest)
        -> StudioResult<String>;

    async fn analytics_report(&self, session: &Session, upload: &CsvUpload)
        -> StudioResult<String>;

    // Channels
    async fn list_channels(&self, session: &Session) -> StudioResult<Vec<Channel>>;

    async fn add_channel(&self, session: &Session, channel: &NewChannel) -> StudioResult<Channel>;

    async fn delete_channel(&self, session: &Session, channel_id: &str) -> StudioResult<()>;

    async fn channel_stats(&self, session: &Session, channel_id: &str)
        -> StudioResult<AnalysisStats>;

    async fn channel_analyses(
        &self,
        session: &Session,
        channel_id: &str,
    ) -> StudioResult<AnalysisRunList>;

    async fn channel_top_keywords(
        &self,
        session: &Session,
        channel_id: &str,
    ) -> StudioResult<Vec<KeywordCount>>;

    // Analysis history
    async fn save_run(&self, session: &Session, run: &AnalysisRunCreate)
        -> StudioResult<AnalysisRun>;

    async fn list_runs(&self, session: &Session, query: &RunQuery)
        -> StudioResult<AnalysisRunList>;

    async fn get_run(&self, session: &Session, analysis_id: &str) -> StudioResult<AnalysisRun>;

    async fn delete_run(&self, session: &Session, analysis_id: &str) -> StudioResult<()>;

    async fn analysis_stats(&self, session: &Session) -> StudioResult<AnalysisStats>;

    async fn top_keywords(&self, session: &Session) -> StudioResult<Vec<KeywordCount>>;
}
