//! Viral video finder page.
//!
//! Looks for videos whose view count is many times the channel's subscriber
//! count. Only YouTube is searched.

pub mod model;

use tracing::debug;

use crate::analysis::model::{AnalysisRunCreate, AnalysisType};
use crate::api::StudioApi;
use crate::error::{StudioError, StudioResult};
use crate::keywords::{self, parse_keywords};
use crate::messages;
use crate::page::{ActionState, PageState, Snapshot};
use crate::platform::Platform;
use crate::report::{MarkdownReport, ReportKind};
use crate::session::Session;
use model::{
    ViralReport, ViralRequest, DEFAULT_MAX_RESULTS, DEFAULT_MAX_SUBSCRIBERS,
    DEFAULT_MIN_VIRAL_RATIO,
};

#[derive(Debug, Clone)]
pub struct ViralForm {
    pub keywords: String,
    pub min_viral_ratio: f64,
    pub max_subscribers: u64,
    pub channel_id: Option<String>,
}

impl Default for ViralForm {
    fn default() -> Self {
        Self {
            keywords: String::new(),
            min_viral_ratio: DEFAULT_MIN_VIRAL_RATIO,
            max_subscribers: DEFAULT_MAX_SUBSCRIBERS,
            channel_id: None,
        }
    }
}

impl ViralForm {
    pub fn build_request(&self) -> StudioResult<ViralRequest> {
        let keywords = parse_keywords(&self.keywords);
        if keywords.is_empty() {
            return Err(StudioError::validation(messages::KEYWORDS_REQUIRED));
        }
        Ok(ViralRequest {
            keywords,
            min_viral_ratio: self.min_viral_ratio,
            max_subscribers: self.max_subscribers,
            platforms: vec![Platform::YouTube.as_str().to_string()],
            max_results: DEFAULT_MAX_RESULTS,
            channel_id: self
                .channel_id
                .clone()
                .filter(|id| !id.trim().is_empty()),
        })
    }
}

/// Summary for a saved viral run: first three keywords, then the best ratio
/// found.
pub fn summarize(request: &ViralRequest, report: &ViralReport) -> String {
    let mut parts = Vec::new();
    let head = keywords::head(&request.keywords, 3, " / ");
    if !head.is_empty() {
        parts.push(head);
    }
    if let Some(max) = report.highest_ratio() {
        parts.push(format!("最高比率 {max:.1}x"));
    }

    if parts.is_empty() {
        messages::DEFAULT_VIRAL_SUMMARY.to_string()
    } else {
        parts.join(" | ")
    }
}

pub fn run_to_save(
    snapshot: &Snapshot<ViralRequest>,
    report: &ViralReport,
) -> StudioResult<AnalysisRunCreate> {
    let request = snapshot.request();
    Ok(AnalysisRunCreate {
        analysis_type: AnalysisType::Viral,
        keywords: request.keywords.clone(),
        platforms: request.platforms.clone(),
        summary: summarize(request, report),
        channel_id: request.channel_id.clone(),
        meta: serde_json::to_value(request)?,
        result: serde_json::to_value(report)?,
    })
}

#[derive(Debug, Default)]
pub struct ViralPage {
    pub form: ViralForm,
    pub state: PageState<ViralRequest, ViralReport>,
    pub download: ActionState,
    pub save: ActionState,
}

impl ViralPage {
    pub fn new(form: ViralForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    pub async fn submit<A: StudioApi>(&mut self, api: &A, session: &Session) {
        self.download.clear();
        self.save.clear();
        let request = match self.form.build_request() {
            Ok(request) => request,
            Err(e) => {
                self.state.reject(&e);
                return;
            }
        };

        debug!(
            keywords = ?request.keywords,
            min_ratio = request.min_viral_ratio,
            "Searching viral videos"
        );
        self.state
            .submit(request, |req| async move { api.find_viral(session, &req).await })
            .await;
    }

    pub async fn download_report<A: StudioApi>(
        &mut self,
        api: &A,
        session: &Session,
    ) -> Option<MarkdownReport> {
        let snapshot = self.state.snapshot()?.clone();
        self.download.start();
        match api.viral_report(session, &snapshot).await {
            Ok(body) => {
                self.download.succeed("");
                Some(MarkdownReport::today(ReportKind::Viral, body))
            }
            Err(e) => {
                self.download.fail(e.to_string());
                None
            }
        }
    }

    pub async fn save_analysis<A: StudioApi>(&mut self, api: &A, session: &Session) {
        let (Some(snapshot), Some(report)) = (self.state.snapshot(), self.state.result()) else {
            return;
        };
        if !session.is_signed_in() {
            self.save.fail(messages::LOGIN_REQUIRED_TO_SAVE);
            return;
        }

        self.save.start();
        let outcome = match run_to_save(snapshot, report) {
            Ok(payload) => api.save_run(session, &payload).await,
            Err(e) => Err(e),
        };
        match outcome {
            Ok(run) => {
                debug!(run_id = %run.id, "Saved viral analysis");
                self.save.succeed(messages::ANALYSIS_SAVED);
            }
            Err(e) => self.save.fail(e.to_string()),
        }
    }
}
