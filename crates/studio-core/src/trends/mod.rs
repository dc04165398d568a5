//! Trend analysis page.

pub mod model;

use tracing::{debug, warn};

use crate::analysis::model::{AnalysisRunCreate, AnalysisType};
use crate::api::StudioApi;
use crate::channel::model::Channel;
use crate::error::{StudioError, StudioResult};
use crate::keywords::{self, parse_keywords};
use crate::messages;
use crate::page::{ActionState, PageState, Snapshot};
use crate::platform::PlatformSelection;
use crate::report::{MarkdownReport, ReportKind};
use crate::session::Session;
use model::{TrendsReport, TrendsRequest, DEFAULT_MAX_RESULTS_PER_PLATFORM};

/// Raw form input.
#[derive(Debug, Clone, Default)]
pub struct TrendsForm {
    /// Comma or newline separated keywords.
    pub keywords: String,
    pub platforms: PlatformSelection,
    /// Registered channel to attach saved runs to.
    pub channel_id: Option<String>,
}

impl TrendsForm {
    pub fn build_request(&self) -> StudioResult<TrendsRequest> {
        let request = self.build_unchecked()?;
        if request.platforms.is_empty() {
            return Err(StudioError::validation(messages::PLATFORM_REQUIRED));
        }
        Ok(request)
    }

    /// Request with keywords checked but the platform selection taken as is.
    pub(crate) fn build_unchecked(&self) -> StudioResult<TrendsRequest> {
        let persona_keywords = parse_keywords(&self.keywords);
        if persona_keywords.is_empty() {
            return Err(StudioError::validation(messages::KEYWORDS_REQUIRED));
        }
        Ok(TrendsRequest {
            persona_keywords,
            platforms: self.platforms.names(),
            max_results_per_platform: DEFAULT_MAX_RESULTS_PER_PLATFORM,
            channel_id: self
                .channel_id
                .clone()
                .filter(|id| !id.trim().is_empty()),
        })
    }
}

/// One-line summary for a saved trends run: first three keywords, then the
/// platforms.
pub fn summarize(request: &TrendsRequest) -> String {
    let parts: Vec<String> = [
        keywords::head(&request.persona_keywords, 3, " / "),
        request.platforms.join(", "),
    ]
    .into_iter()
    .filter(|s| !s.is_empty())
    .collect();

    if parts.is_empty() {
        messages::DEFAULT_TRENDS_SUMMARY.to_string()
    } else {
        parts.join(" | ")
    }
}

/// Build the save payload for a completed trends analysis.
pub fn run_to_save(
    snapshot: &Snapshot<TrendsRequest>,
    report: &TrendsReport,
) -> StudioResult<AnalysisRunCreate> {
    let request = snapshot.request();
    Ok(AnalysisRunCreate {
        analysis_type: AnalysisType::Trends,
        keywords: request.persona_keywords.clone(),
        platforms: request.platforms.clone(),
        summary: summarize(request),
        channel_id: request.channel_id.clone(),
        meta: serde_json::to_value(request)?,
        result: serde_json::to_value(report)?,
    })
}

#[derive(Debug, Default)]
pub struct TrendsPage {
    pub form: TrendsForm,
    pub state: PageState<TrendsRequest, TrendsReport>,
    pub download: ActionState,
    pub save: ActionState,
    /// Channels offered in the channel selector.
    pub channels: Vec<Channel>,
}

impl TrendsPage {
    pub fn new(form: TrendsForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    /// Fill the channel selector. Failures only leave the selector empty.
    pub async fn load_channels<A: StudioApi>(&mut self, api: &A, session: &Session) {
        if !session.is_signed_in() {
            return;
        }
        match api.list_channels(session).await {
            Ok(channels) => self.channels = channels,
            Err(e) => warn!(error = %e, "Failed to fetch channels"),
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

        debug!(keywords = ?request.persona_keywords, "Analyzing trends");
        self.state
            .submit(request, |req| async move {
                api.analyze_trends(session, &req).await
            })
            .await;
    }

    /// Fetch the markdown report for the last successful analysis.
    /// Does nothing when there is none.
    pub async fn download_report<A: StudioApi>(
        &mut self,
        api: &A,
        session: &Session,
    ) -> Option<MarkdownReport> {
        let snapshot = self.state.snapshot()?.clone();
        self.download.start();
        match api.trends_report(session, &snapshot).await {
            Ok(body) => {
                self.download.succeed("");
                Some(MarkdownReport::today(ReportKind::Trends, body))
            }
            Err(e) => {
                self.download.fail(e.to_string());
                None
            }
        }
    }

    /// Persist the last successful analysis to the history.
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
                debug!(run_id = %run.id, "Saved trends analysis");
                self.save.succeed(messages::ANALYSIS_SAVED);
            }
            Err(e) => self.save.fail(e.to_string()),
        }
    }
}
