//! Dashboard overview page.

pub mod model;

use tracing::debug;

use crate::api::StudioApi;
use crate::error::{StudioError, StudioResult};
use crate::keywords::parse_keywords;
use crate::messages;
use crate::page::PageState;
use crate::platform::{Platform, PlatformSelection};
use crate::session::Session;
use crate::viral::model::{DEFAULT_MAX_SUBSCRIBERS, DEFAULT_MIN_VIRAL_RATIO};
use model::{
    DashboardOverview, DashboardRequest, DEFAULT_MAX_RESULTS_PER_PLATFORM,
    DEFAULT_MAX_VIRAL_RESULTS,
};

#[derive(Debug, Clone)]
pub struct DashboardForm {
    pub keywords: String,
    pub channel_goal: String,
    pub platforms: PlatformSelection,
    pub include_viral: bool,
    pub min_viral_ratio: f64,
}

impl Default for DashboardForm {
    fn default() -> Self {
        Self {
            keywords: String::new(),
            channel_goal: String::new(),
            platforms: PlatformSelection::default(),
            include_viral: true,
            min_viral_ratio: DEFAULT_MIN_VIRAL_RATIO,
        }
    }
}

impl DashboardForm {
    pub fn build_request(&self) -> StudioResult<DashboardRequest> {
        let persona_keywords = parse_keywords(&self.keywords);
        if persona_keywords.is_empty() {
            return Err(StudioError::validation(messages::KEYWORDS_REQUIRED));
        }
        let platforms = self.platforms.names();
        if platforms.is_empty() {
            return Err(StudioError::validation(messages::PLATFORM_REQUIRED));
        }

        Ok(DashboardRequest {
            persona_keywords,
            channel_goal: Some(self.channel_goal.trim())
                .filter(|goal| !goal.is_empty())
                .map(str::to_string),
            platforms,
            max_results_per_platform: DEFAULT_MAX_RESULTS_PER_PLATFORM,
            include_viral: self.include_viral,
            viral_platforms: vec![Platform::YouTube.as_str().to_string()],
            min_viral_ratio: self.min_viral_ratio,
            max_subscribers: DEFAULT_MAX_SUBSCRIBERS,
            max_viral_results: DEFAULT_MAX_VIRAL_RESULTS,
        })
    }
}

#[derive(Debug, Default)]
pub struct DashboardPage {
    pub form: DashboardForm,
    pub state: PageState<DashboardRequest, DashboardOverview>,
}

impl DashboardPage {
    pub fn new(form: DashboardForm) -> Self {
        Self {
            form,
            state: PageState::new(),
        }
    }

    pub async fn submit<A: StudioApi>(&mut self, api: &A, session: &Session) {
        let request = match self.form.build_request() {
            Ok(request) => request,
            Err(e) => {
                self.state.reject(&e);
                return;
            }
        };

        debug!(
            keywords = ?request.persona_keywords,
            include_viral = request.include_viral,
            "Fetching dashboard overview"
        );
        self.state
            .submit(request, |req| async move {
                api.dashboard_overview(session, &req).await
            })
            .await;
    }
}
