//! Channel planning page.

pub mod model;

use tracing::debug;

use crate::api::StudioApi;
use crate::error::{StudioError, StudioResult};
use crate::keywords::parse_keywords;
use crate::messages;
use crate::page::{ActionState, PageState};
use crate::report::{MarkdownReport, ReportKind};
use crate::session::Session;
use model::{
    ChannelStrategy, Persona, PlanningResult, StrategyRequest, VideoConcept, VideoConceptRequest,
    DEFAULT_VIDEO_COUNT, MAX_VIDEO_COUNT,
};

/// What the planner should generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanningMode {
    /// Strategy plus a four-week calendar.
    #[default]
    FullPlan,
    Strategy,
    VideoConcepts { count: u8 },
}

impl PlanningMode {
    pub fn concepts() -> Self {
        PlanningMode::VideoConcepts {
            count: DEFAULT_VIDEO_COUNT,
        }
    }
}

/// Raw form input. List fields are comma separated.
#[derive(Debug, Clone, Default)]
pub struct PlanningForm {
    pub channel_name: String,
    pub channel_genre: String,
    pub age_range: String,
    pub gender: String,
    pub interests: String,
    pub pain_points: String,
    pub goals: String,
    pub content_preferences: String,
}

impl PlanningForm {
    pub fn build_persona(&self) -> StudioResult<Persona> {
        let persona = Persona {
            age_range: self.age_range.trim().to_string(),
            gender: self.gender.trim().to_string(),
            interests: parse_keywords(&self.interests),
            pain_points: parse_keywords(&self.pain_points),
            goals: parse_keywords(&self.goals),
            content_preferences: self.content_preferences.trim().to_string(),
        };
        if persona.age_range.is_empty()
            || persona.gender.is_empty()
            || persona.interests.is_empty()
            || persona.pain_points.is_empty()
            || persona.goals.is_empty()
            || persona.content_preferences.is_empty()
        {
            return Err(StudioError::validation(messages::PERSONA_REQUIRED));
        }
        Ok(persona)
    }

    pub fn build_request(&self) -> StudioResult<StrategyRequest> {
        let channel_genre = self.channel_genre.trim();
        if channel_genre.is_empty() {
            return Err(StudioError::validation(messages::GENRE_REQUIRED));
        }
        let persona = self.build_persona()?;
        let channel_name = Some(self.channel_name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        Ok(StrategyRequest {
            persona,
            channel_genre: channel_genre.to_string(),
            channel_name,
        })
    }
}

/// Result shown by the planning page, one variant per mode.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanningOutput {
    Full(PlanningResult),
    Strategy(ChannelStrategy),
    Concepts(Vec<VideoConcept>),
}

impl PlanningOutput {
    pub fn strategy(&self) -> Option<&ChannelStrategy> {
        match self {
            PlanningOutput::Full(plan) => Some(&plan.strategy),
            PlanningOutput::Strategy(strategy) => Some(strategy),
            PlanningOutput::Concepts(_) => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct PlanningPage {
    pub form: PlanningForm,
    pub mode: PlanningMode,
    pub state: PageState<StrategyRequest, PlanningOutput>,
    pub download: ActionState,
}

impl PlanningPage {
    pub fn new(form: PlanningForm, mode: PlanningMode) -> Self {
        Self {
            form,
            mode,
            ..Self::default()
        }
    }

    pub async fn submit<A: StudioApi>(&mut self, api: &A, session: &Session) {
        let request = match self.validated() {
            Ok(request) => request,
            Err(e) => {
                self.state.reject(&e);
                return;
            }
        };

        let mode = self.mode;
        debug!(genre = %request.channel_genre, ?mode, "Generating plan");
        self.state
            .submit(request, |req| async move {
                match mode {
                    PlanningMode::FullPlan => api
                        .generate_full_plan(session, &req)
                        .await
                        .map(PlanningOutput::Full),
                    PlanningMode::Strategy => api
                        .generate_strategy(session, &req)
                        .await
                        .map(PlanningOutput::Strategy),
                    PlanningMode::VideoConcepts { count } => {
                        let concepts = VideoConceptRequest {
                            persona: req.persona.clone(),
                            channel_genre: req.channel_genre.clone(),
                            video_count: count,
                        };
                        api.generate_video_concepts(session, &concepts)
                            .await
                            .map(PlanningOutput::Concepts)
                    }
                }
            })
            .await;
    }

    fn validated(&self) -> StudioResult<StrategyRequest> {
        if let PlanningMode::VideoConcepts { count } = self.mode {
            if !(1..=MAX_VIDEO_COUNT).contains(&count) {
                return Err(StudioError::validation(messages::VIDEO_COUNT_RANGE));
            }
        }
        self.form.build_request()
    }

    /// Fetch the markdown planning report for the last successful request.
    pub async fn download_report<A: StudioApi>(
        &mut self,
        api: &A,
        session: &Session,
    ) -> Option<MarkdownReport> {
        let snapshot = self.state.snapshot()?.clone();
        self.download.start();
        match api.planning_report(session, &snapshot).await {
            Ok(body) => {
                self.download.succeed("");
                Some(MarkdownReport::today(ReportKind::Planning, body))
            }
            Err(e) => {
                self.download.fail(e.to_string());
                None
            }
        }
    }
}
