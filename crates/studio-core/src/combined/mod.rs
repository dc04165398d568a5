//! Combined trend and viral planning page.

pub mod model;

use tracing::debug;

use crate::api::StudioApi;
use crate::error::{StudioError, StudioResult};
use crate::keywords::parse_keywords;
use crate::messages;
use crate::page::PageState;
use crate::planning::model::PlanningResult;
use crate::session::Session;
use crate::trends::TrendsForm;
use crate::viral::ViralForm;
use model::CombinedPlanRequest;

#[derive(Debug, Clone, Default)]
pub struct CombinedForm {
    pub trends: TrendsForm,
    pub viral: ViralForm,
    pub channel_genre: String,
    pub channel_name: String,
}

impl CombinedForm {
    pub fn build_request(&self) -> StudioResult<CombinedPlanRequest> {
        if parse_keywords(&self.trends.keywords).is_empty()
            || parse_keywords(&self.viral.keywords).is_empty()
        {
            return Err(StudioError::validation(messages::BOTH_KEYWORDS_REQUIRED));
        }
        let channel_genre = self.channel_genre.trim();
        if channel_genre.is_empty() {
            return Err(StudioError::validation(messages::GENRE_REQUIRED));
        }

        Ok(CombinedPlanRequest {
            trends_request: self.trends.build_unchecked()?,
            viral_request: self.viral.build_request()?,
            channel_genre: channel_genre.to_string(),
            channel_name: Some(self.channel_name.trim())
                .filter(|name| !name.is_empty())
                .map(str::to_string),
        })
    }
}

#[derive(Debug, Default)]
pub struct CombinedPlanningPage {
    pub form: CombinedForm,
    pub state: PageState<CombinedPlanRequest, PlanningResult>,
}

impl CombinedPlanningPage {
    pub fn new(form: CombinedForm) -> Self {
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

        debug!(genre = %request.channel_genre, "Generating combined plan");
        self.state
            .submit(request, |req| async move { api.combined_plan(session, &req).await })
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageView;
    use crate::platform::{Platform, PlatformSelection};
    use crate::testing::{self, FakeApi};
    use serde_json::json;

    fn form(trend: &str, viral: &str, genre: &str) -> CombinedForm {
        let mut form = CombinedForm {
            channel_genre: genre.into(),
            ..CombinedForm::default()
        };
        form.trends.keywords = trend.into();
        form.viral.keywords = viral.into();
        form
    }

    #[tokio::test]
    async fn test_both_keyword_lists_required() {
        let api = FakeApi::new();
        let mut page = CombinedPlanningPage::new(form("副業", " , ", "ビジネス"));

        page.submit(&api, &testing::session()).await;

        assert_eq!(page.state.error(), messages::BOTH_KEYWORDS_REQUIRED);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_genre_required() {
        let api = FakeApi::new();
        let mut page = CombinedPlanningPage::new(form("副業", "副業", ""));

        page.submit(&api, &testing::session()).await;

        assert_eq!(page.state.error(), messages::GENRE_REQUIRED);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_request_nests_both_requests() {
        let api = FakeApi::new().respond("combined_plan", testing::planning_result_json());
        let mut page = CombinedPlanningPage::new(form("副業, 投資", "在宅", "ビジネス"));
        page.form.trends.platforms = PlatformSelection::only(&[Platform::TikTok]);
        page.form.viral.min_viral_ratio = 5.0;

        page.submit(&api, &testing::session()).await;

        let body = api.body("combined_plan").unwrap();
        assert_eq!(body["trends_request"]["persona_keywords"], json!(["副業", "投資"]));
        assert_eq!(body["trends_request"]["platforms"], json!(["TikTok"]));
        assert_eq!(body["trends_request"]["max_results_per_platform"], json!(10));
        assert_eq!(body["viral_request"]["min_viral_ratio"], json!(5.0));
        assert_eq!(body["viral_request"]["platforms"], json!(["YouTube"]));
        assert_eq!(body["channel_name"], json!(null));
        assert!(matches!(page.state.view(), PageView::Ready(_)));
    }

    #[tokio::test]
    async fn test_empty_platform_selection_is_sent_as_is() {
        let api = FakeApi::new().respond("combined_plan", testing::planning_result_json());
        let mut page = CombinedPlanningPage::new(form("副業", "在宅", "ビジネス"));
        page.form.trends.platforms = PlatformSelection::none();

        page.submit(&api, &testing::session()).await;

        let body = api.body("combined_plan").unwrap();
        assert_eq!(body["trends_request"]["platforms"], json!([]));
        assert!(matches!(page.state.view(), PageView::Ready(_)));
    }

    #[tokio::test]
    async fn test_backend_error() {
        let api = FakeApi::new().fail("combined_plan", messages::COMBINED_PLAN_FAILED);
        let mut page = CombinedPlanningPage::new(form("a", "b", "c"));

        page.submit(&api, &testing::session()).await;

        assert_eq!(page.state.view(), PageView::Error(messages::COMBINED_PLAN_FAILED));
    }
}
