//! Saved analysis history and detail pages.

pub mod model;

use tracing::{debug, warn};

use crate::api::StudioApi;
use crate::error::StudioError;
use crate::messages;
use crate::page::PageState;
use crate::session::Session;
use model::{AnalysisRun, AnalysisStats, AnalysisType, KeywordCount, RunQuery};

pub const DEFAULT_HISTORY_LIMIT: u32 = 50;

#[derive(Debug)]
pub struct HistoryPage {
    pub runs: Vec<AnalysisRun>,
    /// Cursor for the next page; `None` once everything is loaded.
    pub next_cursor: Option<String>,
    pub loading: bool,
    pub error: String,
    pub filter: Option<AnalysisType>,
    pub limit: u32,
    pub stats: Option<AnalysisStats>,
    pub top_keywords: Vec<KeywordCount>,
}

impl Default for HistoryPage {
    fn default() -> Self {
        Self {
            runs: Vec::new(),
            next_cursor: None,
            loading: false,
            error: String::new(),
            filter: None,
            limit: DEFAULT_HISTORY_LIMIT,
            stats: None,
            top_keywords: Vec::new(),
        }
    }
}

impl HistoryPage {
    pub fn new(filter: Option<AnalysisType>, limit: u32) -> Self {
        Self {
            filter,
            limit,
            ..Self::default()
        }
    }

    fn query(&self, cursor: Option<String>) -> RunQuery {
        RunQuery {
            analysis_type: self.filter,
            limit: Some(self.limit),
            cursor,
        }
    }

    /// Load the first page, replacing whatever was shown.
    pub async fn load<A: StudioApi>(&mut self, api: &A, session: &Session) {
        self.runs.clear();
        self.next_cursor = None;
        self.fetch(api, session, None).await;
    }

    /// Append the next page. Does nothing when there is no cursor.
    pub async fn load_more<A: StudioApi>(&mut self, api: &A, session: &Session) {
        let Some(cursor) = self.next_cursor.clone() else {
            return;
        };
        self.fetch(api, session, Some(cursor)).await;
    }

    async fn fetch<A: StudioApi>(&mut self, api: &A, session: &Session, cursor: Option<String>) {
        self.loading = true;
        self.error.clear();
        let query = self.query(cursor);
        match api.list_runs(session, &query).await {
            Ok(list) => {
                debug!(count = list.items.len(), more = list.next_cursor.is_some(), "Loaded runs");
                self.runs.extend(list.items);
                self.next_cursor = list.next_cursor;
            }
            Err(e) => self.error = e.to_string(),
        }
        self.loading = false;
    }

    /// Load aggregated counts and the most used keywords.
    pub async fn load_stats<A: StudioApi>(&mut self, api: &A, session: &Session) {
        self.error.clear();
        match tokio::try_join!(api.analysis_stats(session), api.top_keywords(session)) {
            Ok((stats, keywords)) => {
                self.stats = Some(stats);
                self.top_keywords = keywords;
            }
            Err(e) => {
                warn!(error = %e, "Failed to load analysis stats");
                self.error = e.to_string();
            }
        }
    }

    pub async fn delete_run<A: StudioApi>(&mut self, api: &A, session: &Session, run_id: &str) {
        self.error.clear();
        match api.delete_run(session, run_id).await {
            Ok(()) => self.runs.retain(|run| run.id != run_id),
            Err(e) => self.error = e.to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct AnalysisDetailPage {
    pub analysis_id: String,
    pub state: PageState<String, AnalysisRun>,
}

impl AnalysisDetailPage {
    pub fn new(analysis_id: impl Into<String>) -> Self {
        Self {
            analysis_id: analysis_id.into(),
            state: PageState::new(),
        }
    }

    pub async fn load<A: StudioApi>(&mut self, api: &A, session: &Session) {
        let id = self.analysis_id.trim().to_string();
        if id.is_empty() {
            self.state
                .reject(&StudioError::validation(messages::ANALYSIS_ID_REQUIRED));
            return;
        }
        self.state
            .submit(id, |id| async move { api.get_run(session, &id).await })
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageView;
    use crate::testing::{self, FakeApi};
    use serde_json::json;

    #[tokio::test]
    async fn test_first_page_query() {
        let api = FakeApi::new().respond(
            "list_runs",
            json!({ "items": [testing::run_json("r1", "trends")], "next_cursor": null }),
        );
        let mut page = HistoryPage::new(Some(AnalysisType::Viral), 20);

        page.load(&api, &testing::session()).await;

        assert_eq!(
            api.body("list_runs").unwrap(),
            json!({ "analysis_type": "viral", "limit": "20" })
        );
        assert_eq!(page.runs.len(), 1);
        assert!(page.next_cursor.is_none());
    }

    #[tokio::test]
    async fn test_load_more_appends_and_stops_without_cursor() {
        let api = FakeApi::new().respond(
            "list_runs",
            json!({ "items": [testing::run_json("r2", "viral")], "next_cursor": null }),
        );
        let mut page = HistoryPage::default();
        page.runs = vec![serde_json::from_value(testing::run_json("r1", "trends")).unwrap()];
        page.next_cursor = Some("2025-01-05T10:00:00Z".into());

        page.load_more(&api, &testing::session()).await;
        assert_eq!(
            api.body("list_runs").unwrap()["cursor"],
            json!("2025-01-05T10:00:00Z")
        );
        assert_eq!(page.runs.len(), 2);

        page.load_more(&api, &testing::session()).await;
        assert_eq!(api.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_stats_and_keywords() {
        let api = FakeApi::new()
            .respond("analysis_stats", testing::stats_json())
            .respond("top_keywords", json!([{ "keyword": "副業", "count": 3 }]));
        let mut page = HistoryPage::default();

        page.load_stats(&api, &testing::session()).await;

        assert_eq!(page.stats.as_ref().unwrap().viral_videos, 8);
        assert_eq!(page.top_keywords.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_run() {
        let api = FakeApi::new()
            .respond(
                "list_runs",
                json!({ "items": [
                    testing::run_json("r1", "trends"),
                    testing::run_json("r2", "viral")
                ] }),
            )
            .respond("delete_run", json!(null));
        let mut page = HistoryPage::default();
        let session = testing::session();

        page.load(&api, &session).await;
        page.delete_run(&api, &session, "r1").await;

        assert_eq!(page.runs.len(), 1);
        assert_eq!(page.runs[0].id, "r2");
    }

    #[tokio::test]
    async fn test_retries_clear_previous_error() {
        let session = testing::session();
        let mut page = HistoryPage::default();
        page.runs = vec![serde_json::from_value(testing::run_json("r1", "trends")).unwrap()];

        let failing = FakeApi::new()
            .fail("delete_run", messages::DELETE_RUN_FAILED)
            .fail("analysis_stats", messages::ANALYSIS_STATS_FAILED)
            .respond("top_keywords", json!([]));
        page.delete_run(&failing, &session, "r1").await;
        assert_eq!(page.error, messages::DELETE_RUN_FAILED);

        let working = FakeApi::new()
            .respond("delete_run", json!(null))
            .respond("analysis_stats", testing::stats_json())
            .respond("top_keywords", json!([]));
        page.delete_run(&working, &session, "r1").await;
        assert_eq!(page.error, "");
        assert!(page.runs.is_empty());

        page.load_stats(&failing, &session).await;
        assert_eq!(page.error, messages::ANALYSIS_STATS_FAILED);
        page.load_stats(&working, &session).await;
        assert_eq!(page.error, "");
        assert_eq!(page.stats.as_ref().unwrap().total_runs, 3);
    }

    #[tokio::test]
    async fn test_history_requires_user() {
        let api = FakeApi::new();
        let mut page = HistoryPage::default();

        page.load(&api, &Session::new()).await;

        assert_eq!(page.error, messages::USER_ID_REQUIRED);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_detail_requires_id() {
        let api = FakeApi::new();
        let mut page = AnalysisDetailPage::new(" ");

        page.load(&api, &testing::session()).await;

        assert_eq!(page.state.view(), PageView::Error(messages::ANALYSIS_ID_REQUIRED));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_detail_loads_run() {
        let api = FakeApi::new().respond("get_run", testing::run_json("r9", "viral"));
        let mut page = AnalysisDetailPage::new("r9");

        page.load(&api, &testing::session()).await;

        let run = page.state.result().unwrap();
        assert_eq!(run.id, "r9");
        assert_eq!(run.analysis_type, AnalysisType::Viral);
        assert_eq!(api.body("get_run").unwrap(), json!("r9"));
    }
}
