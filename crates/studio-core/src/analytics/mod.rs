//! CSV analytics page.
//!
//! Uploads a YouTube Studio CSV export and shows the backend's analysis.
//! The uploaded file is kept as the snapshot, so the report download sends
//! the same bytes again.

pub mod model;

use std::path::Path;

use tracing::debug;

use crate::api::StudioApi;
use crate::error::{StudioError, StudioResult};
use crate::messages;
use crate::page::{ActionState, PageState};
use crate::report::{MarkdownReport, ReportKind};
use crate::session::Session;
use model::{AnalyticsReport, CsvUpload};

#[derive(Debug, Default)]
pub struct AnalyticsPage {
    /// File picked for the next submission.
    pub file: Option<CsvUpload>,
    pub state: PageState<CsvUpload, AnalyticsReport>,
    pub download: ActionState,
}

impl AnalyticsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_file(&mut self, upload: CsvUpload) {
        debug!(file = %upload.file_name, size = upload.bytes.len(), "CSV selected");
        self.file = Some(upload);
    }

    /// Read and select a file from disk. A non-CSV name is rejected and the
    /// previous selection is kept.
    pub fn select_path(&mut self, path: &Path) -> StudioResult<()> {
        let upload = CsvUpload::from_path(path)?;
        self.select_file(upload);
        Ok(())
    }

    pub async fn submit<A: StudioApi>(&mut self, api: &A, session: &Session) {
        let upload = match self.file.as_ref() {
            None => Err(StudioError::validation(messages::CSV_REQUIRED)),
            Some(upload) if upload.is_empty() => {
                Err(StudioError::validation(messages::CSV_EMPTY))
            }
            Some(upload) => Ok(upload.clone()),
        };
        let upload = match upload {
            Ok(upload) => upload,
            Err(e) => {
                self.state.reject(&e);
                return;
            }
        };

        self.state
            .submit(upload, |file| async move { api.analyze_csv(session, &file).await })
            .await;
    }

    /// Fetch the markdown report for the last analysed file.
    pub async fn download_report<A: StudioApi>(
        &mut self,
        api: &A,
        session: &Session,
    ) -> Option<MarkdownReport> {
        let snapshot = self.state.snapshot()?.clone();
        self.download.start();
        match api.analytics_report(session, &snapshot).await {
            Ok(body) => {
                self.download.succeed("");
                Some(MarkdownReport::today(ReportKind::Analytics, body))
            }
            Err(e) => {
                self.download.fail(e.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{self, FakeApi};
    use serde_json::json;

    fn report_json() -> serde_json::Value {
        json!({
            "channel_metrics": {
                "total_views": 50000,
                "total_watch_time_hours": 1200.5,
                "average_view_duration_seconds": 95.0,
                "subscriber_change": -12,
                "total_videos_analyzed": 30,
                "date_range": "2025-01-01 - 2025-01-31"
            },
            "top_performers": [],
            "insights": [{
                "category": "視聴維持",
                "priority": "高",
                "finding": "冒頭で離脱",
                "recommendation": "フックを短く",
                "expected_impact": "維持率+10%"
            }],
            "content_recommendations": [],
            "optimization_tips": [],
            "next_actions": ["サムネ改善"]
        })
    }

    fn csv(name: &str, body: &str) -> CsvUpload {
        CsvUpload::new(name, body.as_bytes().to_vec()).unwrap()
    }

    #[test]
    fn test_non_csv_is_rejected() {
        let err = CsvUpload::new("export.xlsx", b"a,b".to_vec()).unwrap_err();
        assert_eq!(err.to_string(), messages::CSV_ONLY);
        assert!(CsvUpload::new("EXPORT.CSV", b"a,b".to_vec()).is_ok());
    }

    #[tokio::test]
    async fn test_submit_without_file() {
        let api = FakeApi::new();
        let mut page = AnalyticsPage::new();

        page.submit(&api, &testing::session()).await;

        assert_eq!(page.state.error(), messages::CSV_REQUIRED);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_file() {
        let api = FakeApi::new();
        let mut page = AnalyticsPage::new();
        page.select_file(csv("empty.csv", ""));

        page.submit(&api, &testing::session()).await;

        assert_eq!(page.state.error(), messages::CSV_EMPTY);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_report_reuses_analysed_file() {
        let api = FakeApi::new()
            .respond("analyze_csv", report_json())
            .respond("analytics_report", json!("# アナリティクス"));
        let mut page = AnalyticsPage::new();
        let session = testing::session();
        page.select_file(csv("january.csv", "date,views\n2025-01-01,100\n"));

        page.submit(&api, &session).await;
        let metrics = &page.state.result().unwrap().channel_metrics;
        assert_eq!(metrics.subscriber_change, -12);

        page.select_file(csv("february.csv", "date,views\n"));
        let report = page.download_report(&api, &session).await.unwrap();

        assert_eq!(report.body, "# アナリティクス");
        assert!(report.file_name.starts_with("アナリティクスレポート_"));
        assert_eq!(api.body("analytics_report").unwrap(), json!("january.csv"));
    }

    #[test]
    fn test_select_path_rejects_other_extensions() {
        let mut page = AnalyticsPage::new();
        let err = page.select_path(Path::new("/tmp/report.txt")).unwrap_err();
        assert_eq!(err.to_string(), messages::CSV_ONLY);
        assert!(page.file.is_none());
    }
}
