//! HTTP contract tests for the backend client.

use serde_json::json;
use studio_api::{ApiClient, USER_ID_HEADER};
use studio_core::analysis::model::{AnalysisRunCreate, AnalysisType, RunQuery};
use studio_core::analytics::model::CsvUpload;
use studio_core::channel::model::NewChannel;
use studio_core::channel::ChannelsPage;
use studio_core::combined::model::CombinedPlanRequest;
use studio_core::dashboard::DashboardForm;
use studio_core::planning::model::VideoConceptRequest;
use studio_core::planning::PlanningForm;
use studio_core::trends::model::TrendsRequest;
use studio_core::viral::ViralForm;
use studio_core::{messages, Session, StudioApi, StudioError, StudioResult, User};
use wiremock::matchers::{body_json, header, method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session() -> Session {
    Session::signed_in(User::new("user-1"))
}

fn trends_request() -> TrendsRequest {
    TrendsRequest {
        persona_keywords: vec!["副業".into(), "ビジネス".into()],
        platforms: vec!["YouTube".into()],
        max_results_per_platform: 10,
        channel_id: None,
    }
}

fn trends_response() -> serde_json::Value {
    json!({
        "platforms": [{
            "platform": "YouTube",
            "videos": [],
            "total_views": 0,
            "insights": []
        }],
        "overall_insights": ["短尺が伸びている"],
        "analyzed_at": "2025-01-02T00:00:00Z"
    })
}

fn stats() -> serde_json::Value {
    json!({ "total_runs": 2, "trends_runs": 1, "viral_runs": 1, "viral_videos": 5 })
}

#[tokio::test]
async fn test_missing_user_sends_nothing() {
    let server = MockServer::start().await;
    let client = ApiClient::new(&server.uri());

    let err = client
        .analyze_trends(&Session::new(), &trends_request())
        .await
        .unwrap_err();
    assert!(matches!(err, StudioError::MissingUserId));
    assert_eq!(err.to_string(), "ユーザーIDが必要です");

    let err = client.list_channels(&Session::new()).await.unwrap_err();
    assert!(matches!(err, StudioError::MissingUserId));

    let received = server.received_requests().await.unwrap();
    assert!(received.is_empty());
}

fn unit<T>(result: StudioResult<T>) -> StudioResult<()> {
    result.map(|_| ())
}

#[tokio::test]
async fn test_every_operation_requires_user() {
    let server = MockServer::start().await;
    let client = ApiClient::new(&server.uri());
    let s = Session::new();

    let strategy = PlanningForm {
        channel_name: "副業ch".into(),
        channel_genre: "ビジネス".into(),
        age_range: "20-30代".into(),
        gender: "男性".into(),
        interests: "副業".into(),
        pain_points: "時間がない".into(),
        goals: "月5万円".into(),
        content_preferences: "短尺".into(),
    }
    .build_request()
    .unwrap();
    let concepts = VideoConceptRequest {
        persona: strategy.persona.clone(),
        channel_genre: strategy.channel_genre.clone(),
        video_count: 5,
    };
    let viral = ViralForm {
        keywords: "副業".into(),
        ..Default::default()
    }
    .build_request()
    .unwrap();
    let combined = CombinedPlanRequest {
        trends_request: trends_request(),
        viral_request: viral.clone(),
        channel_genre: "ビジネス".into(),
        channel_name: None,
    };
    let dashboard = DashboardForm {
        keywords: "副業".into(),
        ..Default::default()
    }
    .build_request()
    .unwrap();
    let upload = CsvUpload::new("data.csv", b"date,views\n".to_vec()).unwrap();
    let new_channel = NewChannel {
        channel_url: "https://www.youtube.com/@handle".into(),
    };
    let run = AnalysisRunCreate {
        analysis_type: AnalysisType::Trends,
        keywords: vec!["副業".into()],
        platforms: vec!["YouTube".into()],
        summary: "副業".into(),
        channel_id: None,
        meta: json!({}),
        result: json!({}),
    };

    let results = vec![
        ("generate_full_plan", unit(client.generate_full_plan(&s, &strategy).await)),
        ("generate_strategy", unit(client.generate_strategy(&s, &strategy).await)),
        ("generate_video_concepts", unit(client.generate_video_concepts(&s, &concepts).await)),
        ("analyze_trends", unit(client.analyze_trends(&s, &trends_request()).await)),
        ("find_viral", unit(client.find_viral(&s, &viral).await)),
        ("analyze_csv", unit(client.analyze_csv(&s, &upload).await)),
        ("combined_plan", unit(client.combined_plan(&s, &combined).await)),
        ("dashboard_overview", unit(client.dashboard_overview(&s, &dashboard).await)),
        ("planning_report", unit(client.planning_report(&s, &strategy).await)),
        ("trends_report", unit(client.trends_report(&s, &trends_request()).await)),
        ("viral_report", unit(client.viral_report(&s, &viral).await)),
        ("analytics_report", unit(client.analytics_report(&s, &upload).await)),
        ("list_channels", unit(client.list_channels(&s).await)),
        ("add_channel", unit(client.add_channel(&s, &new_channel).await)),
        ("delete_channel", unit(client.delete_channel(&s, "ch-1").await)),
        ("channel_stats", unit(client.channel_stats(&s, "ch-1").await)),
        ("channel_analyses", unit(client.channel_analyses(&s, "ch-1").await)),
        ("channel_top_keywords", unit(client.channel_top_keywords(&s, "ch-1").await)),
        ("save_run", unit(client.save_run(&s, &run).await)),
        ("list_runs", unit(client.list_runs(&s, &RunQuery::default()).await)),
        ("get_run", unit(client.get_run(&s, "run-1").await)),
        ("delete_run", unit(client.delete_run(&s, "run-1").await)),
        ("analysis_stats", unit(client.analysis_stats(&s).await)),
        ("top_keywords", unit(client.top_keywords(&s).await)),
    ];

    assert_eq!(results.len(), 24);
    for (op, result) in results {
        assert!(
            matches!(result, Err(StudioError::MissingUserId)),
            "{op} did not require a user"
        );
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_ids_cannot_escape_their_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/channels/abc"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path_regex(r"^/api/v1/analysis/[^/]+$"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri());
    client.delete_run(&session(), "../channels/abc").await.unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received[0].url.path(), "/api/v1/analysis/..%2Fchannels%2Fabc");

    let err = client.delete_run(&session(), "..").await.unwrap_err();
    assert!(matches!(err, StudioError::Validation(_)));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_sends_user_header_and_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/trends/analyze"))
        .and(header(USER_ID_HEADER, "user-1"))
        .and(body_json(json!({
            "persona_keywords": ["副業", "ビジネス"],
            "platforms": ["YouTube"],
            "max_results_per_platform": 10
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(trends_response()))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri());
    let report = client
        .analyze_trends(&session(), &trends_request())
        .await
        .unwrap();

    assert_eq!(report.overall_insights, vec!["短尺が伸びている"]);
    assert_eq!(report.platforms[0].platform, "YouTube");
}

#[tokio::test]
async fn test_error_detail_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/trends/analyze"))
        .respond_with(
            ResponseTemplate::new(429).set_body_json(json!({ "detail": "YouTube APIの上限に達しました" })),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri());
    let err = client
        .analyze_trends(&session(), &trends_request())
        .await
        .unwrap_err();

    match &err {
        StudioError::Api { status, message } => {
            assert_eq!(*status, 429);
            assert_eq!(message, "YouTube APIの上限に達しました");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.to_string(), "YouTube APIの上限に達しました");
}

#[tokio::test]
async fn test_non_json_error_uses_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/viral/find"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/analysis/stats"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "boom" })))
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri());
    let request = studio_core::viral::ViralForm {
        keywords: "副業".into(),
        ..Default::default()
    }
    .build_request()
    .unwrap();

    let err = client.find_viral(&session(), &request).await.unwrap_err();
    assert_eq!(err.to_string(), messages::VIRAL_FAILED);

    let err = client.analysis_stats(&session()).await.unwrap_err();
    assert_eq!(err.to_string(), messages::ANALYSIS_STATS_FAILED);
}

#[tokio::test]
async fn test_undecodable_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/channels/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri());
    let err = client.list_channels(&session()).await.unwrap_err();
    assert!(matches!(err, StudioError::Decode(_)));
}

#[tokio::test]
async fn test_connection_failure_uses_fallback() {
    // Nothing listens on port 9 locally
    let client = ApiClient::new("http://127.0.0.1:9");
    let err = client.list_channels(&session()).await.unwrap_err();

    assert!(matches!(err, StudioError::Transport { .. }));
    assert_eq!(err.to_string(), messages::LIST_CHANNELS_FAILED);
}

#[tokio::test]
async fn test_list_runs_only_sends_set_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/analysis"))
        .and(query_param("analysis_type", "viral"))
        .and(query_param("limit", "10"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "items": [], "next_cursor": null })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri());
    let query = RunQuery {
        analysis_type: Some(AnalysisType::Viral),
        limit: Some(10),
        cursor: None,
    };
    let list = client.list_runs(&session(), &query).await.unwrap();
    assert!(list.items.is_empty());

    let received = server.received_requests().await.unwrap();
    let query = received[0].url.query().unwrap_or_default().to_string();
    assert!(!query.contains("cursor"));
}

#[tokio::test]
async fn test_csv_upload_is_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/analytics/analyze-csv"))
        .and(header(USER_ID_HEADER, "user-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "channel_metrics": { "total_views": 100 },
            "top_performers": [],
            "insights": [],
            "content_recommendations": [],
            "optimization_tips": [],
            "next_actions": []
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri());
    let upload = CsvUpload::new("january.csv", b"date,views\n2025-01-01,100\n".to_vec()).unwrap();
    let report = client.analyze_csv(&session(), &upload).await.unwrap();
    assert_eq!(report.channel_metrics.total_views, 100);

    let received = server.received_requests().await.unwrap();
    let content_type = received[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("multipart/form-data"));
    let body = String::from_utf8_lossy(&received[0].body);
    assert!(body.contains(r#"name="file""#));
    assert!(body.contains(r#"filename="january.csv""#));
    assert!(body.contains("2025-01-01,100"));
}

#[tokio::test]
async fn test_report_is_read_as_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/reports/trends-markdown"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/markdown; charset=utf-8")
                .set_body_string("# トレンド分析レポート\n"),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri());
    let body = client
        .trends_report(&session(), &trends_request())
        .await
        .unwrap();
    assert_eq!(body, "# トレンド分析レポート\n");
}

#[tokio::test]
async fn test_delete_with_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/analysis/run-1"))
        .and(header(USER_ID_HEADER, "user-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri());
    client.delete_run(&session(), "run-1").await.unwrap();
}

#[tokio::test]
async fn test_channel_details_issue_three_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/channels/ch-1/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stats()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/channels/ch-1/analyses"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "items": [], "next_cursor": null })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/channels/ch-1/top-keywords"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{ "keyword": "副業", "count": 2 }])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri());
    let mut page = ChannelsPage::new();
    page.toggle_details(&client, &session(), "ch-1").await;

    let details = page.details.result().unwrap();
    assert_eq!(details.stats.viral_videos, 5);
    assert_eq!(details.top_keywords[0].count, 2);
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_channel_details_failure_discards_partial_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/channels/ch-1/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stats()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/channels/ch-1/analyses"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/channels/ch-1/top-keywords"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri());
    let mut page = ChannelsPage::new();
    page.toggle_details(&client, &session(), "ch-1").await;

    assert!(page.details.result().is_none());
    assert_eq!(page.details.error(), messages::CHANNEL_ANALYSES_FAILED);
}
