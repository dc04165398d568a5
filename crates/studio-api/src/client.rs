//! Low-level request plumbing shared by every operation.
//!
//! Each call goes through the same steps: check the session for a user,
//! build the request with the `X-User-Id` header, send it, and turn a
//! non-success response into [`StudioError::Api`] using the server's
//! `detail` field or the operation's fallback message.

use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use studio_core::analytics::model::CsvUpload;
use studio_core::{messages, Session, StudioError, StudioResult};
use tracing::{debug, warn};

use crate::config::ApiConfig;

/// Header carrying the signed-in user's id.
pub const USER_ID_HEADER: &str = "X-User-Id";

const CSV_MIME: &str = "text/csv";

/// Content Studio backend client.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!("studio/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(&config.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start a request for `path`. Fails before building anything when the
    /// session has no user.
    pub(crate) fn request(
        &self,
        session: &Session,
        method: Method,
        path: &str,
    ) -> StudioResult<RequestBuilder> {
        self.request_at(session, method, path, &[])
    }

    /// Start a request for `path` followed by `segments`. Each segment is
    /// percent-encoded as a single path segment, so ids cannot change the
    /// endpoint.
    pub(crate) fn request_at(
        &self,
        session: &Session,
        method: Method,
        path: &str,
        segments: &[&str],
    ) -> StudioResult<RequestBuilder> {
        let user = session.require_user()?;
        let url = self.url(path, segments)?;
        debug!(method = %method, url = %url, "API request");
        Ok(self
            .http
            .request(method, url)
            .header(USER_ID_HEADER, user.id.as_str()))
    }

    fn url(&self, path: &str, segments: &[&str]) -> StudioResult<Url> {
        // Dot segments are dropped by the URL builder and empty ones collapse
        // into the parent path.
        if segments
            .iter()
            .any(|s| s.trim().is_empty() || *s == "." || *s == "..")
        {
            return Err(StudioError::validation(messages::INVALID_ID));
        }

        let raw = format!("{}{}", self.base_url, path);
        let mut url =
            Url::parse(&raw).map_err(|e| StudioError::Config(format!("Invalid URL {raw}: {e}")))?;
        if !segments.is_empty() {
            url.path_segments_mut()
                .map_err(|_| StudioError::Config(format!("Invalid base URL: {}", self.base_url)))?
                .extend(segments);
        }
        Ok(url)
    }

    /// Send and check the status.
    pub(crate) async fn execute(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> StudioResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| StudioError::transport(fallback, e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_detail(&body, fallback);
        warn!(status = status.as_u16(), message = %message, "API request failed");
        Err(StudioError::api(status.as_u16(), message))
    }

    pub(crate) async fn json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> StudioResult<T> {
        let response = self.execute(request, fallback).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| StudioError::transport(fallback, e))?;
        serde_json::from_slice(&bytes).map_err(|e| StudioError::Decode(e.to_string()))
    }

    pub(crate) async fn text(&self, request: RequestBuilder, fallback: &str) -> StudioResult<String> {
        let response = self.execute(request, fallback).await?;
        response
            .text()
            .await
            .map_err(|e| StudioError::transport(fallback, e))
    }

    /// Send and discard the body.
    pub(crate) async fn empty(&self, request: RequestBuilder, fallback: &str) -> StudioResult<()> {
        self.execute(request, fallback).await.map(|_| ())
    }
}

/// Multipart form with the CSV under the `file` field.
pub(crate) fn csv_form(upload: &CsvUpload, fallback: &str) -> StudioResult<Form> {
    let part = Part::bytes(upload.bytes.clone())
        .file_name(upload.file_name.clone())
        .mime_str(CSV_MIME)
        .map_err(|e| StudioError::transport(fallback, e))?;
    Ok(Form::new().part("file", part))
}

/// Message for a failed response: the `detail` string when the body is JSON
/// and carries a non-empty one, otherwise `fallback`.
pub fn error_detail(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .and_then(|detail| match detail {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
            _ => None,
        })
        .unwrap_or_else(|| fallback.to_string())
}
