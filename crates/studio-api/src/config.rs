//! Client configuration from the environment.

use studio_core::Session;
use tracing::debug;

/// Default backend URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable overriding the backend URL.
pub const API_URL_ENV: &str = "STUDIO_API_URL";

/// Environment variable holding the user id sent with every request.
pub const USER_ID_ENV: &str = "STUDIO_USER_ID";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub user_id: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            user_id: None,
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: Option<&str>, user_id: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();
        let user_id = user_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string);
        Self { base_url, user_id }
    }

    /// Read `STUDIO_API_URL` and `STUDIO_USER_ID`.
    pub fn from_env() -> Self {
        let base_url = std::env::var(API_URL_ENV).ok();
        let user_id = std::env::var(USER_ID_ENV).ok();
        let config = Self::new(base_url.as_deref(), user_id.as_deref());
        debug!(base_url = %config.base_url, has_user = config.user_id.is_some(), "Loaded API config");
        config
    }

    /// Session for the configured user, signed out when none is set.
    pub fn session(&self) -> Session {
        Session::from_user_id(self.user_id.as_deref())
    }
}
