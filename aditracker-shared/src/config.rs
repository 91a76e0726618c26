//! # Configuration
//!
//! Backend and GitHub App locations used by the sign-in flow. Defaults are
//! baked in at compile time from `ADITRACKER_BACKEND_URL` and
//! `ADITRACKER_GITHUB_APP`, falling back to the production values.

use serde::{Deserialize, Serialize};

/// Backend path reporting the session state.
pub const AUTH_STATUS_PATH: &str = "auth/status";
/// Backend path reporting whether the GitHub App is installed.
pub const CHECK_INSTALLATION_PATH: &str = "auth/check-installation";
/// Backend route that starts the server-side install flow.
pub const INSTALL_ROUTE_PATH: &str = "auth/github/install";

const DEFAULT_BACKEND_URL: &str = "https://vmi1968527.contaboserver.net";
const DEFAULT_APP_SLUG: &str = "aditracker";
const GITHUB_APPS_URL: &str = "https://github.com/apps";

/// Where the sign-in flow sends requests and redirects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubAuthConfig {
    /// Base URL of the authentication backend.
    pub backend_url: String,
    /// Slug of the GitHub App (`https://github.com/apps/<slug>`).
    pub app_slug: String,
    /// Send cookies with cross-origin status requests.
    pub include_credentials: bool,
}

impl Default for GitHubAuthConfig {
    fn default() -> Self {
        Self {
            backend_url: option_env!("ADITRACKER_BACKEND_URL")
                .unwrap_or(DEFAULT_BACKEND_URL)
                .to_string(),
            app_slug: option_env!("ADITRACKER_GITHUB_APP")
                .unwrap_or(DEFAULT_APP_SLUG)
                .to_string(),
            include_credentials: false,
        }
    }
}

impl GitHubAuthConfig {
    /// Create a configuration from the compile-time defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the backend base URL.
    #[must_use]
    pub fn with_backend_url(mut self, backend_url: impl Into<String>) -> Self {
        self.backend_url = backend_url.into();
        self
    }

    /// Replace the GitHub App slug.
    #[must_use]
    pub fn with_app_slug(mut self, app_slug: impl Into<String>) -> Self {
        self.app_slug = app_slug.into();
        self
    }

    /// Toggle sending cookies with status requests.
    #[must_use]
    pub const fn with_credentials(mut self, include_credentials: bool) -> Self {
        self.include_credentials = include_credentials;
        self
    }

    fn backend_endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.backend_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn github_app_page(&self, page: &str) -> String {
        format!("{GITHUB_APPS_URL}/{}/installations/{page}", self.app_slug)
    }

    /// `GET` endpoint for the session state.
    #[must_use]
    pub fn auth_status_url(&self) -> String {
        self.backend_endpoint(AUTH_STATUS_PATH)
    }

    /// `GET` endpoint for the installation state.
    #[must_use]
    pub fn check_installation_url(&self) -> String {
        self.backend_endpoint(CHECK_INSTALLATION_PATH)
    }

    /// Navigation target that starts the backend install flow.
    #[must_use]
    pub fn install_route_url(&self) -> String {
        self.backend_endpoint(INSTALL_ROUTE_PATH)
    }

    /// GitHub page that installs the app on a fresh account.
    #[must_use]
    pub fn github_install_url(&self) -> String {
        self.github_app_page("new")
    }

    /// GitHub page where the user picks the account or organization to connect.
    #[must_use]
    pub fn github_select_target_url(&self) -> String {
        self.github_app_page("select_target")
    }
}
