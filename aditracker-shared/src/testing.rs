//! Fakes shared by the unit tests.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::config::{AUTH_STATUS_PATH, CHECK_INSTALLATION_PATH};
use crate::errors::{AuthFlowError, AuthFlowResult, NavigationError};
use crate::flow::AuthBackend;
use crate::models::{AuthStatusResponse, GitHubUser, InstallationResponse};
use crate::navigation::Navigator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visit {
    NewContext(String),
    Navigate(String),
}

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub visits: RefCell<Vec<Visit>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<Visit> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn open_in_new_context(&self, url: &str) -> Result<(), NavigationError> {
        self.visits
            .borrow_mut()
            .push(Visit::NewContext(url.to_string()));
        Ok(())
    }

    fn navigate(&self, url: &str) -> Result<(), NavigationError> {
        self.visits.borrow_mut().push(Visit::Navigate(url.to_string()));
        Ok(())
    }
}

/// Navigator whose new-context opens are always blocked.
#[derive(Debug, Default)]
pub struct PopupBlockingNavigator {
    pub inner: RecordingNavigator,
}

impl Navigator for PopupBlockingNavigator {
    fn open_in_new_context(&self, url: &str) -> Result<(), NavigationError> {
        Err(NavigationError::Blocked {
            url: url.to_string(),
        })
    }

    fn navigate(&self, url: &str) -> Result<(), NavigationError> {
        self.inner.navigate(url)
    }
}

pub struct FakeBackend {
    status: AuthFlowResult<AuthStatusResponse>,
    installation: AuthFlowResult<InstallationResponse>,
    cancel_after_status: Option<CancellationToken>,
    pub status_calls: Cell<usize>,
    pub installation_calls: Cell<usize>,
}

impl FakeBackend {
    pub fn new(
        status: AuthFlowResult<AuthStatusResponse>,
        installation: AuthFlowResult<InstallationResponse>,
    ) -> Self {
        Self {
            status,
            installation,
            cancel_after_status: None,
            status_calls: Cell::new(0),
            installation_calls: Cell::new(0),
        }
    }

    pub fn signed_out() -> Self {
        Self::new(
            Ok(AuthStatusResponse {
                authenticated: false,
                user: None,
            }),
            Ok(InstallationResponse::default()),
        )
    }

    pub fn signed_in(has_github_app: bool) -> Self {
        Self::new(
            Ok(AuthStatusResponse {
                authenticated: true,
                user: Some(octocat()),
            }),
            Ok(InstallationResponse { has_github_app }),
        )
    }

    pub fn failing_status() -> Self {
        Self::new(
            Err(AuthFlowError::Request {
                endpoint: AUTH_STATUS_PATH,
                message: "connection refused".into(),
            }),
            Ok(InstallationResponse::default()),
        )
    }

    pub fn failing_installation() -> Self {
        Self::new(
            Ok(AuthStatusResponse {
                authenticated: true,
                user: Some(octocat()),
            }),
            Err(AuthFlowError::Status {
                endpoint: CHECK_INSTALLATION_PATH,
                status: 500,
            }),
        )
    }

    /// Cancel `token` while the status request is in flight.
    pub fn cancelling(mut self, token: CancellationToken) -> Self {
        self.cancel_after_status = Some(token);
        self
    }
}

#[async_trait(?Send)]
impl AuthBackend for FakeBackend {
    async fn auth_status(&self) -> AuthFlowResult<AuthStatusResponse> {
        self.status_calls.set(self.status_calls.get() + 1);
        if let Some(token) = &self.cancel_after_status {
            token.cancel();
        }
        self.status.clone()
    }

    async fn check_installation(&self) -> AuthFlowResult<InstallationResponse> {
        self.installation_calls
            .set(self.installation_calls.get() + 1);
        self.installation.clone()
    }
}

pub fn octocat() -> GitHubUser {
    GitHubUser {
        username: "octocat".into(),
        avatar_url: Some("https://avatars.example/octocat.png".into()),
    }
}
