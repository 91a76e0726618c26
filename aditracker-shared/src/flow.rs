//! # Status check
//!
//! Resolves the sign-in state of the current visitor in two steps: the
//! session first, then (only for signed-in users) the GitHub App installation.
//! A mount that arrives back from GitHub with `needsInstallation=true` skips
//! the check and is redirected instead.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::config::GitHubAuthConfig;
use crate::errors::{AuthFlowError, AuthFlowResult};
use crate::models::{AuthStatus, AuthStatusResponse, GitHubUser, InstallationResponse};
use crate::navigation::{APP_ROOT, Navigator};

/// Query parameter the backend appends when the GitHub App still needs installing.
pub const NEEDS_INSTALLATION_PARAM: &str = "needsInstallation";

/// Interpret the raw `needsInstallation` query value. Only the exact string
/// `"true"` enables the redirect.
#[must_use]
pub fn needs_installation_flag(value: Option<&str>) -> bool {
    value == Some("true")
}

/// The two backend calls the status check depends on.
#[async_trait(?Send)]
pub trait AuthBackend {
    /// Fetch `GET /auth/status`.
    async fn auth_status(&self) -> AuthFlowResult<AuthStatusResponse>;

    /// Fetch `GET /auth/check-installation`.
    async fn check_installation(&self) -> AuthFlowResult<InstallationResponse>;
}

/// Where the visitor stands in the GitHub sign-in sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthFlowState {
    /// The check has not resolved yet.
    #[default]
    Unchecked,
    /// No session, or the check failed.
    Unauthenticated,
    /// Signed in, but the GitHub App is not installed.
    AuthenticatedPendingInstall {
        /// Session owner, when the backend sent one.
        user: Option<GitHubUser>,
    },
    /// Signed in with the GitHub App installed.
    Ready {
        /// Session owner, when the backend sent one.
        user: Option<GitHubUser>,
    },
}

impl AuthFlowState {
    /// `true` until the check resolves.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Unchecked)
    }

    /// `true` once both the session and the installation are confirmed.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    /// The signed-in user, if the backend reported one.
    #[must_use]
    pub fn user(&self) -> Option<&GitHubUser> {
        match self {
            Self::AuthenticatedPendingInstall { user } | Self::Ready { user } => user.as_ref(),
            Self::Unchecked | Self::Unauthenticated => None,
        }
    }

    /// Flatten into the boolean shape; `None` while still unchecked.
    #[must_use]
    pub fn as_status(&self) -> Option<AuthStatus> {
        let status = match self {
            Self::Unchecked => return None,
            Self::Unauthenticated => AuthStatus::default(),
            Self::AuthenticatedPendingInstall { user } => AuthStatus {
                authenticated: true,
                has_github_app: false,
                user: user.clone(),
            },
            Self::Ready { user } => AuthStatus {
                authenticated: true,
                has_github_app: true,
                user: user.clone(),
            },
        };
        Some(status)
    }
}

/// Send the visitor to GitHub to finish installing the app, then back to the
/// application root. Navigation failures are logged and do not stop the
/// second step.
pub fn redirect_to_installation(config: &GitHubAuthConfig, navigator: &dyn Navigator) {
    let install_url = config.github_install_url();
    if let Err(error) = navigator.open_in_new_context(&install_url) {
        tracing::error!(%error, url = %install_url, "failed to open GitHub App installation");
    }
    if let Err(error) = navigator.navigate(APP_ROOT) {
        tracing::error!(%error, "failed to return to application root");
    }
}

/// Run the two-step status check.
///
/// Returns `None` when `cancel` fires before the check resolves; nothing is
/// reported and `on_complete` is dropped uncalled. Otherwise `on_complete`
/// runs exactly when the result is [`AuthFlowState::Ready`]. Backend failures
/// are logged and resolve to [`AuthFlowState::Unauthenticated`].
pub async fn check_status<B, F>(
    backend: &B,
    cancel: &CancellationToken,
    on_complete: F,
) -> Option<AuthFlowState>
where
    B: AuthBackend + ?Sized,
    F: FnOnce(),
{
    let state = match fetch_state(backend, cancel).await {
        Ok(Some(state)) => state,
        Ok(None) => {
            tracing::debug!("auth status check cancelled");
            return None;
        }
        Err(error) => {
            if cancel.is_cancelled() {
                tracing::debug!(%error, "auth status check cancelled after failure");
                return None;
            }
            tracing::error!(%error, endpoint = error.endpoint(), "error checking auth status");
            AuthFlowState::Unauthenticated
        }
    };

    if state.is_ready() {
        on_complete();
    }
    Some(state)
}

/// What a freshly mounted sign-in widget does.
///
/// With `needs_installation` set the visitor is redirected through
/// [`redirect_to_installation`] and no backend request is made; the result is
/// `None` and the widget stays in [`AuthFlowState::Unchecked`]. Otherwise this
/// is [`check_status`].
pub async fn start_flow<B, F>(
    needs_installation: bool,
    config: &GitHubAuthConfig,
    backend: &B,
    navigator: &dyn Navigator,
    cancel: &CancellationToken,
    on_complete: F,
) -> Option<AuthFlowState>
where
    B: AuthBackend + ?Sized,
    F: FnOnce(),
{
    if needs_installation {
        redirect_to_installation(config, navigator);
        return None;
    }
    check_status(backend, cancel, on_complete).await
}

async fn fetch_state<B>(
    backend: &B,
    cancel: &CancellationToken,
) -> Result<Option<AuthFlowState>, AuthFlowError>
where
    B: AuthBackend + ?Sized,
{
    let Some(status) = cancel.run_until_cancelled(backend.auth_status()).await else {
        return Ok(None);
    };
    let status = status?;
    if cancel.is_cancelled() {
        return Ok(None);
    }
    if !status.authenticated {
        return Ok(Some(AuthFlowState::Unauthenticated));
    }

    let Some(installation) = cancel
        .run_until_cancelled(backend.check_installation())
        .await
    else {
        return Ok(None);
    };
    let installation = installation?;
    if cancel.is_cancelled() {
        return Ok(None);
    }

    let user = status.user;
    let state = if installation.has_github_app {
        AuthFlowState::Ready { user }
    } else {
        AuthFlowState::AuthenticatedPendingInstall { user }
    };
    Ok(Some(state))
}
