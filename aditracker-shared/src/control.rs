//! Maps a status snapshot to the single control the sign-in widget shows.

use crate::config::GitHubAuthConfig;
use crate::errors::NavigationError;
use crate::flow::AuthFlowState;
use crate::navigation::Navigator;

/// Which control the widget renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// Disabled spinner while the status check runs.
    Checking,
    /// "Connect with GitHub".
    Connect,
    /// "Install GitHub App".
    InstallApp,
}

impl ControlKind {
    /// Translation key of the control label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Checking => "auth.checking",
            Self::Connect => "auth.connect",
            Self::InstallApp => "auth.install",
        }
    }
}

/// What activating a control does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlAction {
    /// Open the URL in a new browsing context.
    OpenInNewContext(String),
    /// Replace the current page with the URL.
    Navigate(String),
}

impl ControlAction {
    /// Target URL of the action.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::OpenInNewContext(url) | Self::Navigate(url) => url,
        }
    }

    /// Carry out the action.
    ///
    /// # Errors
    /// Propagates the navigator's [`NavigationError`].
    pub fn perform(&self, navigator: &dyn Navigator) -> Result<(), NavigationError> {
        match self {
            Self::OpenInNewContext(url) => navigator.open_in_new_context(url),
            Self::Navigate(url) => navigator.navigate(url),
        }
    }
}

/// Everything needed to draw the control for one status snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlView {
    /// Which control to draw.
    pub kind: ControlKind,
    /// Whether the control ignores clicks.
    pub disabled: bool,
    /// What a click does; `None` for the disabled spinner.
    pub action: Option<ControlAction>,
}

impl ControlView {
    /// Translation key of the label.
    #[must_use]
    pub const fn label_key(&self) -> &'static str {
        self.kind.label_key()
    }

    /// Whether the control shows a spinner instead of the GitHub mark.
    #[must_use]
    pub const fn shows_spinner(&self) -> bool {
        matches!(self.kind, ControlKind::Checking)
    }
}

/// The control for `state`, or `None` once the flow is complete.
#[must_use]
pub fn control_for(state: &AuthFlowState, config: &GitHubAuthConfig) -> Option<ControlView> {
    let view = match state {
        AuthFlowState::Unchecked => ControlView {
            kind: ControlKind::Checking,
            disabled: true,
            action: None,
        },
        AuthFlowState::Unauthenticated => ControlView {
            kind: ControlKind::Connect,
            disabled: false,
            action: Some(ControlAction::OpenInNewContext(
                config.github_select_target_url(),
            )),
        },
        AuthFlowState::AuthenticatedPendingInstall { .. } => ControlView {
            kind: ControlKind::InstallApp,
            disabled: false,
            action: Some(ControlAction::Navigate(config.install_route_url())),
        },
        AuthFlowState::Ready { .. } => return None,
    };
    Some(view)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::testing::{RecordingNavigator, Visit, octocat};

    fn config() -> GitHubAuthConfig {
        GitHubAuthConfig::new()
            .with_backend_url("https://auth.example.test")
            .with_app_slug("aditracker")
    }

    #[test_case(AuthFlowState::Unchecked, Some(ControlKind::Checking) ; "loading shows spinner")]
    #[test_case(AuthFlowState::Unauthenticated, Some(ControlKind::Connect) ; "signed out shows connect")]
    #[test_case(AuthFlowState::AuthenticatedPendingInstall { user: None }, Some(ControlKind::InstallApp) ; "missing app shows install")]
    #[test_case(AuthFlowState::Ready { user: Some(octocat()) }, None ; "ready shows nothing")]
    fn state_maps_to_control(state: AuthFlowState, expected: Option<ControlKind>) {
        let view = control_for(&state, &config());
        assert_eq!(view.map(|view| view.kind), expected);
    }

    #[test]
    fn checking_is_disabled_without_action() {
        let view = control_for(&AuthFlowState::Unchecked, &config()).unwrap();

        assert!(view.disabled);
        assert!(view.shows_spinner());
        assert_eq!(view.action, None);
        assert_eq!(view.label_key(), "auth.checking");
    }

    #[test]
    fn connect_opens_one_new_context_at_select_target() {
        let view = control_for(&AuthFlowState::Unauthenticated, &config()).unwrap();
        let navigator = RecordingNavigator::default();

        view.action.unwrap().perform(&navigator).unwrap();

        assert_eq!(
            navigator.visits(),
            vec![Visit::NewContext(
                "https://github.com/apps/aditracker/installations/select_target".into()
            )]
        );
    }

    #[test]
    fn install_navigates_current_page_to_backend_route() {
        let state = AuthFlowState::AuthenticatedPendingInstall {
            user: Some(octocat()),
        };
        let view = control_for(&state, &config()).unwrap();
        let navigator = RecordingNavigator::default();

        assert!(!view.disabled);
        assert!(!view.shows_spinner());
        view.action.unwrap().perform(&navigator).unwrap();

        assert_eq!(
            navigator.visits(),
            vec![Visit::Navigate(
                "https://auth.example.test/auth/github/install".into()
            )]
        );
    }

    #[test]
    fn action_exposes_target_url() {
        let action = ControlAction::Navigate("https://auth.example.test/x".into());
        assert_eq!(action.url(), "https://auth.example.test/x");
    }
}
