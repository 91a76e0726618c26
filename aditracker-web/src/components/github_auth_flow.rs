//! The "Connect with GitHub" widget.
//!
//! On mount it either redirects a visitor who came back from GitHub with a
//! pending installation, or checks the backend and renders one of:
//!
//! * a disabled spinner while the check runs,
//! * "Connect with GitHub" for visitors without a session,
//! * "Install GitHub App" for signed-in users without the app,
//! * nothing once both are in place (after firing `on_complete`).

use crate::api::AuthApiClient;
use crate::components::auth_button::AuthButton;
use crate::navigation::BrowserNavigator;
use i18nrs::yew::use_translation;
use shared::config::GitHubAuthConfig;
use shared::control::control_for;
use shared::flow::{AuthFlowState, start_flow};
use tokio_util::sync::CancellationToken;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GitHubAuthFlowProps {
    /// The visitor returned from GitHub and still has to install the app.
    #[prop_or_default]
    pub needs_installation: bool,
    /// Fired once when both the session and the installation are confirmed.
    #[prop_or_default]
    pub on_complete: Option<Callback<()>>,
    #[prop_or_default]
    pub config: Option<GitHubAuthConfig>,
}

#[function_component(GitHubAuthFlow)]
pub fn github_auth_flow(props: &GitHubAuthFlowProps) -> Html {
    let config = props.config.clone().unwrap_or_default();
    let state = use_state(AuthFlowState::default);

    {
        let state = state.clone();
        let config = config.clone();
        let needs_installation = props.needs_installation;
        let on_complete = props.on_complete.clone();
        use_effect_with((), move |_| {
            let cancel = CancellationToken::new();
            let token = cancel.clone();
            spawn_local(async move {
                let client = AuthApiClient::new(config.clone());
                let notify = move || {
                    if let Some(callback) = on_complete {
                        callback.emit(());
                    }
                };
                let resolved = start_flow(
                    needs_installation,
                    &config,
                    &client,
                    &BrowserNavigator,
                    &token,
                    notify,
                )
                .await;
                if let Some(resolved) = resolved {
                    state.set(resolved);
                }
            });
            let guard = cancel.drop_guard();
            move || drop(guard)
        });
    }

    html! { <AuthFlowView state={(*state).clone()} {config} /> }
}

#[derive(Properties, PartialEq)]
pub struct AuthFlowViewProps {
    pub state: AuthFlowState,
    pub config: GitHubAuthConfig,
}

/// Draws the control for one status snapshot.
#[function_component(AuthFlowView)]
pub fn auth_flow_view(props: &AuthFlowViewProps) -> Html {
    let (i18n, _) = use_translation();

    let Some(view) = control_for(&props.state, &props.config) else {
        return html! {};
    };

    let onclick = view.action.clone().map(|action| {
        Callback::from(move |()| {
            if let Err(err) = action.perform(&BrowserNavigator) {
                log::error!("sign-in navigation failed: {err}");
            }
        })
    });

    html! {
        <AuthButton
            label={i18n.t(view.label_key())}
            busy={view.shows_spinner()}
            disabled={view.disabled}
            {onclick}
        />
    }
}
