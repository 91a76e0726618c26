use crate::components::GitHubAuthFlow;
use crate::models::app_state::AppState;
use i18nrs::yew::use_translation;
use serde::Deserialize;
use shared::flow::needs_installation_flag;
use yew::prelude::*;
use yew_router::hooks::use_location;
use yewdux::prelude::use_store;

/// Query string the backend sends visitors back with after OAuth.
#[derive(Debug, Default, Deserialize)]
struct InstallQuery {
    #[serde(rename = "needsInstallation")]
    needs_installation: Option<String>,
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let (i18n, _) = use_translation();
    let (app_state, dispatch) = use_store::<AppState>();
    let location = use_location();

    let needs_installation = location
        .and_then(|location| location.query::<InstallQuery>().ok())
        .is_some_and(|query| needs_installation_flag(query.needs_installation.as_deref()));

    let on_complete: Callback<()> =
        dispatch.reduce_mut_callback(|state| state.github_ready = true);

    html! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md space-y-6">
                    <h1 class="text-4xl font-bold">{ i18n.t("home.title") }</h1>
                    <p class="text-base-content/70">{ i18n.t("home.subtitle") }</p>
                    if app_state.github_ready {
                        <div class="alert alert-success" data-testid="github-connected">
                            <i class="fa-solid fa-circle-check"></i>
                            <span>{ i18n.t("home.connected") }</span>
                        </div>
                    }
                    <GitHubAuthFlow {needs_installation} {on_complete} />
                </div>
            </div>
        </div>
    }
}
