use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AuthButtonProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub busy: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<()>>,
}

/// Outline button carrying the GitHub mark, or a spinner while `busy`.
#[function_component(AuthButton)]
pub fn auth_button(props: &AuthButtonProps) -> Html {
    let onclick = props.onclick.clone().map(|callback| {
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            callback.emit(());
        })
    });

    html! {
        <button
            type="button"
            class="btn btn-outline btn-primary btn-lg gap-3 bg-base-100/80 backdrop-blur-sm"
            disabled={props.disabled}
            {onclick}
            data-testid="github-auth-button"
        >
            if props.busy {
                <span class="loading loading-spinner loading-sm"></span>
            } else {
                <i class="fa-brands fa-github text-lg"></i>
            }
            <span class="font-medium">{ props.label.clone() }</span>
        </button>
    }
}
