use crate::pages::{ErrorPage, HomePage};
use strum::EnumIter;
use yew::prelude::*;
use yew_router::prelude::*;

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: MainRoute) -> Html {
    match route {
        MainRoute::Home => html! { <HomePage /> },
        MainRoute::NotFound => html! { <ErrorPage /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn routes_resolve_to_paths() {
        assert_eq!(MainRoute::Home.to_path(), "/");
        assert_eq!(MainRoute::NotFound.to_path(), "/404");
    }

    #[test]
    fn every_route_round_trips_through_recognize() {
        for route in MainRoute::iter() {
            let recognized = MainRoute::recognize(&route.to_path());
            assert_eq!(recognized, Some(route));
        }
    }
}
