use shared::errors::NavigationError;
use shared::navigation::Navigator;
use web_sys::Window;

const NEW_CONTEXT_TARGET: &str = "_blank";

/// [`Navigator`] backed by the global `window`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl BrowserNavigator {
    fn window() -> Result<Window, NavigationError> {
        web_sys::window().ok_or(NavigationError::NoWindow)
    }
}

impl Navigator for BrowserNavigator {
    fn open_in_new_context(&self, url: &str) -> Result<(), NavigationError> {
        match Self::window()?.open_with_url_and_target(url, NEW_CONTEXT_TARGET) {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(NavigationError::Blocked {
                url: url.to_string(),
            }),
            Err(err) => Err(NavigationError::Browser {
                url: url.to_string(),
                message: format!("{err:?}"),
            }),
        }
    }

    fn navigate(&self, url: &str) -> Result<(), NavigationError> {
        Self::window()?
            .location()
            .set_href(url)
            .map_err(|err| NavigationError::Browser {
                url: url.to_string(),
                message: format!("{err:?}"),
            })
    }
}
