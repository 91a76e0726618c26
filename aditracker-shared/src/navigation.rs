//! Browser side effects behind a trait so the flow can run outside a browser.

use crate::errors::NavigationError;

/// Path of the application root, where the install redirect lands.
pub const APP_ROOT: &str = "/";

/// Moves the user around: new tabs for GitHub, full-page loads for the backend.
pub trait Navigator {
    /// Open `url` in a new browsing context (`target="_blank"`).
    ///
    /// # Errors
    /// Returns [`NavigationError`] when the browser refuses to open the context.
    fn open_in_new_context(&self, url: &str) -> Result<(), NavigationError>;

    /// Replace the current page with `url`.
    ///
    /// # Errors
    /// Returns [`NavigationError`] when the browser rejects the new location.
    fn navigate(&self, url: &str) -> Result<(), NavigationError>;
}
