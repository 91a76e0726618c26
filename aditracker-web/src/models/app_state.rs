use yewdux::Store;

#[derive(Default, Clone, PartialEq, Store)]
pub struct AppState {
    /// Set once the sign-in widget reports a connected GitHub App.
    pub github_ready: bool,
}
