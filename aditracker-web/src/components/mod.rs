pub(crate) mod auth_button;
pub(crate) mod github_auth_flow;

pub use github_auth_flow::GitHubAuthFlow;
