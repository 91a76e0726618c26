pub mod auth;

pub use auth::{AuthStatus, AuthStatusResponse, GitHubUser, InstallationResponse};
