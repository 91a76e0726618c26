use serde::{Deserialize, Deserializer, Serialize};

/// Reads a JSON boolean, treating `null` the same as an absent field.
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// GitHub identity attached to an active backend session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GitHubUser {
    /// GitHub login of the signed-in user.
    pub username: String,

    /// Avatar image, when GitHub exposes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Response schema for `GET /auth/status`.
///
/// A missing or `null` `authenticated` field reads as `false`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthStatusResponse {
    /// Whether the backend recognizes an active session.
    #[serde(default, deserialize_with = "null_as_false")]
    pub authenticated: bool,

    /// The session owner; only sent for authenticated sessions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<GitHubUser>,
}

/// Response schema for `GET /auth/check-installation`.
///
/// A missing or `null` `hasGitHubApp` reads as `false`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstallationResponse {
    /// Whether the user has installed the GitHub App.
    #[serde(rename = "hasGitHubApp", default, deserialize_with = "null_as_false")]
    pub has_github_app: bool,
}

/// Flattened view of a resolved status check.
///
/// `has_github_app` is always `false` when `authenticated` is `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthStatus {
    /// Whether the backend recognizes an active session.
    pub authenticated: bool,
    /// Whether the GitHub App is installed for the session owner.
    pub has_github_app: bool,
    /// The session owner, present only when authenticated.
    pub user: Option<GitHubUser>,
}
