use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use shared::config::{AUTH_STATUS_PATH, CHECK_INSTALLATION_PATH, GitHubAuthConfig};
use shared::errors::{AuthFlowError, AuthFlowResult};
use shared::flow::AuthBackend;
use shared::models::{AuthStatusResponse, InstallationResponse};

/// Lightweight client for the aditracker authentication backend.
#[derive(Clone, Debug)]
pub struct AuthApiClient {
    config: GitHubAuthConfig,
    client: Client,
}

impl AuthApiClient {
    /// Create a client for the backend named in `config`.
    pub fn new(config: GitHubAuthConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn get(&self, url: String) -> RequestBuilder {
        let request = self.client.get(url);
        #[cfg(target_arch = "wasm32")]
        let request = if self.config.include_credentials {
            request.fetch_credentials_include()
        } else {
            request
        };
        request
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        url: String,
    ) -> AuthFlowResult<T> {
        let response = self
            .get(url)
            .send()
            .await
            .map_err(|err| AuthFlowError::Request {
                endpoint,
                message: err.to_string(),
            })?;
        ensure_success(endpoint, response.status())?;
        response.json().await.map_err(|err| AuthFlowError::Decode {
            endpoint,
            message: err.to_string(),
        })
    }
}

#[async_trait(?Send)]
impl AuthBackend for AuthApiClient {
    async fn auth_status(&self) -> AuthFlowResult<AuthStatusResponse> {
        self.get_json(AUTH_STATUS_PATH, self.config.auth_status_url())
            .await
    }

    async fn check_installation(&self) -> AuthFlowResult<InstallationResponse> {
        self.get_json(CHECK_INSTALLATION_PATH, self.config.check_installation_url())
            .await
    }
}

fn ensure_success(endpoint: &'static str, status: StatusCode) -> AuthFlowResult<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(AuthFlowError::Status {
            endpoint,
            status: status.as_u16(),
        })
    }
}
