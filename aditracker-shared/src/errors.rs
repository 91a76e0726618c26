//! Error types for the status check and browser navigation.

use thiserror::Error;

/// Failure of one of the backend status requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthFlowError {
    /// The request never produced a response (network, CORS, aborted fetch).
    #[error("request to {endpoint} failed: {message}")]
    Request {
        /// Backend path of the failed request.
        endpoint: &'static str,
        /// Transport error reported by the HTTP client.
        message: String,
    },

    /// The backend answered with a non-2xx status.
    #[error("{endpoint} responded with HTTP {status}")]
    Status {
        /// Backend path of the failed request.
        endpoint: &'static str,
        /// HTTP status code of the response.
        status: u16,
    },

    /// The response body was not the expected JSON document.
    #[error("could not decode {endpoint} response: {message}")]
    Decode {
        /// Backend path whose body failed to decode.
        endpoint: &'static str,
        /// Deserializer error.
        message: String,
    },
}

impl AuthFlowError {
    /// The backend path the failing request targeted.
    #[must_use]
    pub const fn endpoint(&self) -> &'static str {
        match self {
            Self::Request { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::Decode { endpoint, .. } => endpoint,
        }
    }
}

/// Result alias for backend status requests.
pub type AuthFlowResult<T> = Result<T, AuthFlowError>;

/// Failure to move the browser to a new location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// No global `window` is available.
    #[error("no browser window available")]
    NoWindow,

    /// The browser refused to open a new context, usually a popup blocker.
    #[error("browser blocked opening {url}")]
    Blocked {
        /// Page the browser refused to open.
        url: String,
    },

    /// The browser raised an exception while navigating.
    #[error("navigation to {url} failed: {message}")]
    Browser {
        /// Page the browser was asked to load.
        url: String,
        /// Stringified JavaScript exception.
        message: String,
    },
}
