//! Nobody is perfect.
use reqwest::StatusCode;
use thiserror::Error;

use crate::api::ApiError;

/// Error used by the entire pixeldrain crate.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP error. The request failed before a response was produced, or
    /// the response body could not be read.
    #[error("{0}")]
    HttpError(#[from] reqwest::Error),

    /// Url error.
    #[error("invalid url")]
    UrlError(#[from] url::ParseError),

    /// A response body (success or error) was not the expected JSON.
    #[error("json error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A timestamp could not be formatted for a query string.
    #[error("invalid timestamp: {0}")]
    TimeFormatError(#[from] time::error::Format),

    /// Error returned by the pixeldrain API. Might be due to a client error.
    #[error("pixeldrain error: {0}")]
    ApiError(ApiError),

    /// The API answered with an error status but the body wasn't an
    /// [`ApiError`].
    #[error("unexpected response: {status}")]
    UnexpectedResponse {
        /// HTTP status of the response.
        status: StatusCode,
        /// Raw response body.
        body: String,
    },

    /// A path argument was `.` or `..`, which cannot be addressed as a
    /// single segment.
    #[error("`{0}` is not a valid path segment")]
    DotSegment(String),

    /// Endpoint that this platform cannot dial.
    #[error("unsupported endpoint `{0}`")]
    UnsupportedEndpoint(String),

    /// A configuration value was present but invalid.
    #[error("`{key}` was defined but could not be parsed: {reason}")]
    InvalidConfig {
        /// Name of the variable.
        key: &'static str,
        /// Why parsing failed.
        reason: String,
    },
}

impl Error {
    /// HTTP status of the response that caused this error, if a response
    /// was received at all.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::ApiError(e) => StatusCode::from_u16(e.status).ok(),
            Error::UnexpectedResponse { status, .. } => Some(*status),
            Error::HttpError(e) => e.status(),
            _ => None,
        }
    }

    /// Is this a client side (4xx) error?
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status().map_or(false, |s| s.is_client_error())
    }

    /// Is this a server side (5xx) error?
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().map_or(false, |s| s.is_server_error())
    }

    /// The structured API error, if this is one.
    #[must_use]
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::ApiError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Self::ApiError(err)
    }
}
