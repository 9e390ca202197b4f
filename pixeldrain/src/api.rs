//! API response utilities.
use std::str::FromStr;

use reqwest::Response;
use serde::{de::DeserializeOwned, Deserialize};
use strum::{Display, EnumString};
use tracing::{trace, warn};

use crate::errors::Error;

/// Machine-readable error codes known to this crate. The API has many more,
/// see [`ApiError::value`] for the raw string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorCode {
    /// Several things went wrong at once. Look at [`ApiError::errors`].
    MultipleErrors,
    /// The requested resource doesn't exist.
    NotFound,
    /// Missing or invalid API key.
    Unauthorized,
    /// Upload without a file.
    NoFile,
    /// Upload exceeds the size limit of the account.
    FileTooLarge,
    /// File name is too long.
    NameTooLong,
    /// Something broke on the server.
    Internal,
}

/// An error returned by the pixeldrain API. If the request failed before it
/// could reach the API the error will be a different [`Error`] variant.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, thiserror::Error)]
#[error("{value}")]
pub struct ApiError {
    /// HTTP status of the response. Zero for nested errors.
    #[serde(skip)]
    pub status: u16,

    /// Always `false` for errors.
    #[serde(default)]
    pub success: bool,

    /// Machine-readable error code, like `not_found`.
    pub value: String,

    /// Human-readable message.
    #[serde(default)]
    pub message: String,

    /// Populated when [`ApiError::value`] is `multiple_errors`.
    #[serde(default)]
    pub errors: Vec<ApiError>,

    /// Metadata regarding the error.
    #[serde(default)]
    pub extra: Option<serde_json::Map<String, serde_json::Value>>,
}

impl ApiError {
    /// Attempt to parse [`ApiError::value`] as a known [`ErrorCode`].
    ///
    /// ```
    /// use pixeldrain::api::{ApiError, ErrorCode};
    ///
    /// let err = ApiError { value: "not_found".into(), ..Default::default() };
    /// assert_eq!(err.code(), Some(ErrorCode::NotFound));
    ///
    /// let err = ApiError { value: "banana".into(), ..Default::default() };
    /// assert_eq!(err.code(), None);
    /// ```
    #[must_use]
    pub fn code(&self) -> Option<ErrorCode> {
        ErrorCode::from_str(&self.value).ok()
    }

    /// Is this a client side (4xx) error?
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Is this a server side (5xx) error?
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status >= 500
    }
}

/// A serde wrapper for handling unknown enum variants.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MaybeUnknown<T> {
    /// A known type.
    Known(T),
    /// An unknown type.
    Unknown(String),
}

/// Pass the response through if it has a success (or redirect) status,
/// otherwise turn its body into an [`Error`].
pub(crate) async fn error_for_status(res: Response) -> crate::Result<Response> {
    let status = res.status();

    if !status.is_client_error() && !status.is_server_error() {
        return Ok(res);
    }

    let body = res.text().await?;

    trace!("{}", body);

    match serde_json::from_str::<ApiError>(&body) {
        Ok(mut err) => {
            err.status = status.as_u16();
            Err(err.into())
        }
        Err(err) => {
            warn!("parse error body failed: {:?} (status {})", err, status);
            Err(Error::UnexpectedResponse { status, body })
        }
    }
}

/// Parse JSON as the associated type if the response has a 2xx status
/// code, otherwise parse it as [`ApiError`].
///
/// # Errors
///
/// - invalid json
/// - malformed json
/// - error status
pub(crate) async fn read_json<T: DeserializeOwned>(res: Response) -> crate::Result<T> {
    let res = error_for_status(res).await?;
    let body = res.bytes().await?;

    trace!("{}", String::from_utf8_lossy(&body));

    Ok(serde_json::from_slice(&body)?)
}

/// Like [`read_json`], for endpoints whose response body is of no interest.
pub(crate) async fn read_empty(res: Response) -> crate::Result<()> {
    error_for_status(res).await.map(drop)
}
