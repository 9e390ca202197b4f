//! API keys.
use std::fmt::{self, Debug};

use uuid::Uuid;

/// An API key, sent as the password of HTTP basic auth with an empty
/// username. Obtained from [`Client::user_login`](crate::Client::user_login)
/// or the API keys page on the website.
///
/// The key is redacted from [`Debug`] output.
///
/// ```
/// use pixeldrain::auth::ApiKey;
///
/// let key = ApiKey::new("hunter2");
/// assert_eq!(key.expose(), "hunter2");
/// assert!(!format!("{key:?}").contains("hunter2"));
/// ```
#[derive(Clone, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub struct ApiKey(String);

impl ApiKey {
    /// Construct a new API key.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw key.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl From<String> for ApiKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ApiKey {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Session keys are UUIDs, see [`UserSession::auth_key`](crate::user::UserSession::auth_key).
impl From<Uuid> for ApiKey {
    fn from(value: Uuid) -> Self {
        Self(value.to_string())
    }
}
