//! User accounts and sessions.
use reqwest::Method;
use serde::Deserialize;
use serde_with::serde_as;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{
    auth::ApiKey,
    file::FileInfo,
    list::ListInfo,
    serde::OptDateTime,
    subscription::SubscriptionType,
    Client,
};

/// Information about the logged in user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct UserInfo {
    /// Username.
    pub username: String,
    /// E-mail address, possibly empty.
    pub email: String,
    /// Current subscription type.
    pub subscription: SubscriptionType,
    /// Bytes stored.
    pub storage_space_used: i64,
    /// Whether the user is an admin.
    pub is_admin: bool,
    /// Prepaid balance in micro euros.
    pub balance_micro_eur: i64,
    /// Whether files may be embedded on other sites.
    #[serde(rename = "hotlinking_enabled")]
    pub hotlinking: bool,
    /// Transfer limit per month in bytes.
    pub monthly_transfer_cap: i64,
    /// Transfer used this month in bytes.
    pub monthly_transfer_used: i64,
}

/// One user session, i.e. one API key.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct UserSession {
    /// The API key of this session. Pass it to [`Client::login`].
    pub auth_key: Uuid,
    /// Address the session was created from.
    #[serde(rename = "creation_ip_address")]
    pub creation_ip: String,
    /// User agent the session was created with.
    pub user_agent: String,
    /// Application name given at login.
    pub app_name: String,
    /// Creation time.
    #[serde(with = "time::serde::rfc3339")]
    pub creation_time: OffsetDateTime,
    /// Last time the key was used.
    #[serde(default)]
    #[serde_as(as = "OptDateTime")]
    pub last_used_time: Option<OffsetDateTime>,
}

impl UserSession {
    /// The session key as an [`ApiKey`].
    #[must_use]
    pub fn api_key(&self) -> ApiKey {
        self.auth_key.into()
    }
}

/// A collection of files which belong to a user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileInfoSlice {
    /// The files.
    #[serde(default)]
    pub files: Vec<FileInfo>,
}

/// A collection of lists which belong to a user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListInfoSlice {
    /// The lists.
    #[serde(default)]
    pub lists: Vec<ListInfo>,
}

/// One hourly entry on the user's bill. Amounts are in micro euros.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct UserTransaction {
    /// When the transaction happened.
    #[serde(with = "time::serde::rfc3339")]
    pub time: OffsetDateTime,
    /// Balance after the transaction.
    pub new_balance: i64,
    /// Money added.
    pub deposit_amount: i64,
    /// Subscription fee.
    pub subscription_charge: i64,
    /// Storage fee.
    pub storage_charge: i64,
    /// Bytes stored.
    pub storage_used: i64,
    /// Bandwidth fee.
    pub bandwidth_charge: i64,
    /// Bytes transferred.
    pub bandwidth_used: i64,
}

impl Client {
    /// Register a new user. `username` and `password` are always required.
    /// `email` is optional, but without it the password cannot be reset.
    /// `captcha` is only needed if reCAPTCHA is enabled, see
    /// [`Client::recaptcha`].
    ///
    /// Validation problems come back as one [`ApiError`](crate::api::ApiError)
    /// with the code `multiple_errors` and the individual problems in
    /// [`ApiError::errors`](crate::api::ApiError::errors).
    ///
    /// # Errors
    ///
    /// - network errors
    /// - invalid or taken username, bad password, bad captcha
    pub async fn user_register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        captcha: &str,
    ) -> crate::Result<()> {
        self.form_empty(
            Method::POST,
            "user/register",
            &[
                ("username", username),
                ("email", email),
                ("password", password),
                ("recaptcha_response", captcha),
            ],
        )
        .await
    }

    /// Log in with a username and password. The returned session contains
    /// the new API key. `app` is stored with the session and shown on the
    /// API keys page of the user.
    ///
    /// # Errors
    ///
    /// - network errors
    /// - wrong username or password
    pub async fn user_login(
        &self,
        username: &str,
        password: &str,
        app: &str,
    ) -> crate::Result<UserSession> {
        self.form(
            Method::POST,
            "user/login",
            &[
                ("username", username),
                ("password", password),
                ("app_name", app),
            ],
        )
        .await
    }

    /// Get the logged in user.
    ///
    /// # Errors
    ///
    /// - network errors
    /// - not logged in
    pub async fn user(&self) -> crate::Result<UserInfo> {
        self.json(Method::GET, "user").await
    }

    /// Create a new session (API key) for the logged in user.
    ///
    /// # Errors
    ///
    /// - network errors
    /// - not logged in
    pub async fn create_user_session(&self, app: &str) -> crate::Result<UserSession> {
        self.form(Method::POST, "user/session", &[("app", app)])
            .await
    }

    /// List all active sessions of the logged in user.
    ///
    /// # Errors
    ///
    /// - network errors
    /// - not logged in
    pub async fn user_sessions(&self) -> crate::Result<Vec<UserSession>> {
        self.json(Method::GET, "user/session").await
    }

    /// Destroy a session so its key can no longer be used. The request is
    /// authenticated with `key` itself, which is what selects the session.
    ///
    /// # Errors
    ///
    /// - network errors
    /// - the key is already invalid
    pub async fn delete_user_session(&self, key: impl Into<ApiKey>) -> crate::Result<()> {
        self.login(key)
            .empty(Method::DELETE, "user/session")
            .await
    }

    /// Files uploaded by the logged in user.
    ///
    /// # Errors
    ///
    /// - network errors
    /// - not logged in
    pub async fn user_files(&self) -> crate::Result<FileInfoSlice> {
        self.json(Method::GET, "user/files").await
    }

    /// Lists created by the logged in user.
    ///
    /// # Errors
    ///
    /// - network errors
    /// - not logged in
    pub async fn user_lists(&self) -> crate::Result<ListInfoSlice> {
        self.json(Method::GET, "user/lists").await
    }

    /// Billing history of the logged in user.
    ///
    /// # Errors
    ///
    /// - network errors
    /// - not logged in
    pub async fn user_transactions(&self) -> crate::Result<Vec<UserTransaction>> {
        self.json(Method::GET, "user/transactions").await
    }

    /// Change the password of the logged in user.
    ///
    /// # Errors
    ///
    /// - network errors
    /// - wrong old password
    pub async fn change_password(&self, old: &str, new: &str) -> crate::Result<()> {
        self.form_empty(
            Method::PUT,
            "user/password",
            &[("old_password", old), ("new_password", new)],
        )
        .await
    }

    /// Start changing the e-mail address. A link with a key is sent to the
    /// new address; pass that key to [`Client::email_reset_confirm`] to
    /// apply the change. With `delete` set the address is removed instead.
    ///
    /// # Errors
    ///
    /// - network errors
    /// - invalid address
    pub async fn email_reset(&self, email: &str, delete: bool) -> crate::Result<()> {
        self.form_empty(
            Method::PUT,
            "user/email_reset",
            &[("new_email", email), ("delete", if delete { "true" } else { "false" })],
        )
        .await
    }

    /// Finish changing the e-mail address.
    ///
    /// # Errors
    ///
    /// - network errors
    /// - invalid or expired key
    pub async fn email_reset_confirm(&self, key: &str) -> crate::Result<()> {
        self.form_empty(Method::PUT, "user/email_reset_confirm", &[("key", key)])
            .await
    }

    /// Start resetting a forgotten password. A link with a key is sent to
    /// `email`; pass that key to [`Client::password_reset_confirm`].
    ///
    /// # Errors
    ///
    /// - network errors
    /// - bad captcha
    pub async fn password_reset(&self, email: &str, recaptcha_response: &str) -> crate::Result<()> {
        self.form_empty(
            Method::PUT,
            "user/password_reset",
            &[("email", email), ("recaptcha_response", recaptcha_response)],
        )
        .await
    }

    /// Finish resetting a password. If the key is valid `new_password`
    /// becomes the password.
    ///
    /// # Errors
    ///
    /// - network errors
    /// - invalid or expired key
    pub async fn password_reset_confirm(&self, key: &str, new_password: &str) -> crate::Result<()> {
        self.form_empty(
            Method::PUT,
            "user/password_reset_confirm",
            &[("key", key), ("new_password", new_password)],
        )
        .await
    }

    /// Change the username of the logged in user.
    ///
    /// # Errors
    ///
    /// - network errors
    /// - username taken or invalid
    pub async fn change_username(&self, username: &str) -> crate::Result<()> {
        self.form_empty(Method::PUT, "user/username", &[("new_username", username)])
            .await
    }
}
