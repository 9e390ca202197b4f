//! Client configuration from the environment.
use std::{fmt::Display, str::FromStr, time::Duration};

use crate::{
    auth::ApiKey,
    client::{ClientBuilder, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT},
    errors::Error,
    Client,
};

/// Everything needed to build a [`Client`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// See [`ClientBuilder::endpoint`].
    pub endpoint: String,
    /// See [`ClientBuilder::api_key`].
    pub api_key: Option<ApiKey>,
    /// See [`ClientBuilder::real_ip`].
    pub real_ip: Option<String>,
    /// See [`ClientBuilder::user_agent`].
    pub user_agent: Option<String>,
    /// See [`ClientBuilder::timeout`].
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            api_key: None,
            real_ip: None,
            user_agent: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    /// Read the configuration from environment variables, loading a `.env`
    /// file first if there is one:
    ///
    /// - `PIXELDRAIN_API_ENDPOINT`
    /// - `PIXELDRAIN_API_KEY`
    /// - `PIXELDRAIN_REAL_IP`
    /// - `PIXELDRAIN_USER_AGENT`
    /// - `PIXELDRAIN_TIMEOUT_SECS`
    ///
    /// # Errors
    ///
    /// Fails if a variable is set but cannot be parsed.
    pub fn from_env() -> crate::Result<Self> {
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    /// Like [`Config::from_env`] but reads variables through `lookup`.
    ///
    /// ```
    /// use pixeldrain::Config;
    ///
    /// let config = Config::from_lookup(|key| match key {
    ///     "PIXELDRAIN_API_KEY" => Some("secret".into()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(config.endpoint, "https://pixeldrain.com/api");
    /// assert_eq!(config.api_key.unwrap().expose(), "secret");
    /// ```
    ///
    /// # Errors
    ///
    /// Fails if a variable is set but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> crate::Result<Self> {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Ok(Self {
            endpoint: var("PIXELDRAIN_API_ENDPOINT").unwrap_or(defaults.endpoint),
            api_key: var("PIXELDRAIN_API_KEY").map(ApiKey::from),
            real_ip: var("PIXELDRAIN_REAL_IP"),
            user_agent: var("PIXELDRAIN_USER_AGENT"),
            timeout: parse_opt("PIXELDRAIN_TIMEOUT_SECS", var("PIXELDRAIN_TIMEOUT_SECS"))?
                .map_or(defaults.timeout, Duration::from_secs),
        })
    }

    /// Turn the configuration into a [`ClientBuilder`].
    #[must_use]
    pub fn builder(&self) -> ClientBuilder {
        let mut builder = Client::builder()
            .endpoint(self.endpoint.clone())
            .timeout(self.timeout);

        if let Some(ref key) = self.api_key {
            builder = builder.api_key(key.clone());
        }

        if let Some(ref ip) = self.real_ip {
            builder = builder.real_ip(ip.clone());
        }

        if let Some(ref agent) = self.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        builder
    }

    /// Build a [`Client`] from this configuration.
    ///
    /// # Errors
    ///
    /// See [`ClientBuilder::build`].
    pub fn build(&self) -> crate::Result<Client> {
        self.builder().build()
    }
}

fn parse_opt<T>(key: &'static str, value: Option<String>) -> crate::Result<Option<T>>
where
    T: FromStr,
    <T as FromStr>::Err: Display,
{
    value
        .map(|s| {
            s.parse().map_err(|e: T::Err| Error::InvalidConfig {
                key,
                reason: e.to_string(),
            })
        })
        .transpose()
}
