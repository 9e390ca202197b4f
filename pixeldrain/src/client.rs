//! The pixeldrain client and the request helpers every endpoint is built on.
use std::time::Duration;

use reqwest::{header, Body, Method, RequestBuilder, Response, Url};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, instrument};

use crate::{
    api::{error_for_status, read_empty, read_json},
    auth::ApiKey,
    errors::Error,
    range::ByteRange,
};

/// Default `User-Agent` used in all requests to pixeldrain.
pub static USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// The public pixeldrain API.
pub const DEFAULT_ENDPOINT: &str = "https://pixeldrain.com/api";

/// Requests taking longer than this are aborted.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Endpoints starting with this prefix are dialed over a Unix domain socket.
pub const UNIX_ENDPOINT_PREFIX: &str = "http://unix:";

/// Host used in request urls when talking over a Unix socket. It never
/// reaches DNS.
const UNIX_SOCKET_HOST: &str = "http://api.sock";

/// A pixeldrain API client.
///
/// Cloning is cheap and clones share the connection pool. Methods like
/// [`Client::login`] return a modified copy and leave the original alone,
/// so one client can serve many users.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<ApiKey>,
    real_ip: Option<String>,
    user_agent: Option<String>,
}

/// Builder for [`Client`].
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct ClientBuilder {
    endpoint: String,
    api_key: Option<ApiKey>,
    real_ip: Option<String>,
    user_agent: Option<String>,
    timeout: Duration,
}

impl Default for ClientBuilder {
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

impl ClientBuilder {
    /// Base url of the API, like `https://pixeldrain.com/api`, or
    /// `http://unix:/path/to/socket` to use a Unix domain socket.
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Authenticate all requests with this key.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<ApiKey>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Forward this address in the `X-Real-IP` header.
    #[must_use]
    pub fn real_ip(mut self, ip: impl Into<String>) -> Self {
        self.real_ip = Some(ip.into());
        self
    }

    /// Replace [`USER_AGENT`] in every request.
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Request timeout. Defaults to [`DEFAULT_TIMEOUT`].
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// - the endpoint isn't a valid url
    /// - the endpoint is a Unix socket on a platform without them
    /// - the HTTP client fails to initialize
    pub fn build(self) -> crate::Result<Client> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.timeout);

        let (http, endpoint) = match self.endpoint.strip_prefix(UNIX_ENDPOINT_PREFIX) {
            Some(socket) => (dial_unix(http, socket)?, UNIX_SOCKET_HOST.to_owned()),
            None => (http, self.endpoint.trim_end_matches('/').to_owned()),
        };

        Url::parse(&endpoint)?;

        debug!("using endpoint {}", endpoint);

        Ok(Client {
            http: http.build()?,
            endpoint,
            api_key: self.api_key,
            real_ip: self.real_ip,
            user_agent: self.user_agent,
        })
    }
}

#[cfg(unix)]
fn dial_unix(
    builder: reqwest::ClientBuilder,
    socket: &str,
) -> crate::Result<reqwest::ClientBuilder> {
    if socket.is_empty() {
        return Err(Error::UnsupportedEndpoint(UNIX_ENDPOINT_PREFIX.to_owned()));
    }

    Ok(builder.unix_socket(std::path::PathBuf::from(socket)))
}

#[cfg(not(unix))]
fn dial_unix(
    _builder: reqwest::ClientBuilder,
    socket: &str,
) -> crate::Result<reqwest::ClientBuilder> {
    Err(Error::UnsupportedEndpoint(format!(
        "{UNIX_ENDPOINT_PREFIX}{socket}"
    )))
}

impl Client {
    /// Create a new anonymous client for `endpoint`.
    ///
    /// # Errors
    ///
    /// See [`ClientBuilder::build`].
    pub fn new(endpoint: impl Into<String>) -> crate::Result<Self> {
        Self::builder().endpoint(endpoint).build()
    }

    /// Start building a client.
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// A copy of this client which is logged in with `key`. The original
    /// client is not logged in.
    #[must_use]
    pub fn login(&self, key: impl Into<ApiKey>) -> Self {
        Self {
            api_key: Some(key.into()),
            ..self.clone()
        }
    }

    /// A copy of this client which forwards `ip` as the real address of
    /// the user on whose behalf requests are made.
    #[must_use]
    pub fn real_ip(&self, ip: impl Into<String>) -> Self {
        Self {
            real_ip: Some(ip.into()),
            ..self.clone()
        }
    }

    /// A copy of this client which sends `agent` as its `User-Agent`.
    #[must_use]
    pub fn user_agent(&self, agent: impl Into<String>) -> Self {
        Self {
            user_agent: Some(agent.into()),
            ..self.clone()
        }
    }

    /// The endpoint requests are sent to. For Unix sockets this is the
    /// placeholder host.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Is an API key attached to this client?
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.api_key.is_some()
    }

    fn url(&self, path: &str) -> crate::Result<Url> {
        // url parsing resolves `.` and `..` (escaped or not), which would
        // silently hit another endpoint
        let segments = path.split('?').next().unwrap_or_default();
        if let Some(segment) = segments.split('/').find(|s| matches!(*s, "." | "..")) {
            return Err(Error::DotSegment(segment.to_owned()));
        }

        Ok(Url::parse(&format!("{}/{}", self.endpoint, path))?)
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> crate::Result<RequestBuilder> {
        let mut req = self.http.request(method, self.url(path)?);

        if let Some(ref key) = self.api_key {
            req = req.basic_auth("", Some(key.expose()));
        }

        if let Some(ref ip) = self.real_ip {
            req = req.header("X-Real-IP", ip.as_str());
        }

        if let Some(ref agent) = self.user_agent {
            req = req.header(header::USER_AGENT, agent.as_str());
        }

        Ok(req)
    }

    pub(crate) async fn send(req: RequestBuilder) -> crate::Result<Response> {
        let res = req.send().await?;

        debug!("{} {}", res.status(), res.url().path());

        Ok(res)
    }

    /// Bodyless request with a JSON response.
    #[instrument(skip(self))]
    pub(crate) async fn json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
    ) -> crate::Result<T> {
        let res = Self::send(self.request(method, path)?).await?;

        read_json(res).await
    }

    /// Bodyless request whose response only matters for its status.
    #[instrument(skip(self))]
    pub(crate) async fn empty(&self, method: Method, path: &str) -> crate::Result<()> {
        let res = Self::send(self.request(method, path)?).await?;

        read_empty(res).await
    }

    /// Form encoded request with a JSON response.
    #[instrument(skip(self, form))]
    pub(crate) async fn form<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: &(impl Serialize + ?Sized),
    ) -> crate::Result<T> {
        let res = Self::send(self.request(method, path)?.form(form)).await?;

        read_json(res).await
    }

    /// Form encoded request whose response only matters for its status.
    #[instrument(skip(self, form))]
    pub(crate) async fn form_empty(
        &self,
        method: Method,
        path: &str,
        form: &(impl Serialize + ?Sized),
    ) -> crate::Result<()> {
        let res = Self::send(self.request(method, path)?.form(form)).await?;

        read_empty(res).await
    }

    /// Raw body request with a JSON response.
    #[instrument(skip(self, body))]
    pub(crate) async fn upload<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Body,
    ) -> crate::Result<T> {
        let res = Self::send(
            self.request(method, path)?
                .header(header::CONTENT_TYPE, "application/octet-stream")
                .body(body),
        )
        .await?;

        read_json(res).await
    }

    /// `GET` whose body is handed to the caller as is. Error statuses are
    /// still turned into errors.
    #[instrument(skip(self))]
    pub(crate) async fn raw(&self, path: &str, range: Option<ByteRange>) -> crate::Result<Response> {
        let mut req = self.request(Method::GET, path)?;

        if let Some(range) = range {
            req = req.header(header::RANGE, range);
        }

        error_for_status(Self::send(req).await?).await
    }
}
