use crate::apikey::generate_token;
use crate::client::{create_http_client, Config};
use crate::error::{GhostError, Result};
use reqwest::blocking::{Client, Request, Response};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use serde::Serialize;
use std::time::Instant;
use url::Url;

const ACCEPT_VERSION: &str = "Accept-Version";

/// Client for the Ghost Admin API
#[derive(Clone)]
pub struct GhostClient {
    /// HTTP client
    client: Client,
    /// Configuration, fixed at construction
    config: Config,
    /// Site URL, e.g. `https://blog.example.com`
    url: String,
    /// Admin key as `<id>:<hex secret>`; empty for unauthenticated requests
    key: String,
}

impl GhostClient {
    /// Create a client with default configuration. `url` is the site root and
    /// `key` the Admin API key, see <https://ghost.org/docs/admin-api/#token-authentication>.
    pub fn new(url: impl Into<String>, key: impl Into<String>) -> Result<Self> {
        Self::with_config(url, key, Config::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(
        url: impl Into<String>,
        key: impl Into<String>,
        config: Config,
    ) -> Result<Self> {
        Ok(GhostClient {
            client: create_http_client(&config)?,
            config,
            url: url.into(),
            key: key.into(),
        })
    }

    /// Site URL requests are made against
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether requests carry an `Authorization` header
    pub fn is_authenticated(&self) -> bool {
        !self.key.is_empty()
    }

    /// Build an Admin API request without sending it
    ///
    /// # Arguments
    /// * `method` - HTTP method (GET, POST, PUT, DELETE, ...)
    /// * `path` - Path appended to the site URL. The joined URL is parsed with
    ///   [`Url::parse`], which resolves `.` and `..` segments
    /// * `data` - Optional payload, sent as the JSON body
    ///
    /// # Returns
    /// A request carrying the standard headers and, when a key is configured,
    /// a freshly signed `Authorization: Ghost <token>` header
    pub fn new_request<P>(&self, method: &str, path: &str, data: Option<&P>) -> Result<Request>
    where
        P: Serialize + ?Sized,
    {
        let url = Url::parse(&format!("{}{}", self.url, path))?;

        let body = match data {
            Some(data) => Some(serde_json::to_vec(data)?),
            None => None,
        };

        let http_method = Method::from_bytes(method.as_bytes())
            .map_err(|_| GhostError::RequestBuild(format!("Invalid HTTP method: {}", method)))?;

        let mut request = self
            .client
            .request(http_method, url)
            .header(USER_AGENT, self.config.user_agent())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT_VERSION, self.config.version.as_str());

        if let Some(body) = body {
            request = request.body(body);
        }

        if self.is_authenticated() {
            let token = generate_token(&self.key)?;
            request = request.header(AUTHORIZATION, format!("Ghost {}", token));
        }

        tracing::debug!(
            method,
            path,
            authenticated = self.is_authenticated(),
            "built Admin API request"
        );

        request
            .build()
            .map_err(|e| GhostError::RequestBuild(e.to_string()))
    }

    /// Build and send an Admin API request, returning the raw response.
    /// The payload must follow Ghost's JSON format, see
    /// <https://ghost.org/docs/admin-api/#json-format>.
    pub fn request<P>(&self, method: &str, path: &str, data: Option<&P>) -> Result<Response>
    where
        P: Serialize + ?Sized,
    {
        let request = self.new_request(method, path, data)?;
        self.execute(request)
    }

    /// Send a request built by [`GhostClient::new_request`]. The status code is
    /// not inspected.
    pub fn execute(&self, request: Request) -> Result<Response> {
        let method = request.method().clone();
        let url = request.url().clone();

        let start = Instant::now();
        let response = self.client.execute(request)?;

        tracing::debug!(
            method = %method,
            url = %url,
            status = response.status().as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Admin API request completed"
        );

        Ok(response)
    }

    /// See [`Config::endpoint`]
    pub fn endpoint(&self, api: &str, resource: &str) -> String {
        self.config.endpoint(api, resource)
    }

    /// See [`Config::endpoint_for_id`]
    pub fn endpoint_for_id(&self, api: &str, resource: &str, id: &str) -> String {
        self.config.endpoint_for_id(api, resource, id)
    }

    /// See [`Config::endpoint_for_slug`]
    pub fn endpoint_for_slug(&self, api: &str, resource: &str, slug: &str) -> String {
        self.config.endpoint_for_slug(api, resource, slug)
    }
}

// Implement Debug manually to avoid exposing the admin key
impl std::fmt::Debug for GhostClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GhostClient")
            .field("url", &self.url)
            .field("config", &self.config)
            .field("key", &if self.key.is_empty() { "<none>" } else { "<redacted>" })
            .finish()
    }
}
