use crate::error::Result;
use reqwest::blocking::{Client, ClientBuilder};
use std::time::Duration;

/// Default value of the `Accept-Version` header
pub const DEFAULT_VERSION: &str = "v3.0";

/// Default path prefix Ghost is mounted under
pub const DEFAULT_GHOST_PATH: &str = "ghost";

/// User-Agent sent when none is configured
pub const DEFAULT_USER_AGENT: &str = "ghost-admin-rs v1";

/// Default timeout for a single HTTP round trip
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Create the HTTP client for Admin API requests, bounded by the configured timeout
pub fn create_http_client(config: &Config) -> Result<Client> {
    let client = ClientBuilder::new().timeout(config.timeout).build()?;
    Ok(client)
}

/// Configuration for the Ghost Admin API client
#[derive(Debug, Clone)]
pub struct Config {
    /// Value of the `Accept-Version` header
    pub version: String,
    /// Path prefix Ghost is served from, without slashes
    pub ghost_path: String,
    /// User-Agent header; empty means [`DEFAULT_USER_AGENT`]
    pub user_agent: String,
    /// Per-request HTTP timeout
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version: DEFAULT_VERSION.to_string(),
            ghost_path: DEFAULT_GHOST_PATH.to_string(),
            user_agent: String::new(),
            timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}

impl Config {
    /// Set the API version sent in `Accept-Version`
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the path prefix used by the endpoint helpers
    pub fn with_ghost_path(mut self, ghost_path: impl Into<String>) -> Self {
        self.ghost_path = ghost_path.into();
        self
    }

    /// Set the User-Agent header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the HTTP timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// User-Agent to send, falling back to the default when unset
    pub fn user_agent(&self) -> &str {
        if self.user_agent.is_empty() {
            DEFAULT_USER_AGENT
        } else {
            &self.user_agent
        }
    }

    /// Path for a resource collection, e.g. `("admin", "posts")` gives
    /// `/ghost/api/admin/posts/`
    pub fn endpoint(&self, api: &str, resource: &str) -> String {
        format!("/{}/api/{}/{}/", self.ghost_path, api, resource)
    }

    /// Path for a single resource addressed by id
    pub fn endpoint_for_id(&self, api: &str, resource: &str, id: &str) -> String {
        format!("{}{}/", self.endpoint(api, resource), id)
    }

    /// Path for a single resource addressed by slug
    pub fn endpoint_for_slug(&self, api: &str, resource: &str, slug: &str) -> String {
        format!("{}slug/{}/", self.endpoint(api, resource), slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.version, "v3.0");
        assert_eq!(config.ghost_path, "ghost");
        assert_eq!(config.user_agent(), DEFAULT_USER_AGENT);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_config_setters() {
        let config = Config::default()
            .with_version("v5.0")
            .with_ghost_path("blog")
            .with_user_agent("my-app/2.1")
            .with_timeout(Duration::from_secs(3));

        assert_eq!(config.version, "v5.0");
        assert_eq!(config.user_agent(), "my-app/2.1");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.endpoint("admin", "posts"), "/blog/api/admin/posts/");
    }

    #[test]
    fn test_endpoints() {
        let config = Config::default();
        assert_eq!(config.endpoint("admin", "post"), "/ghost/api/admin/post/");
        assert_eq!(
            config.endpoint_for_id("admin", "post", "abc123"),
            "/ghost/api/admin/post/abc123/"
        );
        assert_eq!(
            config.endpoint_for_slug("admin", "post", "my-post"),
            "/ghost/api/admin/post/slug/my-post/"
        );
    }

    #[test]
    fn test_create_http_client() {
        let config = Config::default().with_timeout(Duration::from_millis(500));
        assert!(create_http_client(&config).is_ok());
    }
}
