//! HTTP client for watch-page, player API and manifest requests

use crate::error::ResolveError;
use crate::platform::profile::ClientProfile;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::{debug, warn};

const API_BASE: &str = "https://www.youtube.com";

/// HTTP client configuration
#[derive(Debug, Clone, Default)]
pub struct HttpClientConfig {
    /// Request timeout; defaults to 30 seconds
    pub timeout: Option<Duration>,
    /// Override for the profile's watch-page base (tests)
    pub page_base: Option<String>,
    /// Override for the player API base (tests)
    pub api_base: Option<String>,
}

/// Profile-aware HTTP client
///
/// Thin wrapper over `reqwest` carrying the timeout and the base-URL
/// overrides; every request is stamped with the profile's headers.
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a client with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Self {
        let client = ClientBuilder::new()
            .timeout(config.timeout.unwrap_or(Duration::from_secs(30)))
            .gzip(true)
            .brotli(true)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// Watch-page base for a profile, honoring the test override
    pub fn page_base(&self, profile: &ClientProfile) -> String {
        self.config
            .page_base
            .clone()
            .unwrap_or_else(|| profile.page_base.clone())
    }

    /// Player API base, honoring the test override
    pub fn api_base(&self) -> String {
        self.config
            .api_base
            .clone()
            .unwrap_or_else(|| API_BASE.to_string())
    }

    /// GET a text body with the profile's headers
    pub async fn get_text(
        &self,
        url: &str,
        profile: &ClientProfile,
    ) -> Result<String, ResolveError> {
        debug!("GET {}", url);

        let mut request = self.client.get(url);
        for (name, value) in profile.headers() {
            request = request.header(name, value);
        }

        let response = request.send().await?;
        if let Err(err) = response.error_for_status_ref() {
            warn!("GET {} returned {}", url, response.status());
            return Err(err.into());
        }

        Ok(response.text().await?)
    }

    /// POST a JSON body with the profile's headers, returning the body text
    pub async fn post_json(
        &self,
        url: &str,
        profile: &ClientProfile,
        body: &serde_json::Value,
        extra_headers: &[(&str, String)],
    ) -> Result<String, ResolveError> {
        debug!("POST {}", url);

        let mut request = self.client.post(url).json(body);
        for (name, value) in profile.headers() {
            request = request.header(name, value);
        }
        for (name, value) in extra_headers {
            request = request.header(*name, value);
        }

        let response = request.send().await?;
        if let Err(err) = response.error_for_status_ref() {
            warn!("POST {} returned {}", url, response.status());
            return Err(err.into());
        }

        Ok(response.text().await?)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bases() {
        let client = HttpClient::new();
        let profile = ClientProfile::web();
        assert_eq!(client.page_base(&profile), "https://www.youtube.com");
        assert_eq!(client.api_base(), "https://www.youtube.com");
    }

    #[test]
    fn test_profile_base_is_used() {
        let client = HttpClient::new();
        let profile = ClientProfile::short_link();
        assert_eq!(client.page_base(&profile), "https://youtu.be");
    }

    #[test]
    fn test_base_overrides() {
        let client = HttpClient::with_config(HttpClientConfig {
            page_base: Some("http://127.0.0.1:8080".to_string()),
            api_base: Some("http://127.0.0.1:8081".to_string()),
            ..Default::default()
        });
        let profile = ClientProfile::web();
        assert_eq!(client.page_base(&profile), "http://127.0.0.1:8080");
        assert_eq!(client.api_base(), "http://127.0.0.1:8081");
    }

    #[tokio::test]
    async fn test_get_text_sends_profile_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/watch")
            .match_header("Accept-Language", "en-US,en;q=0.5")
            .with_status(200)
            .with_body("page body")
            .create_async()
            .await;

        let client = HttpClient::new();
        let profile = ClientProfile::web();
        let body = client
            .get_text(&format!("{}/watch", server.url()), &profile)
            .await
            .expect("get_text");

        assert_eq!(body, "page body");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_text_propagates_http_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;

        let client = HttpClient::new();
        let profile = ClientProfile::web();
        let result = client
            .get_text(&format!("{}/missing", server.url()), &profile)
            .await;

        assert!(matches!(result, Err(ResolveError::Http(_))));
    }
}
