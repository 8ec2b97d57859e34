//! Watch-page session configuration scraping
//!
//! Web-style clients need an API key, client version and visitor token
//! that only appear inside a script blob on the watch page. Scraping an
//! embedded page object is a fragile external contract, so it lives
//! behind this module and nothing else touches page HTML.

use crate::platform::client::HttpClient;
use crate::platform::profile::{ClientProfile, DEFAULT_WEB_CLIENT_VERSION};
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, warn};

/// Embedded player configuration scraped from a watch page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageConfig {
    #[serde(rename = "INNERTUBE_API_KEY")]
    pub api_key: String,
    #[serde(rename = "INNERTUBE_CLIENT_VERSION", default = "default_client_version")]
    pub client_version: String,
    #[serde(rename = "VISITOR_DATA", default)]
    pub visitor_data: String,
}

fn default_client_version() -> String {
    DEFAULT_WEB_CLIENT_VERSION.to_string()
}

/// Locate the `ytcfg.set({...});` object literal in a page body
pub(crate) fn extract_ytcfg(html: &str) -> Option<&str> {
    let regex = Regex::new(r"ytcfg\.set\(\s*(\{.*?\})\s*\)\s*;").ok()?;
    Some(regex.captures(html)?.get(1)?.as_str())
}

/// Fetch the watch page and scrape its embedded configuration
///
/// Returns `None` when the fetch fails, the marker is absent or the blob
/// does not decode; the caller decides whether that aborts the
/// resolution.
pub async fn fetch_page_config(
    client: &HttpClient,
    profile: &ClientProfile,
    video_id: &str,
) -> Option<PageConfig> {
    let url = format!("{}/watch?v={}", client.page_base(profile), video_id);

    let html = match client.get_text(&url, profile).await {
        Ok(html) => html,
        Err(err) => {
            warn!("watch page fetch failed: {}", err);
            return None;
        }
    };

    let blob = match extract_ytcfg(&html) {
        Some(blob) => blob,
        None => {
            warn!("no ytcfg marker in watch page ({} bytes)", html.len());
            return None;
        }
    };
    debug!("ytcfg blob: {} bytes", blob.len());

    match serde_json::from_str(blob) {
        Ok(config) => Some(config),
        Err(err) => {
            warn!("ytcfg decode failed: {}", err);
            None
        }
    }
}
