//! Client profiles: request-identity bundles mimicking official clients

use std::collections::HashMap;

/// User agent sent by web-style profiles
pub const WEB_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.5 Safari/605.1.15";

/// User agent sent by the Android profile
pub const ANDROID_USER_AGENT: &str =
    "com.google.android.youtube/20.10.38 (Linux; U; Android 11) gzip";

/// Fallback client version when the watch page does not advertise one
pub const DEFAULT_WEB_CLIENT_VERSION: &str = "2.20240725.01.00";

const ANDROID_CLIENT_VERSION: &str = "20.10.38";

/// Named bundle of request-identity parameters
///
/// The web, mobile-web, no-cookie, short-link and Android variants are
/// instances of this, differing only in data. Web-style profiles scrape
/// the watch page for an API key before calling the player endpoint;
/// the Android profile authenticates through client identity alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientProfile {
    /// Source label attached to emitted links
    pub label: String,
    /// InnerTube client name, e.g. "WEB" or "ANDROID"
    pub client_name: String,
    /// Default client version, overridden by the page config when present
    pub client_version: String,
    pub user_agent: String,
    pub accept_language: String,
    /// Base URL for watch-page fetches and the link referer
    pub page_base: String,
    /// Whether the watch page must be scraped for a session config
    pub requires_page_config: bool,
}

impl ClientProfile {
    /// Desktop web client against www.youtube.com
    pub fn web() -> Self {
        Self {
            label: "YouTube".to_string(),
            client_name: "WEB".to_string(),
            client_version: DEFAULT_WEB_CLIENT_VERSION.to_string(),
            user_agent: WEB_USER_AGENT.to_string(),
            accept_language: "en-US,en;q=0.5".to_string(),
            page_base: "https://www.youtube.com".to_string(),
            requires_page_config: true,
        }
    }

    /// Web client against the mobile host
    pub fn mobile_web() -> Self {
        Self {
            page_base: "https://m.youtube.com".to_string(),
            ..Self::web()
        }
    }

    /// Web client against the no-cookie embed host
    pub fn no_cookie() -> Self {
        Self {
            page_base: "https://www.youtube-nocookie.com".to_string(),
            ..Self::web()
        }
    }

    /// Web client against the short-link host
    pub fn short_link() -> Self {
        Self {
            page_base: "https://youtu.be".to_string(),
            ..Self::web()
        }
    }

    /// Android app client; needs no watch-page scrape and no API key
    pub fn android() -> Self {
        Self {
            label: "YouTube".to_string(),
            client_name: "ANDROID".to_string(),
            client_version: ANDROID_CLIENT_VERSION.to_string(),
            user_agent: ANDROID_USER_AGENT.to_string(),
            accept_language: "en-US,en;q=0.5".to_string(),
            page_base: "https://www.youtube.com".to_string(),
            requires_page_config: false,
        }
    }

    /// Check if this profile carries the Android client identity
    pub fn is_android(&self) -> bool {
        self.client_name == "ANDROID"
    }

    /// Headers sent with every request made under this profile
    pub fn headers(&self) -> HashMap<String, String> {
        HashMap::from([
            ("User-Agent".to_string(), self.user_agent.clone()),
            ("Accept-Language".to_string(), self.accept_language.clone()),
        ])
    }

    /// Referer attached to emitted links
    pub fn referer(&self) -> String {
        format!("{}/", self.page_base)
    }
}
