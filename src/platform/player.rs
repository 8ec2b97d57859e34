//! InnerTube player API client
//!
//! Builds the profile-specific player request and decodes the response.
//! The request body shape is a discriminated template on the client
//! identity: the web client carries the scraped session config, the
//! Android client carries a fixed device identity and no API key.

use crate::error::ResolveError;
use crate::platform::client::HttpClient;
use crate::platform::profile::ClientProfile;
use crate::platform::session::PageConfig;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

const PLAYER_PATH: &str = "/youtubei/v1/player";
const ANDROID_CLIENT_NAME_HEADER: &str = "3";

/// Player response from the InnerTube API
///
/// A response without streaming data is useless and treated as a decode
/// failure; a response without captions is a video with no subtitles.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerResponse {
    #[serde(rename = "streamingData")]
    pub streaming_data: StreamingData,
    pub captions: Option<Captions>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StreamingData {
    /// Adaptive manifest; takes priority over the flat format list
    #[serde(rename = "hlsManifestUrl")]
    pub hls_manifest_url: Option<String>,
    /// Progressive formats, offered by mobile-style clients
    pub formats: Option<Vec<FormatEntry>>,
}

/// A single progressive (non-adaptive) stream
#[derive(Debug, Clone, Deserialize)]
pub struct FormatEntry {
    pub url: Option<String>,
    pub height: Option<u32>,
    #[serde(rename = "qualityLabel")]
    pub quality_label: Option<String>,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Captions {
    #[serde(rename = "playerCaptionsTracklistRenderer")]
    pub renderer: Option<CaptionsRenderer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaptionsRenderer {
    #[serde(rename = "captionTracks")]
    pub caption_tracks: Option<Vec<CaptionTrack>>,
}

/// One subtitle track offered by the player response
#[derive(Debug, Clone, Deserialize)]
pub struct CaptionTrack {
    #[serde(rename = "baseUrl")]
    pub base_url: String,
    pub name: TrackName,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackName {
    #[serde(rename = "simpleText")]
    pub simple_text: String,
}

impl PlayerResponse {
    /// Caption tracks in response order, empty when the video has none
    pub fn caption_tracks(&self) -> &[CaptionTrack] {
        self.captions
            .as_ref()
            .and_then(|captions| captions.renderer.as_ref())
            .and_then(|renderer| renderer.caption_tracks.as_deref())
            .unwrap_or(&[])
    }
}

/// Build the profile-specific player request body
fn build_request_body(
    profile: &ClientProfile,
    video_id: &str,
    config: Option<&PageConfig>,
) -> serde_json::Value {
    if profile.is_android() {
        json!({
            "context": {
                "client": {
                    "hl": "en",
                    "gl": "US",
                    "clientName": profile.client_name,
                    "clientVersion": profile.client_version,
                    "androidSdkVersion": 30,
                    "osName": "Android",
                    "osVersion": "11",
                    "userAgent": profile.user_agent,
                }
            },
            "videoId": video_id,
        })
    } else {
        let client_version = config
            .map(|config| config.client_version.as_str())
            .unwrap_or(&profile.client_version);
        let visitor_data = config
            .map(|config| config.visitor_data.as_str())
            .unwrap_or("");

        json!({
            "context": {
                "client": {
                    "hl": "en",
                    "gl": "US",
                    "clientName": profile.client_name,
                    "clientVersion": client_version,
                    "visitorData": visitor_data,
                    "platform": "DESKTOP",
                    "userAgent": profile.user_agent,
                }
            },
            "videoId": video_id,
            "playbackContext": {
                "contentPlaybackContext": {
                    "html5Preference": "HTML5_PREF_WANTS"
                }
            }
        })
    }
}

/// POST the player request and decode the response
///
/// Any transport error or undecodable body surfaces as
/// [`ResolveError::ApiRequestFailed`]; this call aborting aborts the
/// whole resolution.
pub async fn fetch_player_response(
    client: &HttpClient,
    profile: &ClientProfile,
    video_id: &str,
    config: Option<&PageConfig>,
) -> Result<PlayerResponse, ResolveError> {
    let mut url = format!("{}{}", client.api_base(), PLAYER_PATH);
    if let Some(config) = config.filter(|_| !profile.is_android()) {
        url = format!("{}?key={}", url, config.api_key);
    }

    let body = build_request_body(profile, video_id, config);
    debug!("POST {} for video {}", PLAYER_PATH, video_id);

    let mut extra_headers = Vec::new();
    if profile.is_android() {
        extra_headers.push((
            "X-YouTube-Client-Name",
            ANDROID_CLIENT_NAME_HEADER.to_string(),
        ));
        extra_headers.push(("X-YouTube-Client-Version", profile.client_version.clone()));
    }

    let text = client
        .post_json(&url, profile, &body, &extra_headers)
        .await
        .map_err(|err| ResolveError::ApiRequestFailed(err.to_string()))?;

    serde_json::from_str(&text).map_err(|err| {
        warn!("player response decode failed: {}", err);
        ResolveError::ApiRequestFailed(err.to_string())
    })
}
