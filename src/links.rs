//! Output records produced by a resolution

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Kind of playable link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkType {
    /// Adaptive rendition selected from an HLS multivariant playlist
    Hls,
    /// Single directly playable media URL
    Progressive,
}

/// A playable media link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorLink {
    /// Provider label, e.g. "YouTube"
    pub source: String,
    /// Display name, carries the audio language when known
    pub name: String,
    /// Playable URL
    pub url: String,
    /// HLS rendition or progressive file
    pub link_type: LinkType,
    /// Vertical resolution, 0 when unknown
    pub quality: u32,
    /// Referer to send when playing the link
    pub referer: String,
}

/// A subtitle track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleTrack {
    /// Language label, verbatim from the provider
    pub language: String,
    /// Track URL, already carrying the format parameter
    pub url: String,
    /// Headers to send when fetching the track
    pub headers: HashMap<String, String>,
}
