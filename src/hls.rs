//! HLS multivariant playlist parsing
//!
//! Parses the top-level playlist into variant records. Each
//! `#EXT-X-STREAM-INF` tag is paired with the first URI line that follows
//! it while the playlist is walked, so attribute-to-URI pairing is
//! structural and survives malformed input with uneven tag and URI counts.

use tracing::warn;
use url::Url;

const HEADER: &str = "#EXTM3U";
const STREAM_INF: &str = "#EXT-X-STREAM-INF";
const AUDIO_CONTENT_ID: &str = "YT-EXT-AUDIO-CONTENT-ID";

/// One selectable rendition of a multivariant playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantStream {
    /// Absolute playable URL; empty when the URI could not be resolved
    pub url: String,
    /// Vertical resolution from the RESOLUTION attribute, 0 when absent
    pub height: u32,
    /// Audio content identifier from the provider's playlist extension
    pub audio_content_id: Option<String>,
}

/// Parsed multivariant playlist
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MasterPlaylist {
    /// Raw tag lines in input order
    pub tags: Vec<String>,
    /// Variant records in input order
    pub variants: Vec<VariantStream>,
}

/// Parse a multivariant playlist body
///
/// Relative variant URIs are resolved against `base_url`. Returns `None`
/// when the body is not an M3U playlist at all.
pub fn parse_master_playlist(base_url: &str, body: &str) -> Option<MasterPlaylist> {
    if !body.trim_start().starts_with(HEADER) {
        warn!("playlist body does not start with {}", HEADER);
        return None;
    }

    let base = Url::parse(base_url).ok();
    let mut playlist = MasterPlaylist::default();
    // Stream-inf attributes waiting for their URI line
    let mut pending: Option<String> = None;

    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(tag) = line.strip_prefix('#') {
            if let Some(rest) = tag.strip_prefix(&STREAM_INF[1..]) {
                pending = Some(rest.trim_start_matches(':').to_string());
            }
            playlist.tags.push(line.to_string());
            continue;
        }

        if let Some(attrs) = pending.take() {
            playlist.variants.push(VariantStream {
                url: resolve_uri(base.as_ref(), line),
                height: parse_height(&attrs),
                audio_content_id: attribute_value(&attrs, AUDIO_CONTENT_ID)
                    .map(str::to_string),
            });
        }
    }

    Some(playlist)
}

fn resolve_uri(base: Option<&Url>, line: &str) -> String {
    if let Ok(absolute) = Url::parse(line) {
        return absolute.to_string();
    }
    match base.and_then(|b| b.join(line).ok()) {
        Some(joined) => joined.to_string(),
        None => String::new(),
    }
}

fn parse_height(attrs: &str) -> u32 {
    attribute_value(attrs, "RESOLUTION")
        .and_then(|resolution| resolution.split('x').nth(1))
        .and_then(|height| height.parse().ok())
        .unwrap_or(0)
}

/// Look up one attribute in a stream-inf attribute list
///
/// Attribute values may be quoted and contain commas (CODECS does), so the
/// list cannot be split naively.
fn attribute_value<'a>(attrs: &'a str, name: &str) -> Option<&'a str> {
    split_attributes(attrs).into_iter().find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.trim_matches('"'))
    })
}

fn split_attributes(attrs: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;

    for (index, ch) in attrs.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                parts.push(&attrs[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    parts.push(&attrs[start..]);
    parts
}
