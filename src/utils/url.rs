//! URL utilities for extracting video IDs from the known page URL shapes

use crate::error::ResolveError;
use tracing::debug;

/// Redirector wrappers are unwrapped at most this many times
const MAX_REDIRECT_DEPTH: u8 = 1;

/// Direct capture arms, ordered: first match wins. Each marker carries the
/// stop set that terminates its capture.
const DIRECT_ARMS: [(&str, &[&str]); 11] = [
    ("watch?v=", &["&", "#"]),
    ("&v=", &["&", "#"]),
    ("youtu.be/", &["?", "#", "&"]),
    ("/embed/", &["?", "#"]),
    ("/v/", &["?", "#"]),
    ("/e/", &["?", "#"]),
    ("/shorts/", &["?", "#"]),
    ("/live/", &["?", "#"]),
    ("/watch/", &["?", "#"]),
    ("watch%3Fv%3D", &["%26", "#"]),
    ("v%3D", &["%26", "#"]),
];

/// Extract the canonical video ID from any known URL shape
///
/// Fails with [`ResolveError::NoIdentifierFound`] when no pattern matches.
pub fn extract_video_id(url: &str) -> Result<String, ResolveError> {
    extract_at_depth(url, 0)
}

fn extract_at_depth(url: &str, depth: u8) -> Result<String, ResolveError> {
    debug!("extracting video id at depth {}: {}", depth, url);

    // Redirector wrappers carry a full nested URL in a query parameter and
    // must be tried before the generic arms; the unwrap depth is capped so
    // malformed self-referential input cannot loop.
    if depth < MAX_REDIRECT_DEPTH {
        for (host_marker, param_marker) in [("oembed", "url="), ("attribution_link", "u=")] {
            if !url.contains(host_marker) {
                continue;
            }
            if let Some(wrapped) = capture(url, param_marker, &["&"]) {
                if let Ok(decoded) = urlencoding::decode(wrapped) {
                    return extract_at_depth(&decoded, depth + 1);
                }
            }
        }
    }

    for (marker, stops) in DIRECT_ARMS {
        if let Some(id) = capture(url, marker, stops) {
            return Ok(id.to_string());
        }
    }

    Err(ResolveError::NoIdentifierFound(url.to_string()))
}

/// Capture the substring after `marker`, up to the first of `stops` or the
/// end of the string. Empty captures count as no match.
fn capture<'a>(url: &'a str, marker: &str, stops: &[&str]) -> Option<&'a str> {
    let start = url.find(marker)? + marker.len();
    let rest = &url[start..];
    let end = stops
        .iter()
        .filter_map(|stop| rest.find(stop))
        .min()
        .unwrap_or(rest.len());
    let id = &rest[..end];
    (!id.is_empty()).then_some(id)
}
