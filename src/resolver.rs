//! The video resolution pipeline
//!
//! Identifier extraction, optional session negotiation, the player API
//! call, manifest resolution and link emission, in that order. Links and
//! subtitles are pushed to caller-supplied sinks as they are discovered;
//! nothing is accumulated for a batched return.

use crate::error::ResolveError;
use crate::hls;
use crate::links::{ExtractorLink, LinkType, SubtitleTrack};
use crate::platform::client::{HttpClient, HttpClientConfig};
use crate::platform::player::{self, FormatEntry, PlayerResponse};
use crate::platform::profile::ClientProfile;
use crate::platform::session;
use crate::utils::url::extract_video_id;
use crate::utils::{language, mime};
use tracing::{debug, info, warn};

/// Resolves video page URLs into playable links and subtitle tracks
///
/// Each resolution is stateless and self-contained; a single resolver
/// can serve concurrent resolutions with no shared mutable state.
pub struct YoutubeResolver {
    client: HttpClient,
    profile: ClientProfile,
}

impl YoutubeResolver {
    /// Create a resolver for a client profile
    pub fn new(profile: ClientProfile) -> Self {
        Self {
            client: HttpClient::new(),
            profile,
        }
    }

    /// Create a resolver with a custom HTTP configuration
    pub fn with_http_config(profile: ClientProfile, config: HttpClientConfig) -> Self {
        Self {
            client: HttpClient::with_config(config),
            profile,
        }
    }

    /// Resolve a video page URL, pushing results to the sinks
    ///
    /// Subtitles are emitted in caption-track order, links in playlist
    /// order. A partially successful resolution (subtitles but no links)
    /// returns `Ok`; only identifier extraction, session negotiation and
    /// the player call abort.
    pub async fn resolve<S, L>(
        &self,
        url: &str,
        mut on_subtitle: S,
        mut on_link: L,
    ) -> crate::Result<()>
    where
        S: FnMut(SubtitleTrack),
        L: FnMut(ExtractorLink),
    {
        info!("resolving {}", url);
        let video_id = extract_video_id(url)?;
        debug!("video id: {}", video_id);

        let config = if self.profile.requires_page_config {
            match session::fetch_page_config(&self.client, &self.profile, &video_id).await {
                Some(config) => Some(config),
                None => return Err(ResolveError::SessionConfigUnavailable),
            }
        } else {
            None
        };

        let response =
            player::fetch_player_response(&self.client, &self.profile, &video_id, config.as_ref())
                .await?;

        self.emit_subtitles(&response, &mut on_subtitle);

        if let Some(manifest_url) = response.streaming_data.hls_manifest_url.as_deref() {
            self.emit_hls_links(manifest_url, &mut on_link).await;
        } else if let Some(formats) = response.streaming_data.formats.as_deref() {
            self.emit_progressive_links(formats, &mut on_link);
        } else {
            warn!("streaming data carries neither a manifest nor formats");
        }

        Ok(())
    }

    fn emit_subtitles<S>(&self, response: &PlayerResponse, on_subtitle: &mut S)
    where
        S: FnMut(SubtitleTrack),
    {
        let tracks = response.caption_tracks();
        debug!("caption tracks: {}", tracks.len());

        for track in tracks {
            on_subtitle(SubtitleTrack {
                language: track.name.simple_text.clone(),
                url: format!("{}&fmt=ttml", track.base_url),
                headers: self.profile.headers(),
            });
        }
    }

    async fn emit_hls_links<L>(&self, manifest_url: &str, on_link: &mut L)
    where
        L: FnMut(ExtractorLink),
    {
        let body = match self.client.get_text(manifest_url, &self.profile).await {
            Ok(body) => body,
            Err(err) => {
                warn!("manifest fetch failed: {}", err);
                return;
            }
        };

        let playlist = match hls::parse_master_playlist(manifest_url, &body) {
            Some(playlist) => playlist,
            None => {
                warn!("manifest unparseable, emitting no links");
                return;
            }
        };
        debug!(
            "playlist: {} tags, {} variants",
            playlist.tags.len(),
            playlist.variants.len()
        );

        for variant in &playlist.variants {
            if variant.url.is_empty() {
                debug!("skipping variant with empty url");
                continue;
            }

            let lang = variant
                .audio_content_id
                .as_deref()
                .map(language::display_language)
                .unwrap_or_default();

            on_link(ExtractorLink {
                source: self.profile.label.clone(),
                name: display_name(&lang),
                url: variant.url.clone(),
                link_type: LinkType::Hls,
                quality: variant.height,
                referer: self.profile.referer(),
            });
        }
    }

    fn emit_progressive_links<L>(&self, formats: &[FormatEntry], on_link: &mut L)
    where
        L: FnMut(ExtractorLink),
    {
        for format in formats {
            if !mime::is_video_mime(&format.mime_type) {
                continue;
            }
            let url = match format.url.as_deref().filter(|url| !url.is_empty()) {
                Some(url) => url,
                None => {
                    debug!("skipping format with no url");
                    continue;
                }
            };

            on_link(ExtractorLink {
                source: self.profile.label.clone(),
                name: display_name(format.quality_label.as_deref().unwrap_or("")),
                url: url.to_string(),
                link_type: LinkType::Progressive,
                quality: format.height.unwrap_or(0),
                referer: self.profile.referer(),
            });
        }
    }
}

fn display_name(suffix: &str) -> String {
    if suffix.is_empty() {
        "Youtube".to_string()
    } else {
        format!("Youtube {}", suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WATCH_PAGE: &str = r#"<html><script>ytcfg.set({"INNERTUBE_API_KEY":"test-key","INNERTUBE_CLIENT_VERSION":"2.20240101.00.00","VISITOR_DATA":"visitor-token"});</script></html>"#;

    fn resolver_for(server: &mockito::Server, profile: ClientProfile) -> YoutubeResolver {
        YoutubeResolver::with_http_config(
            profile,
            HttpClientConfig {
                page_base: Some(server.url()),
                api_base: Some(server.url()),
                ..Default::default()
            },
        )
    }

    fn player_body_with_manifest(server: &mockito::Server) -> String {
        format!(
            r#"{{
                "streamingData": {{"hlsManifestUrl": "{}/manifest.m3u8"}},
                "captions": {{
                    "playerCaptionsTracklistRenderer": {{
                        "captionTracks": [
                            {{"baseUrl": "{}/timedtext?v=abc123&lang=en", "name": {{"simpleText": "English"}}}},
                            {{"baseUrl": "{}/timedtext?v=abc123&lang=tr", "name": {{"simpleText": "Turkish"}}}}
                        ]
                    }}
                }}
            }}"#,
            server.url(),
            server.url(),
            server.url()
        )
    }

    const MANIFEST: &str = "#EXTM3U\n\
        #EXT-X-INDEPENDENT-SEGMENTS\n\
        #EXT-X-STREAM-INF:BANDWIDTH=1117000,CODECS=\"avc1.4d401f,mp4a.40.2\",RESOLUTION=1280x720,YT-EXT-AUDIO-CONTENT-ID=\"en.at\"\n\
        https://cdn.example.com/hls/720.m3u8\n\
        #EXT-X-STREAM-INF:BANDWIDTH=600000,RESOLUTION=640x360,YT-EXT-AUDIO-CONTENT-ID=\"tr.3\"\n\
        360.m3u8\n";

    async fn run(
        resolver: &YoutubeResolver,
        url: &str,
    ) -> (Vec<SubtitleTrack>, Vec<ExtractorLink>, crate::Result<()>) {
        let mut subtitles = Vec::new();
        let mut links = Vec::new();
        let result = resolver
            .resolve(url, |sub| subtitles.push(sub), |link| links.push(link))
            .await;
        (subtitles, links, result)
    }

    #[tokio::test]
    async fn test_web_profile_end_to_end() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/watch?v=abc123")
            .with_status(200)
            .with_body(WATCH_PAGE)
            .create_async()
            .await;
        server
            .mock("POST", "/youtubei/v1/player")
            .match_query(mockito::Matcher::UrlEncoded(
                "key".into(),
                "test-key".into(),
            ))
            .with_status(200)
            .with_body(player_body_with_manifest(&server))
            .create_async()
            .await;
        server
            .mock("GET", "/manifest.m3u8")
            .with_status(200)
            .with_body(MANIFEST)
            .create_async()
            .await;

        let resolver = resolver_for(&server, ClientProfile::web());
        let (subtitles, links, result) = run(
            &resolver,
            "https://www.youtube.com/watch?v=abc123&feature=share",
        )
        .await;

        result.expect("resolution");

        assert_eq!(subtitles.len(), 2);
        assert_eq!(subtitles[0].language, "English");
        assert!(subtitles[0].url.ends_with("&fmt=ttml"));
        assert_eq!(subtitles[1].language, "Turkish");

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].name, "Youtube English");
        assert_eq!(links[0].quality, 720);
        assert_eq!(links[0].link_type, LinkType::Hls);
        assert_eq!(links[0].url, "https://cdn.example.com/hls/720.m3u8");
        assert_eq!(links[0].referer, "https://www.youtube.com/");
        assert_eq!(links[1].name, "Youtube Turkish");
        assert_eq!(links[1].quality, 360);
        // Relative variant joined against the manifest URL
        assert_eq!(links[1].url, format!("{}/360.m3u8", server.url()));
    }

    #[tokio::test]
    async fn test_android_profile_skips_watch_page() {
        let mut server = mockito::Server::new_async().await;
        // No watch-page mock: a page fetch would fail the test via the
        // pipeline aborting with SessionConfigUnavailable.
        server
            .mock("POST", "/youtubei/v1/player")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(
                r#"{
                    "streamingData": {
                        "formats": [
                            {"url": "https://cdn.example.com/video.mp4", "height": 720,
                             "qualityLabel": "720p", "mimeType": "video/mp4"},
                            {"url": "https://cdn.example.com/audio.m4a", "height": null,
                             "qualityLabel": null, "mimeType": "audio/mp4"}
                        ]
                    }
                }"#,
            )
            .create_async()
            .await;

        let resolver = resolver_for(&server, ClientProfile::android());
        let (subtitles, links, result) =
            run(&resolver, "https://youtu.be/abc123?t=5").await;

        result.expect("resolution");
        assert!(subtitles.is_empty());

        // Audio-only format filtered out, video format emitted
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].link_type, LinkType::Progressive);
        assert_eq!(links[0].name, "Youtube 720p");
        assert_eq!(links[0].quality, 720);
    }

    #[tokio::test]
    async fn test_unparseable_manifest_keeps_subtitles() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/watch?v=abc123")
            .with_status(200)
            .with_body(WATCH_PAGE)
            .create_async()
            .await;
        server
            .mock("POST", "/youtubei/v1/player")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(player_body_with_manifest(&server))
            .create_async()
            .await;
        server
            .mock("GET", "/manifest.m3u8")
            .with_status(200)
            .with_body("<html>not a playlist</html>")
            .create_async()
            .await;

        let resolver = resolver_for(&server, ClientProfile::web());
        let (subtitles, links, result) =
            run(&resolver, "https://www.youtube.com/watch?v=abc123").await;

        // Soft failure: the call succeeds with subtitles only
        result.expect("resolution");
        assert_eq!(subtitles.len(), 2);
        assert!(links.is_empty());
    }

    #[tokio::test]
    async fn test_missing_page_config_aborts_web_resolution() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/watch?v=abc123")
            .with_status(200)
            .with_body("<html>no embedded config</html>")
            .create_async()
            .await;

        let resolver = resolver_for(&server, ClientProfile::web());
        let (subtitles, links, result) =
            run(&resolver, "https://www.youtube.com/watch?v=abc123").await;

        assert!(matches!(
            result,
            Err(ResolveError::SessionConfigUnavailable)
        ));
        assert!(subtitles.is_empty());
        assert!(links.is_empty());
    }

    #[tokio::test]
    async fn test_player_failure_aborts_resolution() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/youtubei/v1/player")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let resolver = resolver_for(&server, ClientProfile::android());
        let (subtitles, links, result) =
            run(&resolver, "https://youtu.be/abc123").await;

        assert!(matches!(result, Err(ResolveError::ApiRequestFailed(_))));
        assert!(subtitles.is_empty());
        assert!(links.is_empty());
    }

    #[tokio::test]
    async fn test_bad_url_aborts_before_any_request() {
        let server = mockito::Server::new_async().await;
        let resolver = resolver_for(&server, ClientProfile::web());
        let (subtitles, links, result) =
            run(&resolver, "https://example.com/unrelated").await;

        assert!(matches!(result, Err(ResolveError::NoIdentifierFound(_))));
        assert!(subtitles.is_empty());
        assert!(links.is_empty());
    }

    #[tokio::test]
    async fn test_resolution_is_idempotent() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/watch?v=abc123")
            .with_status(200)
            .with_body(WATCH_PAGE)
            .expect(2)
            .create_async()
            .await;
        server
            .mock("POST", "/youtubei/v1/player")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(player_body_with_manifest(&server))
            .expect(2)
            .create_async()
            .await;
        server
            .mock("GET", "/manifest.m3u8")
            .with_status(200)
            .with_body(MANIFEST)
            .expect(2)
            .create_async()
            .await;

        let resolver = resolver_for(&server, ClientProfile::web());
        let url = "https://www.youtube.com/watch?v=abc123";
        let (first_subs, first_links, first) = run(&resolver, url).await;
        let (second_subs, second_links, second) = run(&resolver, url).await;

        first.expect("first resolution");
        second.expect("second resolution");
        assert_eq!(first_subs, second_subs);
        assert_eq!(first_links, second_links);
    }

    #[tokio::test]
    async fn test_incomplete_variants_are_skipped() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/watch?v=abc123")
            .with_status(200)
            .with_body(WATCH_PAGE)
            .create_async()
            .await;
        server
            .mock("POST", "/youtubei/v1/player")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(format!(
                r#"{{"streamingData": {{"hlsManifestUrl": "{}/manifest.m3u8"}}}}"#,
                server.url()
            ))
            .create_async()
            .await;
        // Second stream-inf tag never gets a URI, third URI is stray
        server
            .mock("GET", "/manifest.m3u8")
            .with_status(200)
            .with_body(
                "#EXTM3U\n\
                 #EXT-X-STREAM-INF:RESOLUTION=1280x720\n\
                 https://cdn.example.com/720.m3u8\n\
                 #EXT-X-STREAM-INF:RESOLUTION=640x360\n",
            )
            .create_async()
            .await;

        let resolver = resolver_for(&server, ClientProfile::web());
        let (_, links, result) =
            run(&resolver, "https://www.youtube.com/watch?v=abc123").await;

        result.expect("resolution");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].quality, 720);
    }
}
