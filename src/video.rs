//! Conversion of video page links into embeddable player URLs

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static YOUTUBE_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());
static VIMEO_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Provider {
    YouTube,
    YouTubeShort,
    Vimeo,
    VimeoPlayer,
}

impl Provider {
    fn from_host(host: &str) -> Option<Self> {
        match host {
            "youtu.be" => Some(Provider::YouTubeShort),
            "youtube.com" | "www.youtube.com" | "m.youtube.com" => Some(Provider::YouTube),
            "vimeo.com" | "www.vimeo.com" => Some(Provider::Vimeo),
            "player.vimeo.com" => Some(Provider::VimeoPlayer),
            _ => None,
        }
    }

    fn video_id(&self, url: &Url) -> Option<String> {
        let mut segments = url.path_segments()?.filter(|s| !s.is_empty());

        let id = match self {
            Provider::YouTubeShort => segments.next().map(str::to_string),
            Provider::YouTube => match segments.next() {
                Some("watch") => url
                    .query_pairs()
                    .find(|(key, _)| key == "v")
                    .map(|(_, value)| value.into_owned()),
                Some("embed") | Some("shorts") => segments.next().map(str::to_string),
                _ => None,
            },
            Provider::Vimeo => segments.next().map(str::to_string),
            Provider::VimeoPlayer => match segments.next() {
                Some("video") => segments.next().map(str::to_string),
                _ => None,
            },
        }?;

        let pattern = match self {
            Provider::YouTube | Provider::YouTubeShort => &YOUTUBE_ID,
            Provider::Vimeo | Provider::VimeoPlayer => &VIMEO_ID,
        };
        pattern.is_match(&id).then_some(id)
    }

    fn player_url(&self, id: &str) -> String {
        match self {
            Provider::YouTube | Provider::YouTubeShort => {
                format!("https://www.youtube.com/embed/{}", id)
            }
            Provider::Vimeo | Provider::VimeoPlayer => {
                format!("https://player.vimeo.com/video/{}", id)
            }
        }
    }
}

fn provider(url: &str) -> Option<(Url, Provider)> {
    let parsed = Url::parse(url.trim()).ok()?;
    let host = parsed.host_str()?.to_ascii_lowercase();
    let provider = Provider::from_host(&host)?;
    Some((parsed, provider))
}

/// Embeddable player URL for a YouTube or Vimeo link.
///
/// Returns `None` for unknown hosts, missing or malformed video ids and
/// strings that do not parse as URLs.
pub fn embed_url(url: &str) -> Option<String> {
    let (parsed, provider) = provider(url)?;
    let id = provider.video_id(&parsed)?;
    Some(provider.player_url(&id))
}

/// Whether the URL points at a supported video host, regardless of whether a
/// video id can be extracted from it.
pub fn is_supported_video_url(url: &str) -> bool {
    provider(url).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtube_short_link() {
        assert_eq!(
            embed_url("https://youtu.be/abc123").as_deref(),
            Some("https://www.youtube.com/embed/abc123")
        );
    }

    #[test]
    fn test_youtube_watch() {
        assert_eq!(
            embed_url("https://www.youtube.com/watch?v=abc123").as_deref(),
            Some("https://www.youtube.com/embed/abc123")
        );
        assert_eq!(
            embed_url("https://youtube.com/watch?list=PL1&v=abc_12-3&t=42").as_deref(),
            Some("https://www.youtube.com/embed/abc_12-3")
        );
    }

    #[test]
    fn test_youtube_embed_and_shorts() {
        assert_eq!(
            embed_url("https://www.youtube.com/embed/abc123").as_deref(),
            Some("https://www.youtube.com/embed/abc123")
        );
        assert_eq!(
            embed_url("https://m.youtube.com/shorts/abc123").as_deref(),
            Some("https://www.youtube.com/embed/abc123")
        );
    }

    #[test]
    fn test_vimeo() {
        assert_eq!(
            embed_url("https://vimeo.com/123456").as_deref(),
            Some("https://player.vimeo.com/video/123456")
        );
        assert_eq!(
            embed_url("https://player.vimeo.com/video/123456?h=ff").as_deref(),
            Some("https://player.vimeo.com/video/123456")
        );
    }

    #[test]
    fn test_unsupported_host() {
        assert_eq!(embed_url("https://example.com/video"), None);
        assert!(!is_supported_video_url("https://example.com/video"));
    }

    #[test]
    fn test_malformed_input() {
        assert_eq!(embed_url("not a url"), None);
        assert_eq!(embed_url(""), None);
        assert!(!is_supported_video_url("not a url"));
    }

    #[test]
    fn test_known_host_without_id() {
        assert_eq!(embed_url("https://www.youtube.com/watch"), None);
        assert_eq!(embed_url("https://youtu.be/"), None);
        assert_eq!(embed_url("https://vimeo.com/channels"), None);
        assert!(is_supported_video_url("https://www.youtube.com/watch"));
        assert!(is_supported_video_url("https://vimeo.com/channels"));
    }

    #[test]
    fn test_host_is_case_insensitive() {
        assert_eq!(
            embed_url("https://YOUTU.BE/abc123").as_deref(),
            Some("https://www.youtube.com/embed/abc123")
        );
    }
}
