use std::sync::LazyLock;

use regex::Regex;

static VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:v=|youtu\.be/|embed/)([a-zA-Z0-9_-]{11})")
        .unwrap_or_else(|e| unreachable!("video id pattern is a literal: {e}"))
});

/// Pull the 11 character video id out of a `watch?v=`, `youtu.be/` or `embed/` URL.
///
/// Anything else yields `None`, which callers treat as "no player".
pub fn extract_video_id(url: &str) -> Option<&str> {
    VIDEO_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Player URL for an extracted id, with autoplay enabled.
pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}?autoplay=1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_watch_url() {
        let id = extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert_eq!(id, Some("dQw4w9WgXcQ"));
    }

    #[test]
    fn test_extract_watch_url_with_extra_params() {
        let id = extract_video_id("https://www.youtube.com/watch?list=PL1&v=_Yhyp-_hX2s&t=42");
        assert_eq!(id, Some("_Yhyp-_hX2s"));
    }

    #[test]
    fn test_extract_short_url() {
        assert_eq!(extract_video_id("https://youtu.be/1w7OgIMMRc4"), Some("1w7OgIMMRc4"));
    }

    #[test]
    fn test_extract_embed_url() {
        let id = extract_video_id("https://www.youtube.com/embed/cb2w2m1JmCY?start=3");
        assert_eq!(id, Some("cb2w2m1JmCY"));
    }

    #[test]
    fn test_extract_takes_first_eleven_chars() {
        let id = extract_video_id("https://youtu.be/abcdefghijklmnop");
        assert_eq!(id, Some("abcdefghijk"));
    }

    #[test]
    fn test_extract_unrecognized() {
        assert_eq!(extract_video_id("https://www.youtube.com/results?search_query=blues"), None);
        assert_eq!(extract_video_id("https://vimeo.com/123456789"), None);
        assert_eq!(extract_video_id("https://youtu.be/short"), None);
        assert_eq!(extract_video_id(""), None);
    }

    #[test]
    fn test_embed_url_autoplays() {
        assert_eq!(
            embed_url("dQw4w9WgXcQ"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1"
        );
    }
}
