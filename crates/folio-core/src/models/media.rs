//! Media asset classification and URL resolution.

use std::fmt;

/// Prefix that marks a media string as a direct URL.
pub const URL_PREFIX: &str = "http";

/// Streaming endpoint for asset identifiers. `{id}` is replaced verbatim.
pub const STREAM_URL_TEMPLATE: &str = "https://stream.mux.com/{id}.m3u8";

/// Suffix of an HLS playlist URL.
pub const STREAM_SUFFIX: &str = ".m3u8";

/// File suffixes treated as still images.
pub const IMAGE_SUFFIXES: &[&str] = &[".jpg", ".png", ".jpeg"];

/// Kind of a single media string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify a media string by its file suffix.
    ///
    /// This is a plain, case-sensitive string test. `photo.JPG` is a video
    /// and `https://cdn/clip` is a video; no content type is consulted.
    pub fn infer(media: &str) -> Self {
        if IMAGE_SUFFIXES.iter().any(|suffix| media.ends_with(suffix)) {
            Self::Image
        } else {
            Self::Video
        }
    }

    pub fn is_video(self) -> bool {
        self == Self::Video
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Video => write!(f, "video"),
        }
    }
}

/// Resolve a media string to a loadable URL.
///
/// Strings starting with `http` are used as-is; anything else is an asset
/// identifier for the streaming service.
pub fn resolve_media_url(media: &str) -> String {
    if media.starts_with(URL_PREFIX) {
        media.to_string()
    } else {
        STREAM_URL_TEMPLATE.replace("{id}", media)
    }
}

/// Whether a resolved URL points at an HLS playlist.
///
/// Query strings and fragments are ignored, so signed playlist URLs still
/// count.
pub fn is_stream_url(url: &str) -> bool {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.ends_with(STREAM_SUFFIX)
}

/// A media string paired with its kind and resolved URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaAsset {
    pub kind: MediaKind,
    /// The string exactly as it appeared in the feed.
    pub src: String,
    pub url: String,
}

impl MediaAsset {
    pub fn new(kind: MediaKind, src: impl Into<String>) -> Self {
        let src = src.into();
        let url = resolve_media_url(&src);
        Self { kind, src, url }
    }

    /// Build an asset whose kind comes from [`MediaKind::infer`].
    pub fn inferred(src: impl Into<String>) -> Self {
        let src = src.into();
        Self::new(MediaKind::infer(&src), src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_kind() {
        assert_eq!(MediaKind::infer("photo.jpg"), MediaKind::Image);
        assert_eq!(MediaKind::infer("http://x/a.png"), MediaKind::Image);
        assert_eq!(MediaKind::infer("https://x/a.jpeg"), MediaKind::Image);
        assert_eq!(MediaKind::infer("abcXYZ123"), MediaKind::Video);
        assert_eq!(MediaKind::infer("http://x/video"), MediaKind::Video);
    }

    #[test]
    fn test_infer_is_case_sensitive() {
        assert_eq!(MediaKind::infer("photo.JPG"), MediaKind::Video);
        assert_eq!(MediaKind::infer("photo.webp"), MediaKind::Video);
    }

    #[test]
    fn test_resolve_url() {
        assert_eq!(
            resolve_media_url("https://cdn.example.com/a.jpg"),
            "https://cdn.example.com/a.jpg"
        );
        assert_eq!(
            resolve_media_url("b00gAbC"),
            "https://stream.mux.com/b00gAbC.m3u8"
        );
        // Only the prefix matters, not the scheme.
        assert_eq!(resolve_media_url("httpfoo"), "httpfoo");
    }

    #[test]
    fn test_stream_url() {
        assert!(is_stream_url(&resolve_media_url("b00gAbC")));
        assert!(is_stream_url("https://cdn.example.com/clip.m3u8?token=abc"));
        assert!(!is_stream_url("https://cdn.example.com/clip.mp4"));
        assert!(!is_stream_url("https://cdn.example.com/a.jpg"));
    }

    #[test]
    fn test_asset_keeps_source() {
        let asset = MediaAsset::inferred("xyz");
        assert_eq!(asset.kind, MediaKind::Video);
        assert_eq!(asset.src, "xyz");
        assert_eq!(asset.url, "https://stream.mux.com/xyz.m3u8");
    }
}
