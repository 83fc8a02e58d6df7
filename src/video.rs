/// Video-hosting URL recognition for the active-tab pre-fill
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static YOUTUBE_HOST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(www\.|m\.|music\.)?youtube\.com$").expect("youtube host pattern is valid")
});

static YOUTUBE_CLIP_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/(shorts|live|embed)/[A-Za-z0-9_-]+/?$").expect("youtube path pattern is valid")
});

static SHORT_LINK_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/[A-Za-z0-9_-]+/?$").expect("short link pattern is valid")
});

static VIMEO_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/[0-9]+/?$").expect("vimeo path pattern is valid"));

/// Check whether a URL points at a single video on a recognised host
///
/// Accepted:
/// - https://www.youtube.com/watch?v=ID (also m., music. and bare youtube.com)
/// - https://www.youtube.com/shorts/ID, /live/ID, /embed/ID
/// - https://youtu.be/ID
/// - https://vimeo.com/123456
///
/// Channel pages, playlists, search results and other sites are rejected.
pub fn is_video_url(candidate: &str) -> bool {
    let Ok(url) = Url::parse(candidate.trim()) else {
        return false;
    };

    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }

    let Some(host) = url.host_str().map(str::to_lowercase) else {
        return false;
    };
    let path = url.path();

    if YOUTUBE_HOST.is_match(&host) {
        return (path == "/watch" && has_video_param(&url)) || YOUTUBE_CLIP_PATH.is_match(path);
    }

    match host.as_str() {
        "youtu.be" => SHORT_LINK_PATH.is_match(path),
        "vimeo.com" | "www.vimeo.com" => VIMEO_PATH.is_match(path),
        _ => false,
    }
}

fn has_video_param(url: &Url) -> bool {
    url.query_pairs()
        .any(|(key, value)| key == "v" && !value.is_empty())
}
