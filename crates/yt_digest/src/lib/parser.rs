//! # Yt Parser
//!
//! Video id extraction from the URL forms YouTube hands out, and parsing of
//! the caption data embedded in a watch page.

use std::{ops::Deref, sync::LazyLock};

use itertools::Itertools;
use regex::Regex;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    error::Error,
    types::{CaptionTrack, PlayerResponse, TimedText, TranscriptSegment, VideoReference},
};

static VIDEO_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,64}$").unwrap());

static YT_PLAYER_RESPONSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)ytInitialPlayerResponse\s*=\s*(\{.+?\})\s*;\s*(?:var\s|</script>)").unwrap()
});

const YOUTUBE_HOSTS: [&str; 3] = ["youtube.com", "www.youtube.com", "m.youtube.com"];
const SHORT_LINK_HOST: &str = "youtu.be";

/// Extracts the video id from a YouTube URL.
///
/// Supported forms:
/// * `https://www.youtube.com/watch?v=ID` (extra query parameters allowed)
/// * `https://youtu.be/ID`
/// * `https://www.youtube.com/{embed,v,shorts,live}/ID`
///
/// A missing scheme is tolerated (`youtu.be/ID`).
///
/// # Returns
/// * `Ok(VideoReference)` holding the trimmed input and the id.
/// * `Err(Error::InvalidUrl)` if no identifier-shaped segment is found.
pub fn extract_video_id(url: &str) -> Result<VideoReference, Error> {
    let raw = url.trim();
    let invalid = || Error::InvalidUrl(raw.to_string());

    let parsed = match Url::parse(raw) {
        Ok(parsed) => parsed,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse(&format!("https://{raw}")).map_err(|_| invalid())?
        }
        Err(_) => return Err(invalid()),
    };

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid());
    }

    let host = parsed.host_str().unwrap_or_default();
    let mut segments = parsed
        .path_segments()
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty());

    let candidate = if host == SHORT_LINK_HOST {
        segments.next().map(str::to_string)
    } else if YOUTUBE_HOSTS.contains(&host) {
        match segments.next() {
            Some("watch") => parsed
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned()),
            Some("embed" | "v" | "shorts" | "live") => segments.next().map(str::to_string),
            _ => None,
        }
    } else {
        None
    };

    candidate
        .filter(|id| VIDEO_ID_RE.is_match(id))
        .map(|video_id| VideoReference {
            url: raw.to_string(),
            video_id,
        })
        .ok_or_else(invalid)
}

/// Picks the caption track to download.
///
/// Languages are tried in order; for each one a manually created track wins
/// over an auto-generated one.
pub fn select_caption_track<'a>(
    tracks: &'a [CaptionTrack],
    languages: &[String],
) -> Option<&'a CaptionTrack> {
    languages.iter().find_map(|lang| {
        let mut matching = tracks
            .iter()
            .filter(|t| t.language_code.eq_ignore_ascii_case(lang));

        matching
            .clone()
            .find(|t| !t.is_generated())
            .or_else(|| matching.find(|t| t.is_generated()))
    })
}

/// Converts a `fmt=json3` timedtext document into ordered transcript segments.
/// Events without text (window setup, line breaks) are dropped.
pub fn parse_timed_text(timed_text: TimedText) -> Vec<TranscriptSegment> {
    timed_text
        .events
        .into_iter()
        .filter_map(|event| {
            let text = event
                .segs?
                .into_iter()
                .map(|seg| seg.utf8)
                .collect::<String>()
                .replace('\n', " ");
            let text = text.trim();
            if text.is_empty() {
                return None;
            }

            Some(TranscriptSegment::new(
                text,
                event.t_start_ms as f64 / 1000.0,
                event.d_duration_ms as f64 / 1000.0,
            ))
        })
        .sorted_by(|a, b| a.start.total_cmp(&b.start))
        .collect()
}

/// Raw html of a `youtube.com/watch` page
pub struct YtWatchPage(String);

impl Deref for YtWatchPage {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl YtWatchPage {
    pub fn new(doc: String) -> Self {
        YtWatchPage(doc)
    }

    pub fn to_json<T>(&self) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let raw = YT_PLAYER_RESPONSE_RE
            .captures(self)
            .and_then(|cap| cap.get(1))
            .ok_or(Error::ParseError(
                "Failed to locate ytInitialPlayerResponse in the page's script tags",
            ))?;

        Ok(serde_json::from_str(raw.as_str())?)
    }

    pub fn player_response(&self) -> Result<PlayerResponse, Error> {
        self.to_json::<PlayerResponse>()
    }
}

impl From<String> for YtWatchPage {
    fn from(value: String) -> Self {
        YtWatchPage(value)
    }
}
