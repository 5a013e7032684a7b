use serde::Deserialize;

/// A YouTube URL together with the video id extracted from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoReference {
    pub url: String,
    pub video_id: String,
}

/// One timed caption cue, times in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptSegment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

impl TranscriptSegment {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }
}

/// Flattened transcript of a single video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptRecord {
    pub video_id: String,
    pub text: String,
}

// ─── ytInitialPlayerResponse ─────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub playability_status: Option<PlayabilityStatus>,
    pub captions: Option<Captions>,
}

#[derive(Debug, Deserialize)]
pub struct PlayabilityStatus {
    pub status: String,
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Captions {
    pub player_captions_tracklist_renderer: Option<CaptionTracklist>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTracklist {
    #[serde(default)]
    pub caption_tracks: Vec<CaptionTrack>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    pub base_url: String,
    pub language_code: String,
    /// `Some("asr")` for auto-generated tracks
    pub kind: Option<String>,
}

impl CaptionTrack {
    pub fn is_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }
}

// ─── timedtext fmt=json3 ─────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TimedText {
    #[serde(default)]
    pub events: Vec<TimedTextEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimedTextEvent {
    #[serde(default)]
    pub t_start_ms: u64,
    #[serde(default)]
    pub d_duration_ms: u64,
    pub segs: Option<Vec<TimedTextSeg>>,
}

#[derive(Debug, Deserialize)]
pub struct TimedTextSeg {
    #[serde(default)]
    pub utf8: String,
}
