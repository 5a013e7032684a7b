use std::time::Duration;

use crate::{
    parser::{parse_timed_text, select_caption_track, YtWatchPage},
    types::{TimedText, TranscriptSegment},
    yt::{TranscriptError, TranscriptSource},
};

/// Reads the caption tracks YouTube publishes alongside a video.
#[derive(Debug, Clone)]
pub struct YtCaptions {
    client: reqwest::Client,
    languages: Vec<String>,
    base_url: String,
}

impl YtCaptions {
    const WATCH_PATH: &str = "/watch";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(languages: Vec<String>) -> Result<Self, reqwest::Error> {
        Self::with_timeout(languages, Self::DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(languages: Vec<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let languages = languages
            .iter()
            .map(|lang| lang.trim())
            .filter(|lang| !lang.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            client,
            languages,
            base_url: "https://www.youtube.com".into(),
        })
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_watch_page(&self, video_id: &str) -> Result<YtWatchPage, reqwest::Error> {
        let html = self
            .client
            .get(format!("{}{}", self.base_url, Self::WATCH_PATH))
            .query(&[("v", video_id)])
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(html.into())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_timed_text(&self, track_url: &str) -> Result<TimedText, reqwest::Error> {
        self.client
            .get(track_url)
            .query(&[("fmt", "json3")])
            .send()
            .await?
            .error_for_status()?
            .json::<TimedText>()
            .await
    }
}

impl TranscriptSource for YtCaptions {
    async fn fetch(&self, video_id: &str) -> Result<Vec<TranscriptSegment>, TranscriptError> {
        let page = self
            .fetch_watch_page(video_id)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to load watch page"))
            .map_err(TranscriptError::network)?;

        let player = page
            .player_response()
            .inspect_err(|e| tracing::error!(error = %e, "Failed to parse watch page"))
            .map_err(TranscriptError::network)?;

        if let Some(status) = player.playability_status.filter(|s| s.status != "OK") {
            return Err(TranscriptError::unavailable(
                video_id,
                status.reason.unwrap_or(status.status),
            ));
        }

        let tracks = player
            .captions
            .and_then(|c| c.player_captions_tracklist_renderer)
            .map(|r| r.caption_tracks)
            .unwrap_or_default();

        if tracks.is_empty() {
            return Err(TranscriptError::unavailable(
                video_id,
                "captions are disabled for this video",
            ));
        }

        let track = select_caption_track(&tracks, &self.languages).ok_or_else(|| {
            let available = tracks
                .iter()
                .map(|t| t.language_code.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            TranscriptError::unavailable(
                video_id,
                format!(
                    "no transcript in [{}], available: [{available}]",
                    self.languages.join(", ")
                ),
            )
        })?;

        tracing::debug!(
            language = %track.language_code,
            generated = track.is_generated(),
            "Selected caption track"
        );

        let timed_text = self
            .fetch_timed_text(&track.base_url)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to download caption track"))
            .map_err(TranscriptError::network)?;

        Ok(parse_timed_text(timed_text))
    }
}
