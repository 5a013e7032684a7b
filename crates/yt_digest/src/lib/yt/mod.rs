pub mod captions;

use std::future::Future;

use itertools::Itertools;

use crate::types::{TranscriptRecord, TranscriptSegment};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    /// The video has no usable transcript; retrying will not help
    #[error("Transcript unavailable for video {video_id}: {reason}")]
    Unavailable { video_id: String, reason: String },
    /// The transcript source could not be reached or answered garbage
    #[error("Network error: {0}")]
    Network(#[source] BoxError),
}

impl TranscriptError {
    pub fn unavailable(video_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            video_id: video_id.into(),
            reason: reason.into(),
        }
    }

    pub fn network(source: impl Into<BoxError>) -> Self {
        Self::Network(source.into())
    }
}

/// Source of timed caption segments for a video.
pub trait TranscriptSource {
    /// Returns the caption segments of `video_id` in chronological order.
    fn fetch(
        &self,
        video_id: &str,
    ) -> impl Future<Output = Result<Vec<TranscriptSegment>, TranscriptError>>;
}

/// Turns the segments of a [`TranscriptSource`] into a single transcript text.
#[derive(Debug, Clone)]
pub struct TranscriptFetcher<S> {
    source: S,
}

impl<S: TranscriptSource> TranscriptFetcher<S> {
    pub const SEPARATOR: &str = " ";

    pub fn new(source: S) -> Self {
        Self { source }
    }

    #[tracing::instrument(skip(self))]
    pub async fn fetch(&self, video_id: &str) -> Result<TranscriptRecord, TranscriptError> {
        let segments = self.source.fetch(video_id).await?;
        let segment_count = segments.len();

        let text = segments
            .iter()
            .map(|seg| seg.text.trim())
            .filter(|text| !text.is_empty())
            .join(Self::SEPARATOR);

        if text.is_empty() {
            return Err(TranscriptError::unavailable(
                video_id,
                "transcript has no text",
            ));
        }

        tracing::debug!(
            segment_count,
            chars = text.chars().count(),
            "Transcript fetched"
        );

        Ok(TranscriptRecord {
            video_id: video_id.to_string(),
            text,
        })
    }
}
