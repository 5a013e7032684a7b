use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};
use yt_digest::{types::TranscriptSegment, TranscriptError, TranscriptSource};

#[derive(Clone)]
pub struct MockTranscriptSource {
    pub segments: Vec<TranscriptSegment>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub captions_disabled: HashSet<String>,
    pub fail_with: Option<String>,
}

impl MockTranscriptSource {
    pub fn new(segments: &[(&str, f64, f64)]) -> Self {
        Self {
            segments: segments
                .iter()
                .map(|(text, start, duration)| TranscriptSegment::new(*text, *start, *duration))
                .collect(),
            calls: Arc::new(Mutex::new(Vec::new())),
            captions_disabled: HashSet::new(),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::new(&[])
        }
    }

    pub fn with_captions_disabled(mut self, video_id: &str) -> Self {
        self.captions_disabled.insert(video_id.to_string());
        self
    }
}

impl TranscriptSource for MockTranscriptSource {
    async fn fetch(&self, video_id: &str) -> Result<Vec<TranscriptSegment>, TranscriptError> {
        self.calls.lock().unwrap().push(video_id.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(TranscriptError::network(msg.clone()));
        }
        if self.captions_disabled.contains(video_id) {
            return Err(TranscriptError::unavailable(
                video_id,
                "captions are disabled for this video",
            ));
        }
        Ok(self.segments.clone())
    }
}
