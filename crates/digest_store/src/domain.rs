use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A finished digest for a single video.
///
/// The serialized field set (`video_id`, `transcript`, `summary`,
/// `created_at`) is the on-disk format and must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub video_id: String,
    pub transcript: String,
    pub summary: String,
    pub created_at: DateTime<Utc>,
}

impl SummaryResult {
    pub fn new(
        video_id: impl Into<String>,
        transcript: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            video_id: video_id.into(),
            transcript: transcript.into(),
            summary: summary.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_field_set() {
        let result = SummaryResult::new("abc123", "Hello world", "Greeting.");
        let value = serde_json::to_value(&result).unwrap();
        let mut keys = value
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect::<Vec<_>>();
        keys.sort();

        assert_eq!(keys, ["created_at", "summary", "transcript", "video_id"]);
        assert_eq!(value["video_id"], "abc123");
        assert_eq!(value["transcript"], "Hello world");
        assert_eq!(value["summary"], "Greeting.");
    }
}
