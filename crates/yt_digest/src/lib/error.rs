use digest_store::StoreError;

use crate::{llm::summarizer::SummarizeError, yt::TranscriptError};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid YouTube URL: {0}")]
    InvalidUrl(String),
    #[error("Parse error: {0}")]
    ParseError(&'static str),
    #[error(transparent)]
    Transcript(#[from] TranscriptError),
    #[error(transparent)]
    Summarize(#[from] SummarizeError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
