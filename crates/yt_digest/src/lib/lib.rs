mod error;
mod llm;
pub mod parser;
mod processor;
#[cfg(test)]
mod test_server;
pub mod tracing;
pub mod types;
pub mod yt;

pub use error::Error;
pub use llm::gemini;
pub use llm::summarizer::{PromptTemplate, SummarizeError, Summarizer, TextGenerator};
pub use processor::{
    builder::DigestProcessorBuilder, BatchReport, DigestProcessor, Stage, UrlFailure,
};
pub use yt::{TranscriptError, TranscriptFetcher, TranscriptSource};
