use std::future::Future;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum SummarizeError {
    #[error("Transcript is empty")]
    EmptyTranscript,
    #[error("Transcript too large: {len} characters exceeds the limit of {limit}")]
    InputTooLarge { len: usize, limit: usize },
    #[error("Summarization service error: {0}")]
    Service(#[source] BoxError),
}

/// A generative text model.
pub trait TextGenerator {
    type Error: Into<BoxError>;

    fn model(&self) -> &str;

    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, Self::Error>>;
}

/// Prompt with a `{transcript}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate(String);

impl PromptTemplate {
    const PLACEHOLDER: &str = "{transcript}";
    const DEFAULT_PROMPT: &str = include_str!("./prompts/summary_0.txt");

    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// Fills in the transcript. Templates lacking the placeholder get the
    /// transcript appended under a `Transcript:` heading.
    pub fn render(&self, transcript: &str) -> String {
        if self.0.contains(Self::PLACEHOLDER) {
            self.0.replace(Self::PLACEHOLDER, transcript)
        } else {
            format!("{}\n\nTranscript:\n{transcript}", self.0.trim_end())
        }
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PROMPT)
    }
}

/// Summarizes transcripts through a [`TextGenerator`].
///
/// Transcripts longer than `max_input_chars` are rejected rather than
/// truncated.
#[derive(Debug, Clone)]
pub struct Summarizer<G> {
    generator: G,
    max_input_chars: usize,
}

impl<G: TextGenerator> Summarizer<G> {
    pub const DEFAULT_MAX_INPUT_CHARS: usize = 400_000;

    pub fn new(generator: G) -> Self {
        Self {
            generator,
            max_input_chars: Self::DEFAULT_MAX_INPUT_CHARS,
        }
    }

    pub fn with_max_input_chars(mut self, max_input_chars: usize) -> Self {
        self.max_input_chars = max_input_chars;
        self
    }

    pub fn max_input_chars(&self) -> usize {
        self.max_input_chars
    }

    #[tracing::instrument(skip_all, fields(model = self.generator.model()))]
    pub async fn summarize(
        &self,
        transcript: &str,
        template: &PromptTemplate,
    ) -> Result<String, SummarizeError> {
        if transcript.trim().is_empty() {
            return Err(SummarizeError::EmptyTranscript);
        }

        let len = transcript.chars().count();
        if len > self.max_input_chars {
            return Err(SummarizeError::InputTooLarge {
                len,
                limit: self.max_input_chars,
            });
        }

        let prompt = template.render(transcript);
        let summary = self
            .generator
            .generate(&prompt)
            .await
            .map_err(|e| SummarizeError::Service(e.into()))
            .inspect_err(|e| tracing::error!(error = %e, "Failed to summarize transcript"))?;

        if summary.trim().is_empty() {
            return Err(SummarizeError::Service("model returned an empty summary".into()));
        }

        Ok(summary)
    }
}
