pub mod builder;

use std::fmt;

use digest_store::{ResultStore, SummaryResult};
use tracing::Instrument;

use crate::{
    error::Error,
    llm::summarizer::{PromptTemplate, Summarizer, TextGenerator},
    parser::extract_video_id,
    yt::{TranscriptFetcher, TranscriptSource},
};

/// Progress of a single URL through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Pending,
    IdExtracted,
    TranscriptFetched,
    Summarized,
    Saved,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Pending => "pending",
            Stage::IdExtracted => "id_extracted",
            Stage::TranscriptFetched => "transcript_fetched",
            Stage::Summarized => "summarized",
            Stage::Saved => "saved",
        };
        f.write_str(name)
    }
}

/// A URL that did not make it to [`Stage::Saved`].
/// `stage` is the last stage reached before the failing step.
#[derive(Debug)]
pub struct UrlFailure {
    pub url: String,
    pub stage: Stage,
    pub error: Error,
}

/// Outcome of every input URL, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<Result<SummaryResult, UrlFailure>>,
}

impl BatchReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &SummaryResult> {
        self.outcomes.iter().filter_map(|o| o.as_ref().ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = &UrlFailure> {
        self.outcomes.iter().filter_map(|o| o.as_ref().err())
    }

    /// True when no URL produced a saved summary
    pub fn all_failed(&self) -> bool {
        self.succeeded().next().is_none()
    }
}

// Sequential transcript -> summary -> store pipeline over a list of urls
#[derive(Debug)]
pub struct DigestProcessor<S, G, D>
where
    S: TranscriptSource,
    G: TextGenerator,
    D: ResultStore,
{
    fetcher: TranscriptFetcher<S>,
    summarizer: Summarizer<G>,
    store: D,
    prompt_template: PromptTemplate,
    span: tracing::Span,
}

impl<S, G, D> DigestProcessor<S, G, D>
where
    S: TranscriptSource,
    G: TextGenerator,
    D: ResultStore,
{
    pub fn store(&self) -> &D {
        &self.store
    }

    /// Runs every url through the pipeline, one after another.
    ///
    /// A failing url is logged and recorded in the report; it never stops the
    /// remaining urls. Nothing is written for a url unless its summary is
    /// complete.
    pub async fn run<I>(&self, urls: I) -> BatchReport
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut report = BatchReport::default();

        for url in urls {
            let url = url.as_ref();
            let span = tracing::info_span!(parent: &self.span, "process_url", %url);

            let outcome = self.process_url(url).instrument(span.clone()).await;

            span.in_scope(|| match &outcome {
                Ok(result) => {
                    tracing::info!(video_id = %result.video_id, "Digest saved");
                }
                Err(failure) => {
                    tracing::error!(
                        stage = %failure.stage,
                        error = %failure.error,
                        "Failed to process url"
                    );
                }
            });

            report.outcomes.push(outcome);
        }

        let succeeded = report.succeeded().count();
        self.span.in_scope(|| {
            tracing::info!(
                total = report.outcomes.len(),
                succeeded,
                failed = report.outcomes.len() - succeeded,
                "Batch finished"
            )
        });

        report
    }

    async fn process_url(&self, url: &str) -> Result<SummaryResult, UrlFailure> {
        let fail = |stage: Stage, error: Error| UrlFailure {
            url: url.to_string(),
            stage,
            error,
        };

        let reference = extract_video_id(url).map_err(|e| fail(Stage::Pending, e))?;
        tracing::debug!(video_id = %reference.video_id, stage = %Stage::IdExtracted);

        let transcript = self
            .fetcher
            .fetch(&reference.video_id)
            .await
            .map_err(|e| fail(Stage::IdExtracted, e.into()))?;
        tracing::debug!(stage = %Stage::TranscriptFetched);

        let summary = self
            .summarizer
            .summarize(&transcript.text, &self.prompt_template)
            .await
            .map_err(|e| fail(Stage::TranscriptFetched, e.into()))?;
        tracing::debug!(stage = %Stage::Summarized);

        let result = SummaryResult::new(transcript.video_id, transcript.text, summary);
        self.store
            .save(&result)
            .await
            .map_err(|e| fail(Stage::Summarized, e.into()))?;
        tracing::debug!(stage = %Stage::Saved);

        Ok(result)
    }
}
