use digest_store::ResultStore;

use crate::{
    llm::summarizer::{PromptTemplate, Summarizer, TextGenerator},
    yt::{TranscriptFetcher, TranscriptSource},
    DigestProcessor,
};

pub struct DigestProcessorBuilder<S = (), G = (), D = ()> {
    transcript_source: S,
    text_generator: G,
    store: D,
    prompt_template: PromptTemplate,
    max_input_chars: Option<usize>,
    span: Option<tracing::Span>,
}

impl DigestProcessorBuilder {
    pub fn new() -> Self {
        Self {
            transcript_source: (),
            text_generator: (),
            store: (),
            prompt_template: PromptTemplate::default(),
            max_input_chars: None,
            span: None,
        }
    }
}

impl Default for DigestProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, G, D> DigestProcessorBuilder<S, G, D> {
    pub fn transcript_source<S2: TranscriptSource>(
        self,
        transcript_source: S2,
    ) -> DigestProcessorBuilder<S2, G, D> {
        DigestProcessorBuilder {
            transcript_source,
            text_generator: self.text_generator,
            store: self.store,
            prompt_template: self.prompt_template,
            max_input_chars: self.max_input_chars,
            span: self.span,
        }
    }

    pub fn text_generator<G2: TextGenerator>(
        self,
        text_generator: G2,
    ) -> DigestProcessorBuilder<S, G2, D> {
        DigestProcessorBuilder {
            transcript_source: self.transcript_source,
            text_generator,
            store: self.store,
            prompt_template: self.prompt_template,
            max_input_chars: self.max_input_chars,
            span: self.span,
        }
    }

    pub fn store<D2: ResultStore>(self, store: D2) -> DigestProcessorBuilder<S, G, D2> {
        DigestProcessorBuilder {
            transcript_source: self.transcript_source,
            text_generator: self.text_generator,
            store,
            prompt_template: self.prompt_template,
            max_input_chars: self.max_input_chars,
            span: self.span,
        }
    }

    pub fn prompt_template(mut self, prompt_template: PromptTemplate) -> Self {
        self.prompt_template = prompt_template;
        self
    }

    pub fn max_input_chars(mut self, max_input_chars: usize) -> Self {
        self.max_input_chars = Some(max_input_chars);
        self
    }

    /// Parent span for everything the processor logs. Create it after the
    /// subscriber is installed, otherwise it stays disabled.
    pub fn span(mut self, span: tracing::Span) -> Self {
        self.span = Some(span);
        self
    }
}

impl<S, G, D> DigestProcessorBuilder<S, G, D>
where
    S: TranscriptSource,
    G: TextGenerator,
    D: ResultStore,
{
    pub fn build(self) -> DigestProcessor<S, G, D> {
        let mut summarizer = Summarizer::new(self.text_generator);
        if let Some(max_input_chars) = self.max_input_chars {
            summarizer = summarizer.with_max_input_chars(max_input_chars);
        }

        DigestProcessor {
            fetcher: TranscriptFetcher::new(self.transcript_source),
            summarizer,
            store: self.store,
            prompt_template: self.prompt_template,
            span: self
                .span
                .unwrap_or_else(|| tracing::info_span!("yt_digest")),
        }
    }
}
