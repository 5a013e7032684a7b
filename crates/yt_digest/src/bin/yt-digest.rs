use std::{path::PathBuf, process::ExitCode, time::Duration};

use anyhow::Context;
use clap::Parser;
use digest_store::JsonFileStore;
use yt_digest::{
    gemini::GeminiClient, tracing::init_tracing_subscriber, yt::captions::YtCaptions,
    DigestProcessorBuilder, PromptTemplate, Summarizer,
};

#[derive(Parser)]
#[command(
    name = "yt-digest",
    about = "Summarize YouTube videos from their transcripts"
)]
struct Cli {
    /// YouTube video URLs to summarize
    #[arg(required = true, num_args = 1..)]
    urls: Vec<String>,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Gemini model used for summaries
    #[arg(long, env = "GEMINI_MODEL", default_value = GeminiClient::DEFAULT_MODEL)]
    model: String,

    /// Directory summaries are written to
    #[arg(long, env = "YT_DIGEST_OUTPUT_DIR", default_value = JsonFileStore::DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Transcript languages to try, in order of preference
    #[arg(
        long,
        env = "TRANSCRIPT_LANGUAGES",
        value_delimiter = ',',
        default_value = "es,en"
    )]
    languages: Vec<String>,

    /// Transcripts longer than this many characters are rejected
    #[arg(long, env = "MAX_TRANSCRIPT_CHARS", default_value_t = Summarizer::<GeminiClient>::DEFAULT_MAX_INPUT_CHARS)]
    max_input_chars: usize,

    /// Timeout for each HTTP request, in seconds
    #[arg(long, env = "HTTP_TIMEOUT_SECS", default_value = "120")]
    timeout_secs: u64,

    /// File holding a prompt template; `{transcript}` marks where the
    /// transcript goes
    #[arg(long)]
    prompt_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let prompt_template = match &cli.prompt_file {
        Some(path) => std::fs::read_to_string(path)
            .map(PromptTemplate::new)
            .with_context(|| format!("Failed to read prompt file {}", path.display()))?,
        None => PromptTemplate::default(),
    };

    let timeout = Duration::from_secs(cli.timeout_secs);
    let captions = YtCaptions::with_timeout(cli.languages, timeout)
        .context("Failed to build transcript http client")?;
    let gemini = GeminiClient::with_timeout(&cli.api_key, timeout)
        .context("Failed to build gemini http client")?
        .with_model(&cli.model);

    let processor = DigestProcessorBuilder::new()
        .transcript_source(captions)
        .text_generator(gemini)
        .store(JsonFileStore::new(&cli.output_dir))
        .prompt_template(prompt_template)
        .max_input_chars(cli.max_input_chars)
        .span(tracing::info_span!("yt_digest", model = %cli.model))
        .build();

    let report = processor.run(&cli.urls).await;

    for result in report.succeeded() {
        println!("{}", processor.store().path_for(&result.video_id).display());
    }

    if report.all_failed() {
        tracing::error!(urls = cli.urls.len(), "Every url failed");
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
