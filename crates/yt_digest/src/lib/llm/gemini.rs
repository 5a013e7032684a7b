use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::llm::summarizer::TextGenerator;

pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Empty response: {0}")]
    EmptyResponse(String),
}

impl GeminiClient {
    pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

    pub fn new(api_key: impl Into<String>) -> Result<Self, GeminiError> {
        Self::with_timeout(api_key, Self::DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(api_key: impl Into<String>, timeout: Duration) -> Result<Self, GeminiError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key: api_key.into(),
            model: Self::DEFAULT_MODEL.into(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".into(),
        })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub async fn send_generate_request(
        &self,
        prompt: impl Into<String>,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let body = serde_json::json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": prompt.into() }]
                }
            ]
        });

        let resp = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, self.model
            ))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(GeminiError::Api { status, message });
        }

        Ok(resp.json::<GenerateContentResponse>().await?)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
pub struct Part {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect::<String>();

        (!text.trim().is_empty()).then_some(text)
    }

    fn empty_reason(&self) -> String {
        if let Some(reason) = self
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            return format!("prompt blocked: {reason}");
        }

        match self.candidates.first() {
            Some(Candidate {
                finish_reason: Some(reason),
                ..
            }) => format!("no text, finish reason {reason}"),
            Some(_) => "no text in candidate".into(),
            None => "no candidates".into(),
        }
    }
}

impl TextGenerator for GeminiClient {
    type Error = GeminiError;

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        let response = self
            .send_generate_request(prompt)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to generate content"))?;

        response
            .text()
            .ok_or_else(|| GeminiError::EmptyResponse(response.empty_reason()))
    }
}
