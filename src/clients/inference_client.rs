//! Hugging Face Inference API client
//!
//! Sends the full source text to a text-generation model in one synchronous
//! call and returns the generated summary.

use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{error, info};
use url::Url;

use crate::core::config::AppConfig;
use crate::core::models::{GeneratedText, GenerationParameters, GenerationRequest};
use crate::errors::SummarizerError;

// Roughly 4,000 words of output.
pub const MAX_NEW_TOKENS: u32 = 5000;
pub const DO_SAMPLE: bool = true;
pub const TEMPERATURE: f32 = 0.7;
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

pub const GENERATION_PARAMETERS: GenerationParameters = GenerationParameters {
    max_new_tokens: MAX_NEW_TOKENS,
    do_sample: DO_SAMPLE,
    temperature: TEMPERATURE,
};

/// Client for a single text-generation endpoint
pub struct InferenceClient {
    http: Client,
    endpoint: Url,
    api_token: Option<String>,
    timeout: Duration,
}

impl InferenceClient {
    /// # Errors
    ///
    /// Returns `ConfigError` if the configured endpoint is not a valid URL.
    pub fn new(http: Client, config: &AppConfig) -> Result<Self, SummarizerError> {
        let endpoint_str = config.inference_endpoint();
        let endpoint = Url::parse(&endpoint_str).map_err(|e| {
            SummarizerError::ConfigError(format!("Invalid inference endpoint {endpoint_str}: {e}"))
        })?;

        Ok(Self {
            http,
            endpoint,
            api_token: config.hf_api_token.clone(),
            timeout: REQUEST_TIMEOUT,
        })
    }

    /// Replaces the per-request timeout, which defaults to [`REQUEST_TIMEOUT`].
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn build_request<'a>(&self, text: &'a str) -> GenerationRequest<'a> {
        GenerationRequest {
            inputs: text,
            parameters: GENERATION_PARAMETERS,
        }
    }

    /// Summarizes `text` with one POST to the endpoint.
    ///
    /// # Errors
    ///
    /// - `ConfigError` when no API token is configured; no request is sent.
    /// - `HttpError` on transport failure or timeout.
    /// - `InferenceError` on a non-2xx status or a response without generated text.
    pub async fn summarize(&self, text: &str) -> Result<String, SummarizerError> {
        let Some(token) = self.api_token.as_deref() else {
            error!("Missing HF_API_TOKEN environment variable");
            return Err(SummarizerError::ConfigError(
                "HF_API_TOKEN is not set".to_string(),
            ));
        };

        #[cfg(feature = "debug-logs")]
        info!("Inference input:\n{}", text);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            endpoint = %self.endpoint,
            input_chars = text.chars().count(),
            "Submitting text for summarization"
        );

        let start = Instant::now();
        let response = self
            .http
            .post(self.endpoint.clone())
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(CONTENT_TYPE, "application/json")
            .timeout(self.timeout)
            .json(&self.build_request(text))
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Error calling Hugging Face Inference API");
                SummarizerError::HttpError(format!("Inference API request failed: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = api_error_message(&body);
            error!(status = status.as_u16(), error = %message, "Inference API returned an error status");
            return Err(SummarizerError::InferenceError(format!(
                "HTTP {}: {}",
                status.as_u16(),
                message
            )));
        }

        let body = response.text().await.map_err(|e| {
            SummarizerError::HttpError(format!("Failed to read inference response: {e}"))
        })?;

        let summary = extract_generated_text(&body)?;
        info!(
            status = status.as_u16(),
            summary_chars = summary.chars().count(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Hugging Face summarization successful"
        );
        Ok(summary)
    }
}

/// Pulls the first `generated_text` out of an Inference API response body.
///
/// # Errors
///
/// Returns `InferenceError` if the body is not a JSON array, the array is
/// empty, or the first element has no non-empty `generated_text`.
pub fn extract_generated_text(body: &str) -> Result<String, SummarizerError> {
    let items: Vec<GeneratedText> = serde_json::from_str(body).map_err(|e| {
        SummarizerError::InferenceError(format!("Failed to parse inference response: {e}"))
    })?;

    let first = items.into_iter().next().ok_or_else(|| {
        SummarizerError::InferenceError("Inference response was an empty array".to_string())
    })?;

    match first.generated_text {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(SummarizerError::InferenceError(
            "No generated_text in inference response".to_string(),
        )),
    }
}

// The Inference API reports failures as {"error": "..."}; fall back to the raw body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}
