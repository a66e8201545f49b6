use reqwest::Client as HttpClient;

use crate::clients::InferenceClient;
use crate::core::config::AppConfig;
use crate::errors::SummarizerError;

/// Summarize `text` with the endpoint described by `config`.
///
/// The client is built per call because configuration is read per
/// invocation; `http` carries the shared connection pool.
pub async fn summarize_text(
    config: &AppConfig,
    http: &HttpClient,
    text: &str,
) -> Result<String, SummarizerError> {
    let client = InferenceClient::new(http.clone(), config)?;
    client.summarize(text).await
}
