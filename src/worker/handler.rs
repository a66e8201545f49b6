#![allow(clippy::missing_errors_doc)]
use lambda_runtime::{Error, LambdaEvent};
use reqwest::Client as HttpClient;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

use super::{INVALID_EVENT_MESSAGE, SUMMARIZATION_FAILURE_MESSAGE, parsing, summarize};
use crate::core::config::AppConfig;
use crate::core::models::{HandlerResponse, ObjectRef};
use crate::errors::SummarizerError;
use crate::storage::{self, BlobStore};

/// Process-wide clients, built once in `main` and shared by every invocation.
#[derive(Clone)]
pub struct Dependencies {
    pub store: Arc<dyn BlobStore>,
    pub http: HttpClient,
}

impl Dependencies {
    pub fn new(store: Arc<dyn BlobStore>, http: HttpClient) -> Self {
        Self { store, http }
    }
}

/// Lambda handler for the worker entrypoint. Reads configuration from the
/// environment and runs one summarization.
///
/// Store and decode faults are returned as `Err` so the invocation fails.
#[tracing::instrument(level = "info", skip(event, deps), fields(request_id = %event.context.request_id))]
pub async fn function_handler(
    event: LambdaEvent<Value>,
    deps: &Dependencies,
) -> Result<HandlerResponse, Error> {
    let config = AppConfig::from_env();
    process_event(&config, deps.store.as_ref(), &deps.http, &event.payload)
        .await
        .map_err(|e| {
            error!("Summarization invocation failed: {}", e);
            Error::from(e)
        })
}

/// Parses the trigger, reads the source object, summarizes it and writes the summary.
///
/// Returns 400 for a malformed event (before any I/O) and 500 when no summary
/// could be produced (nothing is written). Store and decode faults are `Err`.
pub async fn process_event(
    config: &AppConfig,
    store: &dyn BlobStore,
    http: &HttpClient,
    payload: &Value,
) -> Result<HandlerResponse, SummarizerError> {
    info!("Received event: {}", payload);

    let source = match parsing::parse_trigger(payload) {
        Ok(source) => source,
        Err(e) => {
            error!("Rejecting trigger event: {}", e);
            return Ok(HandlerResponse::new(400, INVALID_EVENT_MESSAGE));
        }
    };

    let text = storage::read_text(store, &source.bucket, &source.key).await?;

    let summary = match summarize::summarize_text(config, http, &text).await {
        Err(e) if e.is_summarization_failure() => {
            error!("Failed to create or retrieve summarization: {}", e);
            return Ok(HandlerResponse::new(500, SUMMARIZATION_FAILURE_MESSAGE));
        }
        result => result?,
    };

    let output = ObjectRef::new(
        config.output_bucket_for(&source.bucket),
        parsing::summary_key(&config.output_prefix, &source.key),
    );
    storage::write_text(store, &output.bucket, &output.key, &summary).await?;

    info!(output = %output.s3_uri(), "Summary saved");
    Ok(HandlerResponse::new(
        200,
        format!("Summary saved to {}", output.s3_uri()),
    ))
}

pub use self::function_handler as handler;
