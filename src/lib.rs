//! Transcript summarizer - summarizes text objects as they land in S3.
//!
//! A single Lambda function is triggered by S3 object-created notifications.
//! For the first record of each event it:
//! 1. Reads the object's text from S3
//! 2. Sends it to a Hugging Face text-generation endpoint
//! 3. Writes the generated summary to `{OUTPUT_PREFIX}/{key}_summary.txt`
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - aws-sdk-s3 for object storage, behind the [`storage::BlobStore`] trait
//! - reqwest for the Hugging Face Inference API
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use summarizer::core::config::AppConfig;
//! use summarizer::storage::MemoryBlobStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     summarizer::setup_logging();
//!
//!     let store = Arc::new(MemoryBlobStore::new());
//!     store.insert("transcripts", "call.txt", "Long transcription text");
//!
//!     let config = AppConfig::from_lookup(|name| match name {
//!         "HF_API_TOKEN" => Some("hf_dummy_token".to_string()),
//!         _ => None,
//!     });
//!
//!     let event = serde_json::json!({
//!         "Records": [{
//!             "s3": {
//!                 "bucket": { "name": "transcripts" },
//!                 "object": { "key": "call.txt" }
//!             }
//!         }]
//!     });
//!
//!     let response = summarizer::worker::process_event(
//!         &config,
//!         store.as_ref(),
//!         &reqwest::Client::new(),
//!         &event,
//!     )
//!     .await?;
//!     println!("{}: {}", response.status_code, response.body);
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod clients;
pub mod core;
pub mod errors;
pub mod storage;
pub mod worker;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once, before the Lambda
/// runtime starts.
///
/// # Example
///
/// ```
/// summarizer::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
