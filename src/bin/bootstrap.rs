// This is the Lambda bootstrap entry point for the summarizer worker

use lambda_runtime::{Error, run, service_fn};
use std::sync::Arc;
use summarizer::storage::S3BlobStore;
use summarizer::worker::{Dependencies, handler};

#[tokio::main]
async fn main() -> Result<(), Error> {
    summarizer::setup_logging();

    // Clients are created once per execution environment and reused across invocations
    let store = S3BlobStore::from_env().await;
    let deps = Dependencies::new(Arc::new(store), reqwest::Client::new());
    let deps = &deps;

    run(service_fn(move |event| async move { handler(event, deps).await })).await
}
