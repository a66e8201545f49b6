//! Blob store access used by the summarization handler.
//!
//! The handler only needs whole-object reads and writes, so [`BlobStore`]
//! exposes exactly those two operations. [`S3BlobStore`] is the production
//! backend; [`MemoryBlobStore`] keeps objects in process for tests and local
//! runs.

mod memory;
mod s3;

pub use memory::{MemoryBlobStore, StoredObject};
pub use s3::S3BlobStore;

use async_trait::async_trait;
use tracing::info;

use crate::errors::SummarizerError;

pub const TEXT_CONTENT_TYPE: &str = "text/plain";

#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, SummarizerError>;

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), SummarizerError>;
}

/// Reads an object and decodes it as UTF-8.
///
/// # Errors
///
/// Returns `StorageError` if the read fails and `DecodeError` if the content
/// is not valid UTF-8.
pub async fn read_text(
    store: &dyn BlobStore,
    bucket: &str,
    key: &str,
) -> Result<String, SummarizerError> {
    let bytes = store.get_object(bucket, key).await?;
    info!(bucket = %bucket, key = %key, bytes = bytes.len(), "Read source object");
    Ok(String::from_utf8(bytes)?)
}

/// Writes `text` as a `text/plain` object, overwriting any existing object.
///
/// # Errors
///
/// Returns `StorageError` if the write fails.
pub async fn write_text(
    store: &dyn BlobStore,
    bucket: &str,
    key: &str,
    text: &str,
) -> Result<(), SummarizerError> {
    store
        .put_object(bucket, key, text.as_bytes().to_vec(), TEXT_CONTENT_TYPE)
        .await?;
    info!(bucket = %bucket, key = %key, bytes = text.len(), "Wrote summary object");
    Ok(())
}
