//! Trigger event parsing and output key derivation.

use percent_encoding::percent_decode_str;
use serde_json::Value;
use tracing::warn;

use crate::core::models::ObjectRef;
use crate::errors::SummarizerError;

/// Extracts the bucket and object key of the first record in an S3 notification.
///
/// The key is URL-decoded the way S3 encodes it in notifications.
///
/// # Errors
///
/// Returns `MalformedEvent` if `Records` is missing or empty, or if the first
/// record has no non-empty `s3.bucket.name` / `s3.object.key` strings.
pub fn parse_trigger(payload: &Value) -> Result<ObjectRef, SummarizerError> {
    let records = payload
        .get("Records")
        .and_then(|records| records.as_array())
        .ok_or_else(|| SummarizerError::MalformedEvent("missing Records".to_string()))?;

    let record = records
        .first()
        .ok_or_else(|| SummarizerError::MalformedEvent("empty Records".to_string()))?;

    if records.len() > 1 {
        warn!(
            ignored_records = records.len() - 1,
            "Event has more than one record; only the first is processed"
        );
    }

    let s3 = record
        .get("s3")
        .ok_or_else(|| SummarizerError::MalformedEvent("record has no s3 entry".to_string()))?;

    let bucket = s3
        .get("bucket")
        .and_then(|b| b.get("name"))
        .and_then(|n| n.as_str())
        .filter(|n| !n.is_empty())
        .ok_or_else(|| SummarizerError::MalformedEvent("missing s3.bucket.name".to_string()))?;

    let raw_key = s3
        .get("object")
        .and_then(|o| o.get("key"))
        .and_then(|k| k.as_str())
        .filter(|k| !k.is_empty())
        .ok_or_else(|| SummarizerError::MalformedEvent("missing s3.object.key".to_string()))?;

    let key = decode_object_key(raw_key)?;

    Ok(ObjectRef::new(bucket, key))
}

/// Decodes an object key as it appears in an S3 notification.
///
/// `+` stands for a space; a literal plus arrives as `%2B`, so the
/// substitution has to happen before percent-decoding.
///
/// ```
/// use summarizer::worker::parsing::decode_object_key;
///
/// assert_eq!(decode_object_key("my+notes%281%29.txt").unwrap(), "my notes(1).txt");
/// assert_eq!(decode_object_key("a%2Bb.txt").unwrap(), "a+b.txt");
/// ```
///
/// # Errors
///
/// Returns `MalformedEvent` if the decoded bytes are not UTF-8.
pub fn decode_object_key(raw: &str) -> Result<String, SummarizerError> {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|e| SummarizerError::MalformedEvent(format!("Failed to decode object key: {e}")))
}

/// Key under which the summary of `source_key` is stored.
#[must_use]
pub fn summary_key(output_prefix: &str, source_key: &str) -> String {
    format!("{output_prefix}/{source_key}_summary.txt")
}
