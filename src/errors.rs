use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("Malformed trigger event: {0}")]
    MalformedEvent(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Inference API error: {0}")]
    InferenceError(String),

    #[error("Failed to access blob store: {0}")]
    StorageError(String),

    #[error("Failed to decode object content: {0}")]
    DecodeError(String),
}

impl SummarizerError {
    /// True for failures that the handler reports as a 500 response rather
    /// than propagating as an invocation error.
    #[must_use]
    pub fn is_summarization_failure(&self) -> bool {
        matches!(
            self,
            SummarizerError::ConfigError(_)
                | SummarizerError::HttpError(_)
                | SummarizerError::InferenceError(_)
        )
    }
}

impl From<reqwest::Error> for SummarizerError {
    fn from(error: reqwest::Error) -> Self {
        SummarizerError::HttpError(error.to_string())
    }
}

impl From<std::string::FromUtf8Error> for SummarizerError {
    fn from(error: std::string::FromUtf8Error) -> Self {
        SummarizerError::DecodeError(error.to_string())
    }
}

// Generic implementation for AWS SDK errors
impl<E, R> From<aws_sdk_s3::error::SdkError<E, R>> for SummarizerError
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    fn from(error: aws_sdk_s3::error::SdkError<E, R>) -> Self {
        SummarizerError::StorageError(aws_sdk_s3::error::DisplayErrorContext(error).to_string())
    }
}
