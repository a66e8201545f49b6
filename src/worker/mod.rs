//! Worker Lambda handler and summarization steps

pub mod handler;
pub mod parsing;
pub mod summarize;

// Re-export the main handler for convenience
pub use handler::{Dependencies, handler, process_event};

/// Body returned when the trigger event cannot be parsed.
pub const INVALID_EVENT_MESSAGE: &str = "Invalid event format.";

/// Body returned when no summary could be produced. Details go to the logs only.
pub const SUMMARIZATION_FAILURE_MESSAGE: &str =
    "Error creating summarization via Hugging Face API.";
