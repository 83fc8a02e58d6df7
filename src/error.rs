/// Error types for the popup
use thiserror::Error;

pub const EMPTY_URL_MESSAGE: &str = "Please enter a URL.";
pub const SERVICE_FALLBACK_MESSAGE: &str = "Error processing the video.";
pub const CONNECTION_MESSAGE: &str = "Could not connect to the server.";

/// Failures while mounting the popup. Logged only, never shown to the user.
#[derive(Debug, Error, PartialEq)]
pub enum InitError {
    #[error("no browser document available")]
    NoDocument,

    #[error("required element #{0} not found")]
    MissingElement(&'static str),
}

/// Outcome of a failed submit
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProcessError {
    #[error("video URL is empty")]
    EmptyUrl,

    /// Non-2xx status with a JSON error body
    #[error("service rejected the request: {}", .message.as_deref().unwrap_or("no message"))]
    Service { message: Option<String> },

    /// Unreachable host, non-JSON body, missing fields
    #[error("transport failure: {0}")]
    Transport(String),
}

impl ProcessError {
    /// Text rendered in the result area
    pub fn user_message(&self) -> String {
        match self {
            ProcessError::EmptyUrl => EMPTY_URL_MESSAGE.to_string(),
            ProcessError::Service { message } => message
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .unwrap_or(SERVICE_FALLBACK_MESSAGE)
                .to_string(),
            ProcessError::Transport(_) => CONNECTION_MESSAGE.to_string(),
        }
    }
}
