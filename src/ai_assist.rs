//! AI assist: builds a multi-file prompt and posts it to an external endpoint.
//!
//! Each trigger gets a fresh request id and a monotonically increasing token.
//! A newer trigger supersedes older ones; outcomes carrying a stale token are
//! reported as superseded so the UI can drop them. The HTTP response body is
//! never read.

use thiserror::Error;

mod client;
mod prompt;
mod request;

pub use self::client::{AiAssistClient, AiAssistOutcome, RequestToken};
pub use self::prompt::{build_prompt, generate_files_context, text_before_caret};
pub use self::request::AiAssistRequest;

#[derive(Debug, Error)]
pub enum AiAssistError {
    #[error("AI assist request timed out")]
    Timeout,
    #[error("AI assist request failed: {0}")]
    Network(String),
    #[error("AI assist endpoint returned {0}")]
    Status(u16),
    #[error("could not build AI assist request: {0}")]
    Build(String),
}

impl From<reqwest::Error> for AiAssistError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AiAssistError::Timeout
        } else if err.is_builder() {
            AiAssistError::Build(err.to_string())
        } else {
            AiAssistError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
#[path = "tests/ai_assist/prompt_tests.rs"]
mod prompt_tests;

#[cfg(test)]
#[path = "tests/ai_assist/request_tests.rs"]
mod request_tests;
