use reqwest::StatusCode;
use thiserror::Error;

/// Failures talking to the Gemini API. Display output is for operator logs
/// only and must not be returned to callers.
#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("Gemini request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Gemini API error {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Gemini response body could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Invalid AI response: no text in first candidate")]
    InvalidResponse,

    #[error("AI response text is not valid JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
}
