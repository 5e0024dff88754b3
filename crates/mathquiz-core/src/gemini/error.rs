use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("request to Gemini failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini answered with status {status}")]
    Status { status: u16, body: String },

    #[error("No text in Gemini response")]
    EmptyResponse,

    #[error("invalid Gemini endpoint: {0}")]
    Url(#[from] url::ParseError),
}
