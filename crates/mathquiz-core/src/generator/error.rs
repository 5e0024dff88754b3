use crate::gemini::error::GeminiError;
use crate::generator::parse::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error(transparent)]
    Upstream(#[from] GeminiError),

    #[error("could not read generated questions: {source}")]
    Parse {
        #[source]
        source: ParseError,
        raw_text: String,
    },
}

impl GeneratorError {
    /// The unparsed reply, when the failure happened while reading it.
    #[must_use]
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            Self::Parse { raw_text, .. } => Some(raw_text),
            Self::Upstream(_) => None,
        }
    }
}
