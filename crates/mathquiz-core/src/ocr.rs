use crate::ocr::error::OcrError;
use async_trait::async_trait;
use std::error::Error;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::instrument;

pub mod error;

#[async_trait]
pub trait TextRecognizer: Send + Sync {
    /// Extracts the text of an image. `extension` is the file extension matching the image format.
    async fn recognize(&self, image: &[u8], extension: &str) -> Result<String, OcrError>;
}

/// Runs the `tesseract` command line tool on a temporary copy of the image.
#[derive(Debug, Clone)]
pub struct TesseractCli {
    binary: PathBuf,
    language: String,
}

impl TesseractCli {
    #[must_use]
    pub fn new(binary: impl Into<PathBuf>, language: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            language: language.into(),
        }
    }
}

#[async_trait]
impl TextRecognizer for TesseractCli {
    #[instrument(skip(self, image), fields(bytes = image.len()))]
    async fn recognize(&self, image: &[u8], extension: &str) -> Result<String, OcrError> {
        let file = tempfile::Builder::new()
            .prefix("mathquiz-upload-")
            .suffix(&format!(".{extension}"))
            .tempfile()?;
        tokio::fs::write(file.path(), image).await?;

        let output = Command::new(&self.binary)
            .arg(file.path())
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .kill_on_drop(true)
            .output()
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, binary = ?self.binary, "could not start tesseract");
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();
            tracing::error!(status = %output.status, %stderr, "tesseract failed");
            return Err(OcrError::Failed {
                status: output.status.to_string(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test(tokio::test)]
    async fn test_missing_binary() {
        let recognizer = TesseractCli::new("/nonexistent/tesseract-binary", "eng");
        let result = recognizer.recognize(b"not an image", "png").await;
        assert!(matches!(result, Err(OcrError::Io(_))));
    }
}
