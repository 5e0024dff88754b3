use thiserror::Error;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("failed to run the OCR engine: {0}")]
    Io(#[from] std::io::Error),

    #[error("OCR engine exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },
}
