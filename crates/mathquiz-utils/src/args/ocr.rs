use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Clone, Args)]
pub struct OcrArgs {
    #[arg(long, env = "TESSERACT_BINARY", default_value = "tesseract")]
    pub tesseract_binary: PathBuf,
    #[arg(long, env = "OCR_LANGUAGE", default_value = "eng")]
    pub ocr_language: String,
}
