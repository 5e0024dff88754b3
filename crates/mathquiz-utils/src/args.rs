pub mod gemini;
pub mod ocr;
