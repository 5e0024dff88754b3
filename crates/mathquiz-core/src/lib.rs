pub mod error;
pub mod gemini;
pub mod generator;
pub mod ocr;
pub mod quiz;
pub mod stats;
pub mod upload;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
