use crate::generator::GeneratorError;
use crate::ocr::error::OcrError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("A topic is required")]
    MissingTopic,

    #[error("Question text or an image containing it is required")]
    MissingQuestionText,

    #[error("Either userAnswer or isCorrect is required")]
    MissingAnswer,

    #[error("Number of questions must be between 1 and {max}, got {requested}")]
    InvalidQuestionCount { requested: u32, max: u32 },

    #[error("Question {0} not found")]
    QuestionNotFound(i32),

    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Question generation failed: {0}")]
    Generator(#[from] GeneratorError),

    #[error("Text recognition failed: {0}")]
    Ocr(#[from] OcrError),
}
