//! Scripted collaborators for exercising the quiz flow without network or OCR.

use crate::generator::parse::{ParseError, parse_batch};
use crate::generator::{Completion, GeneratedQuestion, GeneratorError, QuestionGenerator};
use crate::ocr::TextRecognizer;
use crate::ocr::error::OcrError;
use async_trait::async_trait;
use mathquiz_model::difficulty::Difficulty;
use std::sync::atomic::{AtomicUsize, Ordering};

const MALFORMED_REPLY: &str = "Sorry, I cannot help with that.";

/// Produces predictable questions and counts how often it was asked.
#[derive(Debug, Default)]
pub struct MockGenerator {
    calls: AtomicUsize,
    /// Extra records returned beyond the requested count
    surplus: usize,
    malformed: bool,
}

impl MockGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails the way an unreadable model reply does.
    #[must_use]
    pub fn malformed() -> Self {
        Self {
            malformed: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_surplus(surplus: usize) -> Self {
        Self {
            surplus,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn begin(&self) -> Result<usize, GeneratorError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.malformed {
            let source = parse_batch(MALFORMED_REPLY)
                .err()
                .unwrap_or(ParseError::NoQuestions);
            return Err(GeneratorError::Parse {
                source,
                raw_text: MALFORMED_REPLY.to_owned(),
            });
        }
        Ok(call)
    }
}

fn mock_question(topic: &str, call: usize, index: usize) -> GeneratedQuestion {
    let answer = call * 100 + index + 2;
    GeneratedQuestion {
        question: format!("{topic} mock question {call}.{index}"),
        correct_answer: answer.to_string(),
        wrong_options: (1..=3).map(|offset| (answer + offset).to_string()).collect(),
        pattern: Some("mock pattern".to_owned()),
    }
}

#[async_trait]
impl QuestionGenerator for MockGenerator {
    async fn generate_questions(
        &self,
        topic: &str,
        count: usize,
        _difficulty: Difficulty,
    ) -> Result<Vec<GeneratedQuestion>, GeneratorError> {
        let call = self.begin()?;
        Ok((0..count + self.surplus)
            .map(|index| mock_question(topic, call, index))
            .collect())
    }

    async fn generate_similar(
        &self,
        original: &str,
        topic: &str,
        _difficulty: Difficulty,
    ) -> Result<GeneratedQuestion, GeneratorError> {
        let call = self.begin()?;
        let mut question = mock_question(topic, call, 0);
        question.question = format!("Similar to: {original}");
        Ok(question)
    }

    async fn complete_question(&self, _question: &str, _topic: &str) -> Result<Completion, GeneratorError> {
        self.begin()?;
        Ok(Completion {
            correct_answer: "42".to_owned(),
            wrong_options: vec!["41".to_owned(), "43".to_owned(), "44".to_owned()],
            pattern: Some("uploaded".to_owned()),
        })
    }
}

/// Returns the same text for every image.
#[derive(Debug, Clone, Default)]
pub struct FixedRecognizer {
    text: String,
}

impl FixedRecognizer {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl TextRecognizer for FixedRecognizer {
    async fn recognize(&self, _image: &[u8], _extension: &str) -> Result<String, OcrError> {
        Ok(self.text.clone())
    }
}
