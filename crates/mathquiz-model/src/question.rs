use crate::difficulty::Difficulty;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct Question {
    pub id: i32,
    pub topic: String,
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    #[serde(default)]
    pub wrong_options: Vec<String>,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}

impl Question {
    /// Label used when grouping missed questions: the pattern if known, otherwise the topic.
    #[must_use]
    pub fn label(&self) -> &str {
        self.pattern.as_deref().filter(|p| !p.trim().is_empty()).unwrap_or(&self.topic)
    }
}

/// A question as served to a quiz client, with its answer options in presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct QuizQuestion {
    #[serde(flatten)]
    pub question: Question,
    pub options: Vec<String>,
}
