use crate::difficulty::{self, Difficulty};
use crate::question::QuizQuestion;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Where the questions of a quiz come from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    /// Stored questions only
    #[serde(alias = "db")]
    Database,
    /// Freshly generated questions only
    #[serde(alias = "gemini")]
    Generator,
    /// Stored questions, topped up by the generator
    #[default]
    Auto,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuizRequest {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub num_questions: Option<u32>,
    #[serde(default, deserialize_with = "difficulty::deserialize_optional")]
    pub difficulty: Option<Difficulty>,
    #[serde(default, alias = "source")]
    pub mode: Option<SourceMode>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerRequest {
    pub question_id: i32,
    #[serde(default)]
    pub user_answer: Option<String>,
    #[serde(default)]
    pub is_correct: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerResponse {
    pub is_correct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similar_question: Option<QuizQuestion>,
}
