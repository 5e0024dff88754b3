use crate::difficulty::Difficulty;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct TopicStats {
    pub topic: String,
    pub question_count: i64,
    pub difficulties: Vec<Difficulty>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct PerformanceStats {
    pub topic: String,
    pub pattern: Option<String>,
    pub total_attempts: i64,
    pub correct_answers: i64,
}
