use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// A question the user got wrong. Clients usually send the whole question object; only these fields are read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct MissedQuestion {
    #[serde(default)]
    pub id: Option<i32>,
    pub topic: String,
    #[serde(default)]
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub wrong_questions: Vec<MissedQuestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub total_questions: usize,
    pub topic_breakdown: BTreeMap<String, usize>,
    pub recommended_topics: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_breakdown: Option<BTreeMap<String, usize>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_analyze_request_requires_list() {
        let request: AnalyzeRequest =
            serde_json::from_value(json!({"wrongQuestions": [{"id": 1, "topic": "Algebra", "question": "2 + 2?"}]}))
                .unwrap();
        assert_eq!(request.wrong_questions.len(), 1);
        assert_eq!(request.wrong_questions[0].id, Some(1));

        assert!(serde_json::from_value::<AnalyzeRequest>(json!({})).is_err());
        assert!(serde_json::from_value::<AnalyzeRequest>(json!({"wrongQuestions": "x"})).is_err());
    }
}
