use mathquiz_model::difficulty::Difficulty;

const RECORD_SHAPE: &str = r#"{"question": "...", "correct_answer": "...", "wrong_options": ["...", "...", "..."], "pattern": "..."}"#;

const FORMAT_RULES: &str = "Reply with JSON only, without explanations. \
`correct_answer` is the final answer only. \
`wrong_options` holds exactly three plausible but incorrect answers, all different from the correct answer. \
`pattern` names the type of problem in a few words (for example \"linear equations\").";

pub fn batch(topic: &str, count: usize, difficulty: Difficulty) -> String {
    format!(
        "Generate {count} {difficulty} math questions about the topic \"{topic}\".\n\
         Return a JSON array of {count} objects, each shaped like {RECORD_SHAPE}.\n\
         {FORMAT_RULES}"
    )
}

pub fn similar(original: &str, topic: &str, difficulty: Difficulty) -> String {
    format!(
        "A student answered this {difficulty} math question about \"{topic}\" incorrectly:\n\
         {original}\n\
         Write one new question that practices the same pattern with different values.\n\
         Return a single JSON object shaped like {RECORD_SHAPE}.\n\
         {FORMAT_RULES}"
    )
}

pub fn completion(question: &str, topic: &str) -> String {
    format!(
        "Solve this math question about \"{topic}\":\n\
         {question}\n\
         Return a single JSON object shaped like \
         {{\"correct_answer\": \"...\", \"wrong_options\": [\"...\", \"...\", \"...\"], \"pattern\": \"...\"}}.\n\
         {FORMAT_RULES}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_embed_parameters() {
        let prompt = batch("Fractions", 4, Difficulty::Hard);
        assert!(prompt.contains("Generate 4 hard math questions"));
        assert!(prompt.contains("\"Fractions\""));

        let prompt = similar("What is 3 * 4?", "Multiplication", Difficulty::Medium);
        assert!(prompt.contains("What is 3 * 4?"));
        assert!(prompt.contains("medium"));

        let prompt = completion("What is 9 - 2?", "Subtraction");
        assert!(prompt.contains("What is 9 - 2?"));
        assert!(prompt.contains("correct_answer"));
    }
}
