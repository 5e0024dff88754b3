use mathquiz_model::question::{Question, QuizQuestion};
use rand::Rng;
use rand::seq::SliceRandom;

/// The correct answer together with the distractors, in random order.
pub fn shuffled_options<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> Vec<String> {
    let mut options: Vec<String> = Vec::with_capacity(question.wrong_options.len() + 1);
    for option in question.correct_answer.iter().chain(&question.wrong_options) {
        if !options.contains(option) {
            options.push(option.clone());
        }
    }
    options.shuffle(rng);
    options
}

pub fn to_quiz_question<R: Rng + ?Sized>(question: Question, rng: &mut R) -> QuizQuestion {
    let options = shuffled_options(&question, rng);
    QuizQuestion { question, options }
}

pub fn to_quiz_questions(questions: Vec<Question>) -> Vec<QuizQuestion> {
    let mut rng = rand::rng();
    questions
        .into_iter()
        .map(|question| to_quiz_question(question, &mut rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathquiz_model::difficulty::Difficulty;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::BTreeSet;

    fn question(correct: Option<&str>, wrong: &[&str]) -> Question {
        Question {
            id: 1,
            topic: "Algebra".to_string(),
            question: "x?".to_string(),
            correct_answer: correct.map(ToOwned::to_owned),
            wrong_options: wrong.iter().map(|s| (*s).to_owned()).collect(),
            difficulty: Difficulty::Medium,
            pattern: None,
            created_at: chrono_epoch(),
        }
    }

    fn chrono_epoch() -> chrono::NaiveDateTime {
        chrono::DateTime::from_timestamp(0, 0).unwrap().naive_utc()
    }

    #[test]
    fn test_options_are_permutation() {
        let question = question(Some("4"), &["3", "5", "6"]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let options = shuffled_options(&question, &mut rng);
            assert_eq!(options.len(), 4);
            let set: BTreeSet<_> = options.iter().map(String::as_str).collect();
            assert_eq!(set, BTreeSet::from(["3", "4", "5", "6"]));
        }
    }

    #[test]
    fn test_options_without_distractors() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(shuffled_options(&question(Some("4"), &[]), &mut rng), vec!["4"]);
        assert!(shuffled_options(&question(None, &[]), &mut rng).is_empty());
    }

    #[test]
    fn test_order_varies() {
        let question = question(Some("a"), &["b", "c", "d"]);
        let mut rng = StdRng::seed_from_u64(42);
        let orders: BTreeSet<Vec<String>> = (0..50).map(|_| shuffled_options(&question, &mut rng)).collect();
        assert!(orders.len() > 1);
    }
}
