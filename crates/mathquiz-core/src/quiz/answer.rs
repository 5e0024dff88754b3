use crate::error::QuizError;
use crate::generator::QuestionGenerator;
use crate::quiz::options::to_quiz_question;
use crate::quiz::selector::new_question;
use mathquiz_model::difficulty::Difficulty;
use mathquiz_model::question::Question;
use mathquiz_model::quiz::{SubmitAnswerRequest, SubmitAnswerResponse};
use mathquiz_model_tools::convert::IntoModel;
use sea_orm::DatabaseConnection;
use tracing::instrument;

/// Case-insensitive comparison ignoring surrounding whitespace.
#[must_use]
pub fn answers_match(user_answer: &str, correct_answer: &str) -> bool {
    user_answer.trim().to_lowercase() == correct_answer.trim().to_lowercase()
}

/// Logs an attempt and, for a wrong answer, stores and returns one similar practice question.
#[instrument(skip(db, generator, request), fields(question_id = request.question_id))]
pub async fn submit_answer(
    db: &DatabaseConnection,
    generator: &dyn QuestionGenerator,
    request: SubmitAnswerRequest,
) -> Result<SubmitAnswerResponse, QuizError> {
    if request.is_correct.is_none() && request.user_answer.is_none() {
        return Err(QuizError::MissingAnswer);
    }

    let original: Question = mathquiz_db::question::Query::get_question_by_id(db, request.question_id)
        .await?
        .ok_or(QuizError::QuestionNotFound(request.question_id))?
        .into_model();

    let is_correct = request.is_correct.unwrap_or_else(|| {
        match (request.user_answer.as_deref(), original.correct_answer.as_deref()) {
            (Some(user_answer), Some(correct_answer)) => answers_match(user_answer, correct_answer),
            _ => false,
        }
    });

    mathquiz_db::progress::Mutation::record_attempt(db, original.id, is_correct, request.user_answer.as_deref())
        .await?;

    if is_correct {
        return Ok(SubmitAnswerResponse {
            is_correct,
            similar_question: None,
        });
    }

    let similar = create_similar_question(db, generator, &original).await?;
    Ok(SubmitAnswerResponse {
        is_correct,
        similar_question: Some(to_quiz_question(similar, &mut rand::rng())),
    })
}

async fn create_similar_question(
    db: &DatabaseConnection,
    generator: &dyn QuestionGenerator,
    original: &Question,
) -> Result<Question, QuizError> {
    let difficulty: Difficulty = original.difficulty;
    let generated = generator
        .generate_similar(&original.question, &original.topic, difficulty)
        .await?;

    let stored =
        mathquiz_db::question::Mutation::create_question(db, new_question(generated, &original.topic, difficulty))
            .await?;
    tracing::debug!(original = original.id, similar = stored.id, "stored similar question");
    Ok(stored.into_model())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockGenerator;
    use mathquiz_db::question::{Mutation, NewQuestion};
    use mathquiz_entity::question::{Difficulty as DifficultyModel, Model as QuestionModel};
    use mathquiz_test_helpers::memory_db;
    use test_log::test;

    #[test]
    fn test_answers_match() {
        assert!(answers_match(" 42 ", "42"));
        assert!(answers_match("X = 3", "x = 3"));
        assert!(!answers_match("41", "42"));
    }

    async fn stored_question(db: &DatabaseConnection) -> QuestionModel {
        Mutation::create_question(
            db,
            NewQuestion {
                topic: "Algebra".to_owned(),
                question: "x + 1 = 3".to_owned(),
                correct_answer: Some("2".to_owned()),
                wrong_options: vec!["1".to_owned(), "3".to_owned(), "4".to_owned()],
                difficulty: DifficultyModel::Hard,
                pattern: Some("linear equations".to_owned()),
            },
        )
        .await
        .unwrap()
    }

    fn submit(question_id: i32, user_answer: Option<&str>, is_correct: Option<bool>) -> SubmitAnswerRequest {
        SubmitAnswerRequest {
            question_id,
            user_answer: user_answer.map(ToOwned::to_owned),
            is_correct,
        }
    }

    #[test(tokio::test)]
    async fn test_correct_answer_has_no_follow_up() {
        let db = memory_db().await.unwrap();
        let question = stored_question(&db).await;
        let generator = MockGenerator::new();

        let response = submit_answer(&db, &generator, submit(question.id, Some(" 2 "), None)).await.unwrap();
        assert!(response.is_correct);
        assert!(response.similar_question.is_none());
        assert_eq!(generator.calls(), 0);

        let attempts = mathquiz_db::progress::Query::get_attempts_for_question(&db, question.id).await.unwrap();
        assert_eq!(attempts.len(), 1);
        assert!(attempts[0].correct);
    }

    #[test(tokio::test)]
    async fn test_wrong_answer_creates_similar_question() {
        let db = memory_db().await.unwrap();
        let question = stored_question(&db).await;
        let generator = MockGenerator::new();

        let response = submit_answer(&db, &generator, submit(question.id, Some("3"), None)).await.unwrap();
        assert!(!response.is_correct);
        let similar = response.similar_question.unwrap();
        assert_ne!(similar.question.id, question.id);
        assert_eq!(similar.question.topic, "Algebra");
        assert_eq!(similar.question.difficulty, Difficulty::Hard);
        assert_eq!(similar.options.len(), 4);

        let stored = mathquiz_db::question::Query::get_question_by_id(&db, similar.question.id).await.unwrap();
        assert!(stored.is_some());
    }

    #[test(tokio::test)]
    async fn test_client_verdict_wins() {
        let db = memory_db().await.unwrap();
        let question = stored_question(&db).await;
        let generator = MockGenerator::new();

        let response = submit_answer(&db, &generator, submit(question.id, Some("2"), Some(false))).await.unwrap();
        assert!(!response.is_correct);
        assert!(response.similar_question.is_some());

        let response = submit_answer(&db, &generator, submit(question.id, None, Some(true))).await.unwrap();
        assert!(response.is_correct);
    }

    #[test(tokio::test)]
    async fn test_invalid_submissions() {
        let db = memory_db().await.unwrap();
        let question = stored_question(&db).await;
        let generator = MockGenerator::new();

        assert!(matches!(
            submit_answer(&db, &generator, submit(question.id, None, None)).await,
            Err(QuizError::MissingAnswer)
        ));
        assert!(matches!(
            submit_answer(&db, &generator, submit(9999, Some("2"), None)).await,
            Err(QuizError::QuestionNotFound(9999))
        ));
        let attempts = mathquiz_db::progress::Query::get_attempts_for_question(&db, question.id).await.unwrap();
        assert!(attempts.is_empty());
    }
}
