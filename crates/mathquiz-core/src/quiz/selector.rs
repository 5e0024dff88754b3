use crate::error::QuizError;
use crate::generator::{GeneratedQuestion, QuestionGenerator};
use mathquiz_db::question::NewQuestion;
use mathquiz_model::difficulty::Difficulty;
use mathquiz_model::question::Question;
use mathquiz_model::quiz::{GenerateQuizRequest, SourceMode};
use mathquiz_model_tools::convert::{IntoDbModel, IntoModel};
use sea_orm::DatabaseConnection;
use tracing::instrument;

pub const DEFAULT_QUESTION_COUNT: u32 = 5;
pub const DEFAULT_MAX_QUESTIONS: u32 = 20;

/// A validated quiz request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    pub topic: String,
    pub count: u32,
    pub difficulty: Option<Difficulty>,
    pub mode: SourceMode,
}

impl QuizRequest {
    pub fn from_request(request: GenerateQuizRequest, max_questions: u32) -> Result<Self, QuizError> {
        let topic = request
            .topic
            .map(|topic| topic.trim().to_owned())
            .filter(|topic| !topic.is_empty())
            .ok_or(QuizError::MissingTopic)?;

        let count = request.num_questions.unwrap_or(DEFAULT_QUESTION_COUNT);
        if count == 0 || count > max_questions {
            return Err(QuizError::InvalidQuestionCount {
                requested: count,
                max: max_questions,
            });
        }

        Ok(Self {
            topic,
            count,
            difficulty: request.difficulty,
            mode: request.mode.unwrap_or_default(),
        })
    }
}

/// Collects the questions of a new quiz from the store and, depending on the mode, the generator.
///
/// Generated questions are stored before they are returned.
#[instrument(skip(db, generator))]
pub async fn select_questions(
    db: &DatabaseConnection,
    generator: &dyn QuestionGenerator,
    request: &QuizRequest,
) -> Result<Vec<Question>, QuizError> {
    let mut questions = match request.mode {
        SourceMode::Generator => Vec::new(),
        SourceMode::Database | SourceMode::Auto => {
            mathquiz_db::question::Query::get_random_questions(
                db,
                &request.topic,
                request.difficulty.map(IntoDbModel::into_db_model),
                u64::from(request.count),
            )
            .await?
            .into_iter()
            .map(IntoModel::into_model)
            .collect::<Vec<Question>>()
        }
    };

    let missing = (request.count as usize).saturating_sub(questions.len());
    if request.mode == SourceMode::Database || missing == 0 {
        return Ok(questions);
    }

    tracing::debug!(stored = questions.len(), missing, "requesting generated questions");
    let generated = generate_and_store(db, generator, &request.topic, missing, request.difficulty).await?;
    questions.extend(generated);
    Ok(questions)
}

async fn generate_and_store(
    db: &DatabaseConnection,
    generator: &dyn QuestionGenerator,
    topic: &str,
    count: usize,
    difficulty: Option<Difficulty>,
) -> Result<Vec<Question>, QuizError> {
    let difficulty = difficulty.unwrap_or_default();
    let mut generated = generator.generate_questions(topic, count, difficulty).await?;
    if generated.len() > count {
        tracing::debug!(received = generated.len(), count, "dropping surplus generated questions");
        generated.truncate(count);
    }

    let batch = generated
        .into_iter()
        .map(|question| new_question(question, topic, difficulty))
        .collect();

    let stored = mathquiz_db::question::Mutation::create_questions(db, batch).await?;
    Ok(stored.into_iter().map(IntoModel::into_model).collect())
}

pub(crate) fn new_question(generated: GeneratedQuestion, topic: &str, difficulty: Difficulty) -> NewQuestion {
    NewQuestion {
        topic: topic.to_owned(),
        question: generated.question,
        correct_answer: Some(generated.correct_answer),
        wrong_options: generated.wrong_options,
        difficulty: difficulty.into_db_model(),
        pattern: generated.pattern,
    }
}
