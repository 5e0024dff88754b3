use crate::error::QuizError;
use crate::generator::QuestionGenerator;
use crate::ocr::TextRecognizer;
use mathquiz_db::question::NewQuestion;
use mathquiz_entity::question::Difficulty;
use mathquiz_model::question::Question;
use mathquiz_model_tools::convert::IntoModel;
use sea_orm::DatabaseConnection;
use tracing::instrument;

pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// File extension for the accepted image content types.
#[must_use]
pub fn image_extension(content_type: &str) -> Option<&'static str> {
    match content_type.trim().to_ascii_lowercase().as_str() {
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/gif" => Some("gif"),
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct UploadInput {
    pub topic: Option<String>,
    pub question: Option<String>,
    pub image: Option<UploadedImage>,
}

/// Stores a user supplied question. With an image, only the text read from it is used.
#[instrument(skip_all)]
pub async fn upload_question(
    db: &DatabaseConnection,
    generator: &dyn QuestionGenerator,
    recognizer: &dyn TextRecognizer,
    input: UploadInput,
) -> Result<Question, QuizError> {
    let topic = non_blank(input.topic).ok_or(QuizError::MissingTopic)?;
    let mut question = non_blank(input.question);

    if let Some(image) = input.image {
        let extension = image_extension(&image.content_type).ok_or_else(|| {
            QuizError::InvalidUpload("only jpeg, png and gif images are accepted".to_owned())
        })?;
        if image.bytes.len() > MAX_IMAGE_BYTES {
            return Err(QuizError::InvalidUpload("image exceeds 5 MB".to_owned()));
        }
        question = non_blank(Some(recognizer.recognize(&image.bytes, extension).await?));
        if question.is_none() {
            tracing::warn!("no text recognized in uploaded image");
        }
    }

    let question = question.ok_or(QuizError::MissingQuestionText)?;
    let completion = generator.complete_question(&question, &topic).await?;

    let stored = mathquiz_db::question::Mutation::create_question(
        db,
        NewQuestion {
            topic,
            question,
            correct_answer: Some(completion.correct_answer),
            wrong_options: completion.wrong_options,
            difficulty: Difficulty::Medium,
            pattern: completion.pattern,
        },
    )
    .await?;
    tracing::info!(question_id = stored.id, "stored uploaded question");
    Ok(stored.into_model())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
