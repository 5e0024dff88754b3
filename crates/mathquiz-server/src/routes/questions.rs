use crate::AppConfig;
use crate::routes::error::{ApiError, ApiErrorType, ErrorData};
use axum::extract::{DefaultBodyLimit, Multipart, Path};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use mathquiz_core::error::QuizError;
use mathquiz_core::upload::{MAX_IMAGE_BYTES, UploadInput, UploadedImage, upload_question};
use mathquiz_model::question::Question;
use mathquiz_model::upload::{UploadForm, UploadResponse};
use mathquiz_model_tools::convert::IntoModel;
use sea_orm::DatabaseConnection;

/// Room for the form fields next to the largest accepted image.
const UPLOAD_BODY_LIMIT: usize = MAX_IMAGE_BYTES + 64 * 1024;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/questions/{topic}", get(get_questions))
        .route(
            "/upload",
            post(upload).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
}

#[utoipa::path(
    get,
    path = "/questions/{topic}",
    params(("topic" = String, Path, description = "Topic name")),
    responses(
        (status = OK, body = Vec<Question>, description = "Stored questions of the topic, newest first"),
    ),
    tag = "questions"
)]
pub(crate) async fn get_questions(
    Extension(conn): Extension<DatabaseConnection>,
    Path(topic): Path<String>,
) -> Result<Json<Vec<Question>>, ApiError> {
    let questions = mathquiz_db::question::Query::get_questions_by_topic(&conn, &topic)
        .await
        .map_err(QuizError::from)?;
    Ok(Json(questions.into_iter().map(IntoModel::into_model).collect()))
}

#[utoipa::path(
    post,
    path = "/upload",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = OK, body = UploadResponse, description = "The question was stored"),
        (status = BAD_REQUEST, body = ErrorData<ApiErrorType>, description = "Missing topic or question text"),
        (status = INTERNAL_SERVER_ERROR, body = ErrorData<ApiErrorType>, description = "OCR or generation failed"),
    ),
    tag = "questions"
)]
pub(crate) async fn upload(
    Extension(conn): Extension<DatabaseConnection>,
    Extension(config): Extension<AppConfig>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut input = UploadInput::default();
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(ToOwned::to_owned);
        match name.as_deref() {
            Some("topic") => input.topic = Some(field.text().await?),
            Some("question") => input.question = Some(field.text().await?),
            Some("image") => {
                let content_type = field.content_type().unwrap_or_default().to_owned();
                let bytes = field.bytes().await?;
                // Browsers send an empty part when no file was picked
                if !bytes.is_empty() {
                    input.image = Some(UploadedImage {
                        content_type,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            other => tracing::debug!(field = ?other, "ignoring upload field"),
        }
    }

    let question = upload_question(&conn, config.generator(), config.recognizer(), input).await?;
    Ok(Json(UploadResponse {
        id: question.id,
        message: "Question uploaded successfully".to_owned(),
    }))
}
