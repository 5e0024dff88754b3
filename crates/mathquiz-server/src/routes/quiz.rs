use crate::AppConfig;
use crate::routes::error::{ApiError, ApiErrorType, ErrorData};
use crate::routes::json::ApiJson;
use axum::routing::post;
use axum::{Extension, Json, Router};
use mathquiz_core::quiz::options::to_quiz_questions;
use mathquiz_core::quiz::selector::{QuizRequest, select_questions};
use mathquiz_core::quiz::{answer, feedback};
use mathquiz_model::analysis::{AnalyzeRequest, Analysis};
use mathquiz_model::question::QuizQuestion;
use mathquiz_model::quiz::{GenerateQuizRequest, SubmitAnswerRequest, SubmitAnswerResponse};
use sea_orm::DatabaseConnection;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/generate-quiz", post(generate_quiz))
        .route("/submit-answer", post(submit_answer))
        .route("/analyze", post(analyze))
}

#[utoipa::path(
    post,
    path = "/generate-quiz",
    request_body = GenerateQuizRequest,
    responses(
        (status = OK, body = Vec<QuizQuestion>, description = "Questions with shuffled options"),
        (status = BAD_REQUEST, body = ErrorData<ApiErrorType>, description = "Malformed body, missing topic or invalid count"),
        (status = INTERNAL_SERVER_ERROR, body = ErrorData<ApiErrorType>, description = "Generation failed"),
    ),
    tag = "quiz"
)]
pub(crate) async fn generate_quiz(
    Extension(conn): Extension<DatabaseConnection>,
    Extension(config): Extension<AppConfig>,
    ApiJson(request): ApiJson<GenerateQuizRequest>,
) -> Result<Json<Vec<QuizQuestion>>, ApiError> {
    let request = QuizRequest::from_request(request, config.max_questions())?;
    let questions = select_questions(&conn, config.generator(), &request).await?;
    tracing::info!(topic = request.topic, mode = ?request.mode, served = questions.len(), "serving quiz");
    Ok(Json(to_quiz_questions(questions)))
}

#[utoipa::path(
    post,
    path = "/submit-answer",
    request_body = SubmitAnswerRequest,
    responses(
        (status = OK, body = SubmitAnswerResponse, description = "Verdict and, for a wrong answer, a similar question"),
        (status = BAD_REQUEST, body = ErrorData<ApiErrorType>, description = "Malformed body or neither answer nor verdict given"),
        (status = NOT_FOUND, body = ErrorData<ApiErrorType>, description = "Unknown question"),
    ),
    tag = "quiz"
)]
pub(crate) async fn submit_answer(
    Extension(conn): Extension<DatabaseConnection>,
    Extension(config): Extension<AppConfig>,
    ApiJson(request): ApiJson<SubmitAnswerRequest>,
) -> Result<Json<SubmitAnswerResponse>, ApiError> {
    let response = answer::submit_answer(&conn, config.generator(), request).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = OK, body = Analysis, description = "Missed topics and recommendations"),
        (status = BAD_REQUEST, body = ErrorData<ApiErrorType>, description = "Missing or malformed list of wrong questions"),
    ),
    tag = "quiz"
)]
pub(crate) async fn analyze(
    Extension(conn): Extension<DatabaseConnection>,
    ApiJson(request): ApiJson<AnalyzeRequest>,
) -> Result<Json<Analysis>, ApiError> {
    let analysis = feedback::analyze(&conn, &request.wrong_questions).await?;
    Ok(Json(analysis))
}
