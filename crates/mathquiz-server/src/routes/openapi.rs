use super::{questions, quiz, stats};
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        stats::get_topics,
        stats::get_topic_stats,
        stats::get_performance_stats,
        quiz::generate_quiz,
        quiz::submit_answer,
        quiz::analyze,
        questions::get_questions,
        questions::upload,
    ),
    tags(
        (name = "quiz", description = "Quiz generation, answers and feedback"),
        (name = "questions", description = "Stored and uploaded questions"),
        (name = "stats", description = "Topic and performance statistics"),
    )
)]
pub(crate) struct ApiDoc;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
}
