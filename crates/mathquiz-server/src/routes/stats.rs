use crate::routes::error::{ApiError, ApiErrorType, ErrorData};
use axum::routing::get;
use axum::{Extension, Json, Router};
use mathquiz_core::error::QuizError;
use mathquiz_core::stats;
use mathquiz_model::stats::{PerformanceStats, TopicStats};
use sea_orm::DatabaseConnection;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/topics", get(get_topics))
        .route("/topic-stats", get(get_topic_stats))
        .route("/performance-stats", get(get_performance_stats))
}

#[utoipa::path(
    get,
    path = "/topics",
    responses(
        (status = OK, body = Vec<String>, description = "Distinct topics in ascending order"),
        (status = INTERNAL_SERVER_ERROR, body = ErrorData<ApiErrorType>),
    ),
    tag = "stats"
)]
pub(crate) async fn get_topics(Extension(conn): Extension<DatabaseConnection>) -> Result<Json<Vec<String>>, ApiError> {
    let topics = stats::topics(&conn).await.map_err(QuizError::from)?;
    Ok(Json(topics))
}

#[utoipa::path(
    get,
    path = "/topic-stats",
    responses(
        (status = OK, body = Vec<TopicStats>, description = "Question count and difficulties per topic"),
    ),
    tag = "stats"
)]
pub(crate) async fn get_topic_stats(
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Json<Vec<TopicStats>>, ApiError> {
    let stats = stats::topic_stats(&conn).await.map_err(QuizError::from)?;
    Ok(Json(stats))
}

#[utoipa::path(
    get,
    path = "/performance-stats",
    responses(
        (status = OK, body = Vec<PerformanceStats>, description = "Attempts and correct answers per topic and pattern"),
    ),
    tag = "stats"
)]
pub(crate) async fn get_performance_stats(
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Json<Vec<PerformanceStats>>, ApiError> {
    let stats = stats::performance_stats(&conn).await.map_err(QuizError::from)?;
    Ok(Json(stats))
}
