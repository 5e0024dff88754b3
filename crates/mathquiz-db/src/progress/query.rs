use mathquiz_entity::question;
use mathquiz_entity::user_progress::{self, Entity as UserProgress, Model as UserProgressModel};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};
use std::error::Error;

#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct PatternPerformance {
    pub topic: String,
    pub pattern: Option<String>,
    pub total_attempts: i64,
    pub correct_answers: i64,
}

pub struct Query;

impl Query {
    pub async fn get_attempts_for_question(
        db: &DatabaseConnection,
        question_id: i32,
    ) -> Result<Vec<UserProgressModel>, DbErr> {
        let query = UserProgress::find()
            .filter(user_progress::Column::QuestionId.eq(question_id))
            .order_by_asc(user_progress::Column::Id);

        query.all(db).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, question_id, "failed to load attempts");
        })
    }

    /// Attempt totals grouped by the topic and pattern of the answered question.
    pub async fn get_performance(db: &DatabaseConnection) -> Result<Vec<PatternPerformance>, DbErr> {
        let query = UserProgress::find()
            .select_only()
            .column(question::Column::Topic)
            .column(question::Column::Pattern)
            .column_as(
                Expr::col((UserProgress, user_progress::Column::Id)).count(),
                "total_attempts",
            )
            .column_as(
                Expr::cust("SUM(CASE WHEN user_progress.correct THEN 1 ELSE 0 END)"),
                "correct_answers",
            )
            .join(JoinType::InnerJoin, user_progress::Relation::Question.def())
            .group_by(question::Column::Topic)
            .group_by(question::Column::Pattern)
            .order_by_asc(question::Column::Topic)
            .order_by_asc(question::Column::Pattern);

        query
            .into_model::<PatternPerformance>()
            .all(db)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load performance stats");
            })
    }
}
