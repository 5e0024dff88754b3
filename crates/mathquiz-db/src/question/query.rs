use mathquiz_entity::question::{self, Difficulty, Entity as Question, Model as QuestionModel};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, Order, QueryFilter, QueryOrder, QuerySelect,
};
use std::error::Error;

#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct TopicCount {
    pub topic: String,
    pub question_count: i64,
}

pub struct Query;

impl Query {
    pub async fn get_question_by_id(db: &DatabaseConnection, question_id: i32) -> Result<Option<QuestionModel>, DbErr> {
        Question::find_by_id(question_id).one(db).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, question_id, "failed to load question by id");
        })
    }

    pub async fn get_questions_by_ids(db: &DatabaseConnection, ids: &[i32]) -> Result<Vec<QuestionModel>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = Question::find().filter(question::Column::Id.is_in(ids.iter().copied()));
        query.all(db).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to load questions by ids");
        })
    }

    /// Loads at most `limit` questions of a topic in random order.
    pub async fn get_random_questions(
        db: &DatabaseConnection,
        topic: &str,
        difficulty: Option<Difficulty>,
        limit: u64,
    ) -> Result<Vec<QuestionModel>, DbErr> {
        let mut query = Question::find().filter(question::Column::Topic.eq(topic));
        if let Some(difficulty) = difficulty {
            query = query.filter(question::Column::Difficulty.eq(difficulty));
        }

        let result = query
            .order_by(Expr::cust("RANDOM()"), Order::Asc)
            .limit(limit)
            .all(db)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, topic, "failed to load random questions");
            })?;

        Ok(result)
    }

    pub async fn get_questions_by_topic(db: &DatabaseConnection, topic: &str) -> Result<Vec<QuestionModel>, DbErr> {
        let query = Question::find()
            .filter(question::Column::Topic.eq(topic))
            .order_by_desc(question::Column::CreatedAt)
            .order_by_desc(question::Column::Id);

        query.all(db).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, topic, "failed to load questions by topic");
        })
    }

    pub async fn get_topics(db: &DatabaseConnection) -> Result<Vec<String>, DbErr> {
        let query = Question::find()
            .select_only()
            .column(question::Column::Topic)
            .distinct()
            .order_by_asc(question::Column::Topic);

        query.into_tuple::<String>().all(db).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to load topics");
        })
    }

    pub async fn get_topic_counts(db: &DatabaseConnection) -> Result<Vec<TopicCount>, DbErr> {
        let query = Question::find()
            .select_only()
            .column(question::Column::Topic)
            .column_as(Expr::col((Question, question::Column::Id)).count(), "question_count")
            .group_by(question::Column::Topic)
            .order_by_asc(question::Column::Topic);

        query.into_model::<TopicCount>().all(db).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to count questions per topic");
        })
    }

    /// Distinct `(topic, difficulty)` pairs, ordered by topic.
    pub async fn get_topic_difficulties(db: &DatabaseConnection) -> Result<Vec<(String, Difficulty)>, DbErr> {
        let query = Question::find()
            .select_only()
            .column(question::Column::Topic)
            .column(question::Column::Difficulty)
            .distinct()
            .order_by_asc(question::Column::Topic)
            .order_by_asc(question::Column::Difficulty);

        query
            .into_tuple::<(String, Difficulty)>()
            .all(db)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load topic difficulties");
            })
    }
}
