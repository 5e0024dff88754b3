use mathquiz_entity::user_progress;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, ConnectionTrait, DbErr, Set};
use std::error::Error;

pub struct Mutation;

impl Mutation {
    pub async fn record_attempt<C: ConnectionTrait>(
        db: &C,
        question_id: i32,
        correct: bool,
        user_answer: Option<&str>,
    ) -> Result<user_progress::Model, DbErr> {
        let model = user_progress::ActiveModel {
            id: NotSet,
            question_id: Set(question_id),
            correct: Set(correct),
            user_answer: Set(user_answer.map(ToOwned::to_owned)),
            attempt_date: Set(chrono::Utc::now().naive_utc()),
        };

        model.insert(db).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, question_id, "failed to record attempt");
        })
    }
}
