use crate::util::{FlattenTransactionResultExt, encode_wrong_options};
use mathquiz_entity::question::{self, Difficulty};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ConnectionTrait, DatabaseConnection, DbErr, Set, TransactionTrait,
};
use std::error::Error;

/// Question content before it receives an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub topic: String,
    pub question: String,
    pub correct_answer: Option<String>,
    pub wrong_options: Vec<String>,
    pub difficulty: Difficulty,
    pub pattern: Option<String>,
}

pub struct Mutation;

impl Mutation {
    pub async fn create_question<C: ConnectionTrait>(db: &C, new: NewQuestion) -> Result<question::Model, DbErr> {
        let wrong_options = encode_wrong_options(&new.wrong_options)?;
        let model = question::ActiveModel {
            id: NotSet,
            topic: Set(new.topic),
            question: Set(new.question),
            correct_answer: Set(new.correct_answer),
            wrong_options: Set(Some(wrong_options)),
            difficulty: Set(new.difficulty),
            pattern: Set(new.pattern),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };

        model.insert(db).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to insert question");
        })
    }

    /// Stores a batch atomically: either every question is inserted or none.
    pub async fn create_questions(
        db: &DatabaseConnection,
        questions: Vec<NewQuestion>,
    ) -> Result<Vec<question::Model>, DbErr> {
        if questions.is_empty() {
            return Ok(Vec::new());
        }

        db.transaction::<_, Vec<question::Model>, DbErr>(|txn| {
            Box::pin(async move {
                let mut created = Vec::with_capacity(questions.len());
                for new in questions {
                    created.push(Self::create_question(txn, new).await?);
                }
                Ok(created)
            })
        })
        .await
        .flatten_res()
        .inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to store question batch");
        })
    }
}
