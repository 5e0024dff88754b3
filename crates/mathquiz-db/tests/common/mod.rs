use mathquiz_db::question::{Mutation, NewQuestion};
use mathquiz_entity::question::{Difficulty, Model as QuestionModel};
use sea_orm::{Database, DbConn};

pub async fn setup_db() -> DbConn {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    mathquiz_test_helpers::setup_schema(&db).await.unwrap();
    db
}

pub fn new_question(topic: &str, question: &str, difficulty: Difficulty) -> NewQuestion {
    NewQuestion {
        topic: topic.to_owned(),
        question: question.to_owned(),
        correct_answer: Some("4".to_owned()),
        wrong_options: vec!["3".to_owned(), "5".to_owned(), "6".to_owned()],
        difficulty,
        pattern: Some("addition".to_owned()),
    }
}

pub async fn create_test_question(db: &DbConn, topic: &str, question: &str) -> QuestionModel {
    Mutation::create_question(db, new_question(topic, question, Difficulty::Medium))
        .await
        .unwrap()
}
