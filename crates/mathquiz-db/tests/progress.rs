mod common;

use crate::common::{create_test_question, new_question, setup_db};

use mathquiz_db::progress::{Mutation, PatternPerformance, Query};
use mathquiz_entity::question::Difficulty;
use test_log::test;

#[test(tokio::test)]
async fn test_record_attempts() {
    let conn = &setup_db().await;
    let question = create_test_question(conn, "Algebra", "What is 2 + 2?").await;

    Mutation::record_attempt(conn, question.id, false, Some("5")).await.unwrap();
    Mutation::record_attempt(conn, question.id, true, Some("4")).await.unwrap();

    let attempts = Query::get_attempts_for_question(conn, question.id).await.unwrap();
    assert_eq!(attempts.len(), 2);
    assert!(!attempts[0].correct);
    assert_eq!(attempts[0].user_answer.as_deref(), Some("5"));
    assert!(attempts[1].correct);
}

#[test(tokio::test)]
async fn test_performance_by_topic_and_pattern() {
    let conn = &setup_db().await;
    let algebra = create_test_question(conn, "Algebra", "a").await;
    let mut geometry = new_question("Geometry", "g", Difficulty::Easy);
    geometry.pattern = None;
    let geometry = mathquiz_db::question::Mutation::create_question(conn, geometry)
        .await
        .unwrap();

    Mutation::record_attempt(conn, algebra.id, true, None).await.unwrap();
    Mutation::record_attempt(conn, algebra.id, false, None).await.unwrap();
    Mutation::record_attempt(conn, algebra.id, true, None).await.unwrap();
    Mutation::record_attempt(conn, geometry.id, false, None).await.unwrap();

    let stats = Query::get_performance(conn).await.unwrap();
    assert_eq!(
        stats,
        vec![
            PatternPerformance {
                topic: "Algebra".to_string(),
                pattern: Some("addition".to_string()),
                total_attempts: 3,
                correct_answers: 2,
            },
            PatternPerformance {
                topic: "Geometry".to_string(),
                pattern: None,
                total_attempts: 1,
                correct_answers: 0,
            },
        ]
    );
}

#[test(tokio::test)]
async fn test_performance_empty() {
    let conn = &setup_db().await;
    create_test_question(conn, "Algebra", "a").await;

    assert!(Query::get_performance(conn).await.unwrap().is_empty());
}
