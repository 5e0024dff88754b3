use mathquiz_model::difficulty::Difficulty;
use mathquiz_model::stats::{PerformanceStats, TopicStats};
use mathquiz_model_tools::convert::IntoModel;
use sea_orm::{DatabaseConnection, DbErr};
use std::collections::BTreeMap;

pub async fn topics(db: &DatabaseConnection) -> Result<Vec<String>, DbErr> {
    mathquiz_db::question::Query::get_topics(db).await
}

/// Question count and available difficulties per topic, ordered by topic.
pub async fn topic_stats(db: &DatabaseConnection) -> Result<Vec<TopicStats>, DbErr> {
    let counts = mathquiz_db::question::Query::get_topic_counts(db).await?;
    let mut difficulties: BTreeMap<String, Vec<Difficulty>> = BTreeMap::new();
    for (topic, difficulty) in mathquiz_db::question::Query::get_topic_difficulties(db).await? {
        difficulties.entry(topic).or_default().push(difficulty.into_model());
    }

    Ok(counts
        .into_iter()
        .map(|count| {
            let mut difficulties = difficulties.remove(&count.topic).unwrap_or_default();
            difficulties.sort();
            difficulties.dedup();
            TopicStats {
                topic: count.topic,
                question_count: count.question_count,
                difficulties,
            }
        })
        .collect())
}

pub async fn performance_stats(db: &DatabaseConnection) -> Result<Vec<PerformanceStats>, DbErr> {
    Ok(mathquiz_db::progress::Query::get_performance(db)
        .await?
        .into_iter()
        .map(IntoModel::into_model)
        .collect())
}
