use crate::error::QuizError;
use mathquiz_model::analysis::{Analysis, MissedQuestion};
use sea_orm::DatabaseConnection;
use std::collections::{BTreeMap, HashSet};
use tracing::instrument;

/// Counts misses per topic and pattern and orders topics by how often they were missed.
///
/// Topics with equal counts keep the order in which they first appear.
#[must_use]
pub fn summarize(missed: &[MissedQuestion]) -> Analysis {
    let mut first_seen: Vec<&str> = Vec::new();
    let mut topic_breakdown: BTreeMap<String, usize> = BTreeMap::new();
    let mut pattern_breakdown: BTreeMap<String, usize> = BTreeMap::new();

    for question in missed {
        let count = topic_breakdown.entry(question.topic.clone()).or_default();
        if *count == 0 {
            first_seen.push(&question.topic);
        }
        *count += 1;

        if let Some(pattern) = question.pattern.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
            *pattern_breakdown.entry(pattern.to_owned()).or_default() += 1;
        }
    }

    let mut recommended_topics: Vec<String> = first_seen.into_iter().map(ToOwned::to_owned).collect();
    // sort_by_key is stable
    recommended_topics.sort_by_key(|topic| std::cmp::Reverse(topic_breakdown.get(topic).copied().unwrap_or_default()));

    Analysis {
        total_questions: missed.len(),
        topic_breakdown,
        recommended_topics,
        pattern_breakdown: (!pattern_breakdown.is_empty()).then_some(pattern_breakdown),
    }
}

/// Records a failed attempt for every missed question that exists and summarizes the misses.
#[instrument(skip_all, fields(missed = missed.len()))]
pub async fn analyze(db: &DatabaseConnection, missed: &[MissedQuestion]) -> Result<Analysis, QuizError> {
    let ids: Vec<i32> = missed.iter().filter_map(|question| question.id).collect();
    let known: HashSet<i32> = mathquiz_db::question::Query::get_questions_by_ids(db, &ids)
        .await?
        .into_iter()
        .map(|question| question.id)
        .collect();

    for id in ids {
        if known.contains(&id) {
            mathquiz_db::progress::Mutation::record_attempt(db, id, false, None).await?;
        } else {
            tracing::warn!(question_id = id, "skipping attempt for unknown question");
        }
    }

    Ok(summarize(missed))
}
