use mathquiz_db::progress::PatternPerformance;
use mathquiz_model::stats::PerformanceStats;

use crate::convert::FromDbModel;

impl FromDbModel<PatternPerformance> for PerformanceStats {
    fn from_db_model(model: PatternPerformance) -> Self {
        Self {
            topic: model.topic,
            pattern: model.pattern,
            total_attempts: model.total_attempts,
            correct_answers: model.correct_answers,
        }
    }
}
