use mathquiz_db::util::decode_wrong_options;
use mathquiz_entity::question::Model as QuestionModel;
use mathquiz_model::question::Question;

use crate::convert::FromDbModel;

impl FromDbModel<QuestionModel> for Question {
    fn from_db_model(model: QuestionModel) -> Self {
        let wrong_options = decode_wrong_options(model.wrong_options.as_deref());

        Self {
            id: model.id,
            topic: model.topic,
            question: model.question,
            correct_answer: model.correct_answer,
            wrong_options,
            difficulty: FromDbModel::from_db_model(model.difficulty),
            pattern: model.pattern,
            created_at: model.created_at,
        }
    }
}
