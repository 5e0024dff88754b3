use mathquiz_entity::question::Difficulty as DifficultyModel;
use mathquiz_model::difficulty::Difficulty;

use crate::convert::{FromDbModel, FromModel};

impl FromDbModel<DifficultyModel> for Difficulty {
    fn from_db_model(model: DifficultyModel) -> Self {
        match model {
            DifficultyModel::Easy => Difficulty::Easy,
            DifficultyModel::Medium => Difficulty::Medium,
            DifficultyModel::Hard => Difficulty::Hard,
        }
    }
}

impl FromModel<Difficulty> for DifficultyModel {
    fn from_model(model: Difficulty) -> Self {
        match model {
            Difficulty::Easy => DifficultyModel::Easy,
            Difficulty::Medium => DifficultyModel::Medium,
            Difficulty::Hard => DifficultyModel::Hard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{IntoDbModel, IntoModel};

    #[test]
    fn test_difficulty_both_ways() {
        let model: DifficultyModel = Difficulty::Hard.into_db_model();
        assert_eq!(model, DifficultyModel::Hard);
        let back: Difficulty = DifficultyModel::Easy.into_model();
        assert_eq!(back, Difficulty::Easy);
    }
}
