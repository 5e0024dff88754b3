use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString};
use utoipa::ToSchema;

/// Question difficulty.
///
/// Deserializes from its name (case-insensitive) or from the numeric levels 1, 2 and 3.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, ToSchema, Display, AsRefStr,
    EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            1 => Some(Self::Easy),
            2 => Some(Self::Medium),
            3 => Some(Self::Hard),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DifficultyRepr {
    Name(String),
    Level(i64),
}

impl DifficultyRepr {
    fn parse<E: serde::de::Error>(self) -> Result<Option<Difficulty>, E> {
        match self {
            Self::Name(name) if name.trim().is_empty() => Ok(None),
            Self::Name(name) => {
                let name = name.trim();
                if let Ok(level) = name.parse::<i64>() {
                    return Difficulty::from_level(level)
                        .map(Some)
                        .ok_or_else(|| E::custom(format!("unknown difficulty level {level}")));
                }
                Difficulty::from_str(name)
                    .map(Some)
                    .map_err(|_| E::custom(format!("unknown difficulty {name:?}")))
            }
            Self::Level(level) => Difficulty::from_level(level)
                .map(Some)
                .ok_or_else(|| E::custom(format!("unknown difficulty level {level}"))),
        }
    }
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        DifficultyRepr::deserialize(deserializer)?
            .parse()?
            .ok_or_else(|| serde::de::Error::custom("difficulty must not be empty"))
    }
}

/// Optional difficulty where `null` and the empty string both mean "not given".
pub fn deserialize_optional<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Difficulty>, D::Error> {
    match Option::<DifficultyRepr>::deserialize(deserializer)? {
        Some(repr) => repr.parse(),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(default, deserialize_with = "deserialize_optional")]
        difficulty: Option<Difficulty>,
    }

    #[test]
    fn test_names_and_levels() {
        let parse = |value| serde_json::from_value::<Difficulty>(value);
        assert_eq!(parse(json!("easy")).unwrap(), Difficulty::Easy);
        assert_eq!(parse(json!("Hard")).unwrap(), Difficulty::Hard);
        assert_eq!(parse(json!(1)).unwrap(), Difficulty::Easy);
        assert_eq!(parse(json!(2)).unwrap(), Difficulty::Medium);
        assert_eq!(parse(json!("3")).unwrap(), Difficulty::Hard);
        assert!(parse(json!(4)).is_err());
        assert!(parse(json!("extreme")).is_err());
        assert!(parse(json!("")).is_err());
    }

    #[test]
    fn test_optional() {
        let parse = |value| serde_json::from_value::<Wrapper>(value).map(|w| w.difficulty);
        assert_eq!(parse(json!({})).unwrap(), None);
        assert_eq!(parse(json!({"difficulty": null})).unwrap(), None);
        assert_eq!(parse(json!({"difficulty": ""})).unwrap(), None);
        assert_eq!(parse(json!({"difficulty": "medium"})).unwrap(), Some(Difficulty::Medium));
        assert!(parse(json!({"difficulty": 0})).is_err());
    }

    #[test]
    fn test_serialize_lowercase() {
        assert_eq!(serde_json::to_value(Difficulty::Hard).unwrap(), json!("hard"));
        assert_eq!(Difficulty::Easy.to_string(), "easy");
    }
}
