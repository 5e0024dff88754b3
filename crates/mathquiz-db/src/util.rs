use sea_orm::{DbErr, TransactionError};

pub trait FlattenTransactionResultExt<T> {
    fn flatten_res(self) -> T;
}

impl<T, E> FlattenTransactionResultExt<Result<T, E>> for Result<T, TransactionError<E>>
where
    E: From<DbErr> + std::error::Error,
{
    fn flatten_res(self) -> Result<T, E> {
        self.map_err(|err| match err {
            TransactionError::Connection(err) => err.into(),
            TransactionError::Transaction(err) => err,
        })
    }
}

/// Decodes the JSON text column holding a question's distractors.
///
/// Rows written by older clients may contain anything, so undecodable content yields an empty list.
pub fn decode_wrong_options(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<serde_json::Value>>(raw) {
        Ok(values) => values
            .into_iter()
            .filter_map(|value| match value {
                serde_json::Value::String(value) => Some(value),
                serde_json::Value::Null => None,
                other => Some(other.to_string()),
            })
            .collect(),
        Err(error) => {
            tracing::warn!(error = &error as &dyn std::error::Error, "stored wrong options are not a json array");
            Vec::new()
        }
    }
}

pub fn encode_wrong_options(options: &[String]) -> Result<String, DbErr> {
    serde_json::to_string(options).map_err(|error| DbErr::Custom(format!("failed to encode wrong options: {error}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_wrong_options() {
        assert_eq!(decode_wrong_options(None), Vec::<String>::new());
        assert_eq!(decode_wrong_options(Some("not json")), Vec::<String>::new());
        assert_eq!(
            decode_wrong_options(Some(r#"["3", 4, null]"#)),
            vec!["3".to_string(), "4".to_string()]
        );
    }
}
