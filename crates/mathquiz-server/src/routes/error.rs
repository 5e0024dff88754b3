use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use mathquiz_core::error::QuizError;
use serde::Serialize;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::error::Error;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub(crate) enum ApiError {
    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error(transparent)]
    Multipart(#[from] MultipartError),

    #[error(transparent)]
    JsonBody(#[from] JsonRejection),
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ApiErrorType {
    BadRequest,
    NotFound,
    PayloadTooLarge,
    GenerationFailed,
    OcrFailed,
    InternalError,
}

pub(crate) trait GetStatusCode {
    fn status_code(&self) -> http::StatusCode;
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ErrorData<T> {
    pub(crate) error: T,
    pub(crate) error_description: Cow<'static, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) data: Option<Map<String, Value>>,
}

impl<T> ErrorData<T> {
    pub fn new<A: Into<Cow<'static, str>>>(error: T, error_description: A) -> Self {
        Self {
            error,
            error_description: error_description.into(),
            data: None,
        }
    }
}

pub(crate) trait ErrorDataProvider<T: GetStatusCode> {
    fn error_data(self) -> ErrorData<T>;
}

impl GetStatusCode for ApiErrorType {
    fn status_code(&self) -> http::StatusCode {
        match self {
            Self::BadRequest => http::StatusCode::BAD_REQUEST,
            Self::NotFound => http::StatusCode::NOT_FOUND,
            Self::PayloadTooLarge => http::StatusCode::PAYLOAD_TOO_LARGE,
            Self::GenerationFailed | Self::OcrFailed | Self::InternalError => {
                http::StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl GetStatusCode for ApiError {
    fn status_code(&self) -> http::StatusCode {
        self.error_type().status_code()
    }
}

impl ApiError {
    fn error_type(&self) -> ApiErrorType {
        match self {
            Self::Quiz(
                QuizError::MissingTopic
                | QuizError::MissingQuestionText
                | QuizError::MissingAnswer
                | QuizError::InvalidQuestionCount { .. }
                | QuizError::InvalidUpload(_),
            ) => ApiErrorType::BadRequest,
            Self::Quiz(QuizError::QuestionNotFound(_)) => ApiErrorType::NotFound,
            Self::Quiz(QuizError::Generator(_)) => ApiErrorType::GenerationFailed,
            Self::Quiz(QuizError::Ocr(_)) => ApiErrorType::OcrFailed,
            Self::Quiz(QuizError::Database(_)) => ApiErrorType::InternalError,
            Self::Multipart(error) if error.status() == http::StatusCode::PAYLOAD_TOO_LARGE => {
                ApiErrorType::PayloadTooLarge
            }
            Self::Multipart(_) | Self::JsonBody(_) => ApiErrorType::BadRequest,
        }
    }

    /// Underlying cause, only exposed outside production.
    fn details(&self) -> Map<String, Value> {
        let mut data = Map::new();
        let mut message = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            if !message.contains(&text) {
                message = format!("{message}: {text}");
            }
            source = cause.source();
        }
        data.insert("message".to_owned(), Value::String(message));
        if let Self::Quiz(QuizError::Generator(error)) = self {
            if let Some(raw_text) = error.raw_text() {
                data.insert("raw_text".to_owned(), Value::String(raw_text.to_owned()));
            }
        }
        data
    }
}

impl ErrorDataProvider<ApiErrorType> for ApiError {
    fn error_data(self) -> ErrorData<ApiErrorType> {
        let error = self.error_type();
        let description: Cow<'static, str> = match error {
            ApiErrorType::BadRequest | ApiErrorType::NotFound | ApiErrorType::PayloadTooLarge => {
                self.to_string().into()
            }
            ApiErrorType::GenerationFailed => "Failed to generate questions".into(),
            ApiErrorType::OcrFailed => "Failed to read text from the image".into(),
            ApiErrorType::InternalError => "Internal server error".into(),
        };
        let mut data = ErrorData::new(error, description);
        data.data = Some(self.details());
        data
    }
}

/// Full error body including `data`, picked up by [`expose_error_details`].
#[derive(Debug, Clone)]
pub(crate) struct DetailedError(Value);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status_code().is_server_error() {
            tracing::error!(error = &self as &dyn Error, "request failed");
        } else {
            tracing::debug!(error = &self as &dyn Error, "rejected request");
        }
        error_to_axum_response(self)
    }
}

pub(crate) fn error_to_axum_response<E, T>(error: T) -> Response
where
    E: GetStatusCode + Serialize,
    T: GetStatusCode + ErrorDataProvider<E>,
{
    let mut data = error.error_data();
    let status_code = data.error.status_code();
    let detailed = serde_json::to_value(&data).ok().map(DetailedError);

    data.data = None;
    let mut response = (status_code, Json(data)).into_response();
    if let Some(detailed) = detailed {
        response.extensions_mut().insert(detailed);
    }
    response
}

/// Swaps error bodies for their detailed variant. Only installed outside production.
pub(crate) async fn expose_error_details(mut response: Response) -> Response {
    match response.extensions_mut().remove::<DetailedError>() {
        Some(DetailedError(body)) => (response.status(), Json(body)).into_response(),
        None => response,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathquiz_core::generator::GeneratorError;
    use mathquiz_core::generator::parse::parse_batch;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::from(QuizError::MissingTopic).status_code(),
            http::StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(QuizError::QuestionNotFound(3)).status_code(),
            http::StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(QuizError::Database(sea_orm::DbErr::Custom("boom".to_owned()))).status_code(),
            http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_parse_failure_details() {
        let source = parse_batch("nope").unwrap_err();
        let error = ApiError::from(QuizError::Generator(GeneratorError::Parse {
            source,
            raw_text: "nope".to_owned(),
        }));

        let data = error.error_data();
        assert_eq!(data.error_description, "Failed to generate questions");
        let details = data.data.unwrap();
        assert_eq!(details["raw_text"], "nope");
        assert!(details["message"].as_str().unwrap().contains("not valid JSON"));
    }
}
