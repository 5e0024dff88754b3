use mathquiz_model::analysis::{Analysis, AnalyzeRequest};
use mathquiz_model::question::QuizQuestion;
use mathquiz_model::quiz::{SubmitAnswerRequest, SubmitAnswerResponse};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub(crate) enum ClientError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("server answered {status}: {description}")]
    Api { status: u16, description: String },

    #[error(transparent)]
    Url(#[from] url::ParseError),
}

#[derive(Deserialize)]
struct ErrorBody {
    error_description: String,
}

/// Quiz request as sent to the server. Difficulty and mode are passed through unchanged.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuizParams<'a> {
    pub(crate) topic: &'a str,
    pub(crate) num_questions: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) difficulty: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) mode: Option<&'a str>,
}

pub(crate) struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    pub(crate) fn new(base: Url) -> Result<Self, ClientError> {
        // Generation may take a while on the server side
        let http = reqwest::Client::builder().timeout(Duration::from_secs(120)).build()?;
        Ok(Self { http, base })
    }

    fn url(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base.join(path)?)
    }

    async fn read<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }
        let description = match response.json::<ErrorBody>().await {
            Ok(body) => body.error_description,
            Err(_) => status.canonical_reason().unwrap_or("unknown error").to_owned(),
        };
        Err(ClientError::Api {
            status: status.as_u16(),
            description,
        })
    }

    pub(crate) async fn topics(&self) -> Result<Vec<String>, ClientError> {
        let response = self.http.get(self.url("topics")?).send().await?;
        Self::read(response).await
    }

    pub(crate) async fn generate_quiz(&self, params: &QuizParams<'_>) -> Result<Vec<QuizQuestion>, ClientError> {
        let response = self.http.post(self.url("generate-quiz")?).json(params).send().await?;
        Self::read(response).await
    }

    pub(crate) async fn submit_answer(
        &self,
        request: &SubmitAnswerRequest,
    ) -> Result<SubmitAnswerResponse, ClientError> {
        let response = self.http.post(self.url("submit-answer")?).json(request).send().await?;
        Self::read(response).await
    }

    pub(crate) async fn analyze(&self, request: &AnalyzeRequest) -> Result<Analysis, ClientError> {
        let response = self.http.post(self.url("analyze")?).json(request).send().await?;
        Self::read(response).await
    }
}
