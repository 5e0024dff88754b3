use crate::gemini::GeminiClient;
use async_trait::async_trait;
use mathquiz_model::difficulty::Difficulty;
use std::error::Error;
use tracing::instrument;

pub use error::GeneratorError;

pub mod error;
pub mod parse;
pub mod prompt;

/// A question produced by the generator, not yet stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedQuestion {
    pub question: String,
    pub correct_answer: String,
    pub wrong_options: Vec<String>,
    pub pattern: Option<String>,
}

/// Answer material for a question supplied by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub correct_answer: String,
    pub wrong_options: Vec<String>,
    pub pattern: Option<String>,
}

#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate_questions(
        &self,
        topic: &str,
        count: usize,
        difficulty: Difficulty,
    ) -> Result<Vec<GeneratedQuestion>, GeneratorError>;

    /// A variation of `original` that keeps its pattern but changes the values.
    async fn generate_similar(
        &self,
        original: &str,
        topic: &str,
        difficulty: Difficulty,
    ) -> Result<GeneratedQuestion, GeneratorError>;

    async fn complete_question(&self, question: &str, topic: &str) -> Result<Completion, GeneratorError>;
}

pub struct GeminiGenerator {
    client: GeminiClient,
}

impl GeminiGenerator {
    #[must_use]
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    async fn call<T: Send>(
        &self,
        prompt: String,
        parse: impl FnOnce(&str) -> Result<T, parse::ParseError> + Send,
    ) -> Result<T, GeneratorError> {
        let text = self.client.generate_content(&prompt).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "question generation failed");
        })?;

        parse(&text).map_err(|source| {
            tracing::error!(error = &source as &dyn Error, raw_text = %text, "unreadable generator reply");
            GeneratorError::Parse { source, raw_text: text }
        })
    }
}

#[async_trait]
impl QuestionGenerator for GeminiGenerator {
    #[instrument(skip(self))]
    async fn generate_questions(
        &self,
        topic: &str,
        count: usize,
        difficulty: Difficulty,
    ) -> Result<Vec<GeneratedQuestion>, GeneratorError> {
        self.call(prompt::batch(topic, count, difficulty), parse::parse_batch).await
    }

    #[instrument(skip(self, original))]
    async fn generate_similar(
        &self,
        original: &str,
        topic: &str,
        difficulty: Difficulty,
    ) -> Result<GeneratedQuestion, GeneratorError> {
        self.call(prompt::similar(original, topic, difficulty), parse::parse_single)
            .await
    }

    #[instrument(skip(self, question))]
    async fn complete_question(&self, question: &str, topic: &str) -> Result<Completion, GeneratorError> {
        self.call(prompt::completion(question, topic), parse::parse_completion)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::GeminiConfig;
    use crate::gemini::error::GeminiError;
    use axum::Router;
    use axum::http::StatusCode;
    use serde_json::json;
    use test_log::test;
    use url::Url;

    /// Serves `body` with `status` for every request and returns the base url.
    async fn stub_gemini(status: StatusCode, body: String) -> Url {
        let router = Router::new().fallback(move || {
            let body = body.clone();
            async move { (status, body) }
        });
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
        Url::parse(&format!("http://{addr}")).unwrap()
    }

    fn reply(text: &str) -> String {
        json!({"candidates": [{"content": {"parts": [{"text": text}]}}]}).to_string()
    }

    fn generator(base_url: Url) -> GeminiGenerator {
        let client = GeminiClient::new(GeminiConfig::builder().api_key("secret").base_url(base_url).build()).unwrap();
        GeminiGenerator::new(client)
    }

    #[test(tokio::test)]
    async fn test_generates_from_reply() {
        let text = "```json\n[{\"question\": \"2 + 3?\", \"correct_answer\": \"5\", \"wrong_options\": [\"4\", \"6\"], \"pattern\": \"addition\"}]\n```";
        let generator = generator(stub_gemini(StatusCode::OK, reply(text)).await);

        let questions = generator
            .generate_questions("Arithmetic", 1, Difficulty::Easy)
            .await
            .unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_answer, "5");
        assert_eq!(questions[0].pattern.as_deref(), Some("addition"));
    }

    #[test(tokio::test)]
    async fn test_unreadable_reply_keeps_raw_text() {
        let generator = generator(stub_gemini(StatusCode::OK, reply("Sorry, I can't help with that.")).await);

        let error = generator
            .generate_similar("2 + 2?", "Arithmetic", Difficulty::Easy)
            .await
            .unwrap_err();
        assert!(matches!(error, GeneratorError::Parse { .. }));
        assert_eq!(error.raw_text(), Some("Sorry, I can't help with that."));
    }

    #[test(tokio::test)]
    async fn test_error_status() {
        let generator = generator(stub_gemini(StatusCode::SERVICE_UNAVAILABLE, "overloaded".to_owned()).await);

        let error = generator.complete_question("2 + 2?", "Arithmetic").await.unwrap_err();
        match error {
            GeneratorError::Upstream(GeminiError::Status { status, body }) => {
                assert_eq!(status, 503);
                assert_eq!(body, "overloaded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
