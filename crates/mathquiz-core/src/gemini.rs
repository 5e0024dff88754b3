use crate::gemini::error::GeminiError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::instrument;
use typed_builder::TypedBuilder;
use url::Url;

pub mod error;

/// Longest upstream error body kept for diagnostics.
const MAX_ERROR_BODY: usize = 2048;

#[derive(TypedBuilder, Clone)]
pub struct GeminiConfig {
    #[builder(setter(into))]
    api_key: String,
    #[builder(setter(into), default = String::from("gemini-1.5-flash"))]
    model: String,
    base_url: Url,
    #[builder(default = Duration::from_secs(60))]
    timeout: Duration,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("model", &self.model)
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    fn into_text(self) -> Result<String, GeminiError> {
        let candidate = self.candidates.into_iter().next().ok_or(GeminiError::EmptyResponse)?;
        let text: String = candidate
            .content
            .into_iter()
            .flat_map(|content| content.parts)
            .filter_map(|part| part.text)
            .collect();

        if text.trim().is_empty() {
            return Err(GeminiError::EmptyResponse);
        }
        Ok(text)
    }
}

/// Minimal client for the `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    fn endpoint(&self) -> Result<Url, GeminiError> {
        let base = self.config.base_url.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/v1beta/models/{}:generateContent", self.config.model))?;
        url.query_pairs_mut().append_pair("key", &self.config.api_key);
        Ok(url)
    }

    /// Sends one user prompt and returns the concatenated text of the first candidate.
    #[instrument(skip_all, fields(model = %self.config.model))]
    pub async fn generate_content(&self, prompt: &str) -> Result<String, GeminiError> {
        let body = GenerateContentRequest {
            contents: [RequestContent {
                role: "user",
                parts: [RequestPart { text: prompt }],
            }],
        };

        // The query string carries the api key, so urls are stripped from transport errors
        let response = self
            .http
            .post(self.endpoint()?)
            .json(&body)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let mut end = MAX_ERROR_BODY;
                while !body.is_char_boundary(end) {
                    end -= 1;
                }
                body.truncate(end);
            }
            tracing::warn!(status = status.as_u16(), "Gemini request failed");
            return Err(GeminiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let response: GenerateContentResponse = response.json().await.map_err(reqwest::Error::without_url)?;
        response.into_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client(base: &str) -> GeminiClient {
        GeminiClient::new(
            GeminiConfig::builder()
                .api_key("secret")
                .base_url(Url::parse(base).unwrap())
                .build(),
        )
        .unwrap()
    }

    #[test]
    fn test_endpoint() {
        let url = client("https://generativelanguage.googleapis.com/").endpoint().unwrap();
        assert_eq!(
            url.as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent?key=secret"
        );
    }

    #[test]
    fn test_debug_hides_key() {
        let client = client("http://localhost:1234");
        assert!(!format!("{client:?}").contains("secret"));
    }

    #[test]
    fn test_request_shape() {
        let body = GenerateContentRequest {
            contents: [RequestContent {
                role: "user",
                parts: [RequestPart { text: "hi" }],
            }],
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"contents": [{"role": "user", "parts": [{"text": "hi"}]}]})
        );
    }

    #[test]
    fn test_response_text() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [{"text": "[{\"a\":"}, {"text": "1}]"}]}}]
        }))
        .unwrap();
        assert_eq!(response.into_text().unwrap(), "[{\"a\":1}]");

        let empty: GenerateContentResponse = serde_json::from_value(json!({"candidates": []})).unwrap();
        assert!(matches!(empty.into_text(), Err(GeminiError::EmptyResponse)));

        let blocked: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": [{"finishReason": "SAFETY"}]})).unwrap();
        assert!(matches!(blocked.into_text(), Err(GeminiError::EmptyResponse)));
    }
}
