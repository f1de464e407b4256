//! Gemini generateContent client (generativelanguage.googleapis.com).

use async_trait::async_trait;
use serde::Deserialize;

use crate::client::ModelClient;
use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Gemini HTTP client. Uses GEMINI_API_KEY env and the generateContent API.
pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

impl GeminiClient {
    /// Environment variable for the API key
    pub const API_KEY_ENV: &'static str = "GEMINI_API_KEY";

    /// Create client. `api_key` required (or via GEMINI_API_KEY); `base_url`
    /// and `model` optional (defaults: generativelanguage.googleapis.com,
    /// gemini-2.5-flash).
    pub fn new(
        api_key: Option<String>,
        base_url: Option<String>,
        model: Option<String>,
    ) -> Result<Self> {
        let api_key = api_key
            .or_else(|| std::env::var(Self::API_KEY_ENV).ok())
            .ok_or(Error::MissingApiKey)?;
        Ok(Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key,
            client: reqwest::Client::new(),
        })
    }

    /// Create client from environment
    pub fn from_env() -> Result<Self> {
        Self::new(None, None, None)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn generate_content(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );
        let body = serde_json::json!({
            "contents": [ { "parts": [ { "text": prompt } ] } ]
        });
        let res = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;
        let status = res.status();
        let text = res.text().await?;
        if !status.is_success() {
            return Err(Error::Api { status, body: text });
        }
        let parsed: GenerateContentResponse = serde_json::from_str(&text)?;
        // All parts of the first candidate, concatenated. An empty reply is
        // not an error here; downstream extraction handles it.
        let reply = parsed
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.iter().map(|p| p.text.as_str()).collect::<String>())
            .unwrap_or_default();
        Ok(reply)
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        tracing::debug!(model = %self.model, chars = prompt.len(), "sending generateContent request");
        self.generate_content(prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(server: &mockito::ServerGuard) -> GeminiClient {
        GeminiClient::new(Some("test-key".into()), Some(server.url()), None).unwrap()
    }

    #[tokio::test]
    async fn concatenates_candidate_parts() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
            .match_header("x-goog-api-key", "test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Hello "},{"text":"world"}]}}]}"#,
            )
            .create_async()
            .await;

        let reply = client_for(&server).generate("hi").await.unwrap();
        assert_eq!(reply, "Hello world");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn missing_candidates_yield_an_empty_reply() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
            .with_status(200)
            .with_body(r#"{"candidates":[]}"#)
            .create_async()
            .await;

        let reply = client_for(&server).generate("hi").await.unwrap();
        assert_eq!(reply, "");
    }

    #[tokio::test]
    async fn non_success_status_is_an_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
            .with_status(429)
            .with_body("quota exceeded")
            .create_async()
            .await;

        let err = client_for(&server).generate("hi").await.unwrap_err();
        match err {
            Error::Api { status, body } => {
                assert_eq!(status.as_u16(), 429);
                assert_eq!(body, "quota exceeded");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn missing_api_key_is_rejected() {
        // GEMINI_API_KEY may be set on a developer machine; only assert the
        // error shape when construction actually failed.
        if let Some(err) = GeminiClient::new(None, None, None).err() {
            assert!(matches!(err, Error::MissingApiKey));
        }
    }
}
