//! Runtime configuration for codeify

use codeify_llm::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use codeify_llm::GeminiClient;

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Model to use
    pub model: String,
    /// API base URL
    pub base_url: String,
    /// API key; falls back to GEMINI_API_KEY at client construction
    pub api_key: Option<String>,
}

impl RuntimeConfig {
    pub fn new() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Ok(model) = std::env::var("CODEIFY_MODEL") {
            config.model = model;
        }
        if let Ok(url) = std::env::var("CODEIFY_BASE_URL") {
            config.base_url = url;
        }
        if let Ok(key) = std::env::var(GeminiClient::API_KEY_ENV) {
            config.api_key = Some(key);
        }
        config
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Build a Gemini client for this configuration.
    pub fn client(&self) -> codeify_llm::Result<GeminiClient> {
        GeminiClient::new(
            self.api_key.clone(),
            Some(self.base_url.clone()),
            Some(self.model.clone()),
        )
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new()
    }
}
