//! Error types for the model client.
//!
//! Extraction itself never errors (see `extract`); these cover the HTTP call.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Gemini API key required: set GEMINI_API_KEY or pass api_key")]
    MissingApiKey,

    #[error("gemini error {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
