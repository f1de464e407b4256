//! codeify-llm — model interface, prompt builder, response extractor.

pub mod client;
pub mod error;
pub mod extract;
pub mod gemini;
pub mod prompt;
pub mod types;

pub use client::ModelClient;
pub use error::{Error, Result};
pub use extract::extract_json;
pub use gemini::GeminiClient;
pub use prompt::{fix_prompt, review_prompt};
pub use types::{FixPayload, NO_EXPLANATION};
