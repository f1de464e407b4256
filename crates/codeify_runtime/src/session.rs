//! Review session: the code buffer, request phase, response text, and the
//! review/fix policy over a model client.
//!
//! One request at a time: `Requesting` gates both actions. The session never
//! surfaces transport or parse failures as errors; they end up in the
//! response text with the phase set to `Failure`, so the user always has
//! something to read.

use std::sync::Arc;

use codeify_core::{Language, Phase};
use codeify_llm::{extract_json, fix_prompt, review_prompt, FixPayload, ModelClient};

use crate::error::{Result, SessionError};

/// Shown when neither extraction attempt yields a usable payload; the raw
/// reply follows so the user can read what the model actually said.
pub const PARSE_FALLBACK_PREFIX: &str = "Could not parse JSON from model. Raw reply below:\n\n";

/// Prefix for transport/API failures.
pub const API_ERROR_PREFIX: &str = "Error calling the review API: ";

/// Appended to the explanation when a fix was produced but not applied.
pub const CODE_AVAILABLE_NOTE: &str = "\n\nCorrected code available.";

pub struct ReviewSession {
    client: Arc<dyn ModelClient>,
    code: String,
    language: Language,
    phase: Phase,
    response: String,
    /// Corrected code from a successful fix that was not auto-applied.
    pending_fix: Option<String>,
}

impl ReviewSession {
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        Self {
            client,
            code: String::new(),
            language: Language::default(),
            phase: Phase::Idle,
            response: String::new(),
            pending_fix: None,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    /// Corrected code held back by a `fix` without auto-apply.
    pub fn pending_fix(&self) -> Option<&str> {
        self.pending_fix.as_deref()
    }

    fn begin(&mut self, action: &'static str) -> Result<()> {
        if self.phase.is_busy() {
            return Err(SessionError::Busy);
        }
        if self.code.is_empty() {
            return Err(SessionError::EmptyBuffer { action });
        }
        self.phase = Phase::Requesting;
        Ok(())
    }

    /// Send the buffer for a senior-style review. The reply is free-form
    /// markdown and is stored verbatim.
    pub async fn review(&mut self) -> Result<()> {
        self.begin("review")?;
        let prompt = review_prompt(self.language, &self.code);
        match self.client.generate(&prompt).await {
            Ok(text) => {
                self.response = text;
                self.phase = Phase::Success;
            }
            Err(e) => self.fail_request(&e),
        }
        Ok(())
    }

    /// Ask the model for a corrected version of the buffer.
    ///
    /// With `auto_apply`, a usable payload replaces the buffer; otherwise the
    /// corrected code is held in `pending_fix` and the response notes its
    /// availability. An unusable reply leaves the buffer alone and stores the
    /// raw-reply fallback message.
    pub async fn fix(&mut self, auto_apply: bool) -> Result<()> {
        self.begin("fix")?;
        self.response.clear();
        self.pending_fix = None;
        let prompt = fix_prompt(self.language, &self.code);
        match self.client.generate(&prompt).await {
            Ok(text) => self.finish_fix(text, auto_apply),
            Err(e) => self.fail_request(&e),
        }
        Ok(())
    }

    fn finish_fix(&mut self, text: String, auto_apply: bool) {
        match extract_json(&text).and_then(FixPayload::from_value) {
            Some(payload) => {
                if auto_apply {
                    self.response = payload.explanation;
                    self.code = payload.corrected_code;
                } else {
                    self.response = format!("{}{}", payload.explanation, CODE_AVAILABLE_NOTE);
                    self.pending_fix = Some(payload.corrected_code);
                }
                self.phase = Phase::Success;
            }
            None => {
                tracing::debug!(chars = text.len(), "no usable payload in model reply");
                self.response = format!("{PARSE_FALLBACK_PREFIX}{text}");
                self.phase = Phase::Failure;
            }
        }
    }

    fn fail_request(&mut self, error: &codeify_llm::Error) {
        tracing::warn!(error = %error, "model request failed");
        self.response = format!("{API_ERROR_PREFIX}{error}");
        self.phase = Phase::Failure;
    }
}
