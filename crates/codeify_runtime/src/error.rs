//! Session error types
//!
//! These are guard failures only. Transport and parse problems are not
//! errors at this level: they become the session's response text, matching
//! what the user sees.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Please enter some code to {action}.")]
    EmptyBuffer { action: &'static str },

    #[error("a request is already in flight")]
    Busy,
}

pub type Result<T> = std::result::Result<T, SessionError>;
