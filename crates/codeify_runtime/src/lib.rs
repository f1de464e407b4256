//! codeify-runtime — session controller and configuration.

pub mod config;
pub mod error;
pub mod session;

pub use config::RuntimeConfig;
pub use error::{Result, SessionError};
pub use session::ReviewSession;
