//! codeify-core — shared types: language catalog, request phase (no I/O deps).

pub mod language;
pub mod phase;

pub use language::Language;
pub use phase::Phase;
