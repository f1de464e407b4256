//! Phase: Idle → Requesting → {Success | Failure} → Idle
//!
//! One request in flight at a time; `Requesting` is the busy flag that gates
//! new review/fix actions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    Requesting,
    Success,
    Failure,
}

impl Phase {
    pub fn is_busy(self) -> bool {
        matches!(self, Phase::Requesting)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Success | Phase::Failure)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::Requesting => write!(f, "requesting"),
            Phase::Success => write!(f, "success"),
            Phase::Failure => write!(f, "failure"),
        }
    }
}
