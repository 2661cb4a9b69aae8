//! Error types for the resolution pipeline.

use crate::state::Identity;

/// Errors surfaced by the resolution engine and its read paths.
///
/// Validation errors are raised before any state is touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineError {
    #[error("action code is outside {{1 = attack, 2 = defend, 3 = scout}}")]
    InvalidAction,

    #[error("roll is outside [0, 99]")]
    InvalidRoll,

    #[error("input proof does not bind the ciphertexts to this caller and contract")]
    ProofInvalid,

    #[error("participant {0} has no recorded state")]
    NotRegistered(Identity),
}

impl EngineError {
    /// Stable identifier for logs, events and metrics.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAction => "invalid_action",
            Self::InvalidRoll => "invalid_roll",
            Self::ProofInvalid => "proof_invalid",
            Self::NotRegistered(_) => "not_registered",
        }
    }
}
