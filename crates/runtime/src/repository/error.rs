//! Error types raised by repository implementations.

use game_core::Identity;
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("participant repository lock was poisoned")]
    LockPoisoned,

    #[error("participant {0} is not registered")]
    UnknownParticipant(Identity),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
