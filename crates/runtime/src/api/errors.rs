//! Unified error types surfaced by the runtime API.
//!
//! Wraps engine rejections, repository failures, and configuration problems
//! so callers can bubble them up with consistent context.
use std::path::PathBuf;

use game_core::{CiphertextHandle, EngineError, Identity, RulesConfigError};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("{requester} is not allowed to decrypt {handle}")]
    Unauthorized {
        requester: Identity,
        handle: CiphertextHandle,
    },

    #[error("invalid rules configuration")]
    InvalidConfig(#[from] RulesConfigError),

    #[error("failed to read runtime config from {path}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse runtime config: {0}")]
    ConfigParse(String),

    #[error("snapshot encoding failed")]
    Encoding(#[source] bincode::Error),

    #[error("{0} lock was poisoned")]
    LockPoisoned(&'static str),
}

impl RuntimeError {
    /// Engine rejection carried by this error, if any.
    pub fn engine_error(&self) -> Option<EngineError> {
        match self {
            RuntimeError::Engine(error) => Some(*error),
            _ => None,
        }
    }
}
