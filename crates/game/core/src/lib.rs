//! Confidential turn resolution rules shared by the runtime and tooling.
//!
//! `game-core` defines the oblivious state transition for Mirror Protocol:
//! participants submit an encrypted action and an encrypted roll, and the
//! [`ResolutionEngine`] computes their next encrypted state using only the
//! homomorphic operations of an [`FheBackend`]. Nothing in this crate decrypts
//! a participant's data or branches on it.
//!
//! With the `mock` feature, [`fhe::ClearBackend`] provides a
//! plaintext-equivalent backend with operation tracing for tests.
pub mod action;
pub mod config;
pub mod engine;
pub mod fhe;
pub mod state;

pub use action::{ActionKind, Outcome, Roll, RollOutOfRange};
pub use config::{RulesConfig, RulesConfigError};
pub use engine::{EngineError, ResolutionEngine};
pub use fhe::{
    CiphertextHandle, Decryptor, EncryptedInput, FheBackend, FheOp, InputContext, InputProof,
    InputVerifier,
};
pub use state::{ALIVE, DEAD, Field, Identity, ParseIdentityError, ParticipantState};
