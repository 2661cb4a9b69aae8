//! Encrypted-arithmetic capability consumed by the resolution engine.
//!
//! The engine never implements a cryptosystem. It is written against
//! [`FheBackend`], a narrow set of homomorphic operations over encrypted
//! `u32` values and encrypted booleans, so the game rules can be exercised
//! against any backend that provides them, including the plaintext-equivalent
//! [`ClearBackend`] used in tests.
//!
//! # Traits
//!
//! - [`FheBackend`]: add / compare / boolean logic / oblivious select
//! - [`InputVerifier`]: checks the proof that binds submitted ciphertexts to a
//!   caller and contract, and attests the plaintext codomain
//! - [`Decryptor`]: releases a plaintext; only the decryption gateway may call it

#[cfg(any(test, feature = "mock"))]
mod clear;
mod handle;
mod input;

#[cfg(any(test, feature = "mock"))]
pub use clear::{ClearBackend, ClearBool, ClearUint};
pub use handle::CiphertextHandle;
pub use input::{EncryptedInput, InputContext, InputProof};

use crate::engine::EngineError;

/// Homomorphic operations over encrypted integers and booleans.
///
/// Every operation is total and its cost must not depend on the encrypted
/// values. Integer arithmetic wraps modulo 2^32.
pub trait FheBackend {
    /// Encrypted `u32`.
    type Uint: Clone + core::fmt::Debug;
    /// Encrypted boolean (comparison results, masks).
    type Bool: Clone + core::fmt::Debug;

    /// Encrypts a public constant.
    fn trivial(&self, value: u32) -> Self::Uint;

    fn add(&self, lhs: &Self::Uint, rhs: &Self::Uint) -> Self::Uint;

    fn eq(&self, lhs: &Self::Uint, rhs: &Self::Uint) -> Self::Bool;

    fn lt(&self, lhs: &Self::Uint, rhs: &Self::Uint) -> Self::Bool;

    fn and(&self, lhs: &Self::Bool, rhs: &Self::Bool) -> Self::Bool;

    fn or(&self, lhs: &Self::Bool, rhs: &Self::Bool) -> Self::Bool;

    fn not(&self, value: &Self::Bool) -> Self::Bool;

    /// Oblivious multiplexer: `if_true` when `condition` encrypts true,
    /// otherwise `if_false`.
    fn select(&self, condition: &Self::Bool, if_true: &Self::Uint, if_false: &Self::Uint)
    -> Self::Uint;

    /// Public handle addressing `value` (what readers and ACLs see).
    fn handle(&self, value: &Self::Uint) -> CiphertextHandle;
}

/// Verification of externally produced ciphertext inputs.
pub trait InputVerifier: FheBackend {
    /// Checks that `input` was produced for `context` and that its plaintexts
    /// lie in the accepted domains.
    ///
    /// Checks run in a fixed order: proof binding ([`EngineError::ProofInvalid`]),
    /// action codomain ([`EngineError::InvalidAction`]), roll range
    /// ([`EngineError::InvalidRoll`]).
    fn verify_input(
        &self,
        context: &InputContext,
        input: &EncryptedInput<Self::Uint>,
    ) -> Result<(), EngineError>;
}

/// Plaintext release.
///
/// Decryption is outside the engine. Callers must authorize the requester
/// before invoking this.
pub trait Decryptor: FheBackend {
    fn decrypt(&self, value: &Self::Uint) -> u32;
}

/// Kind of capability call, as recorded by tracing backends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum FheOp {
    Trivial,
    Add,
    Eq,
    Lt,
    And,
    Or,
    Not,
    Select,
}
