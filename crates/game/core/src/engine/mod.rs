//! Oblivious resolution pipeline.
//!
//! The [`ResolutionEngine`] is the only producer of post-initialization
//! participant state. A submission goes through two phases:
//!
//! 1. `pre_validate` - proof binding and codomain checks via the capability;
//!    the only phase that can fail, and it runs before anything is computed
//! 2. `apply` - a fixed, input-independent sequence of homomorphic operations
//!    producing the next [`ParticipantState`]
//!
//! No step decrypts. Conditionals are oblivious selects, and death is sticky
//! because the next liveness is AND-gated with the previous one.

mod errors;
mod transition;

pub use errors::EngineError;

use crate::config::RulesConfig;
use crate::fhe::{EncryptedInput, FheBackend, InputContext, InputVerifier};
use crate::state::ParticipantState;

/// Resolves one turn for one participant.
pub struct ResolutionEngine<'a, B> {
    backend: &'a B,
    rules: &'a RulesConfig,
}

impl<'a, B: FheBackend> ResolutionEngine<'a, B> {
    pub fn new(backend: &'a B, rules: &'a RulesConfig) -> Self {
        Self { backend, rules }
    }

    pub fn rules(&self) -> &RulesConfig {
        self.rules
    }

    /// Verifies `input` for `context`. Mutates nothing.
    pub fn pre_validate(
        &self,
        context: &InputContext,
        input: &EncryptedInput<B::Uint>,
    ) -> Result<(), EngineError>
    where
        B: InputVerifier,
    {
        self.backend.verify_input(context, input)
    }

    /// Computes the next state from an input that already passed
    /// [`pre_validate`](Self::pre_validate).
    pub fn apply(
        &self,
        current: &ParticipantState<B::Uint>,
        input: &EncryptedInput<B::Uint>,
    ) -> ParticipantState<B::Uint> {
        transition::resolve_oblivious(self.backend, self.rules, current, &input.action, &input.roll)
    }

    /// Runs both phases.
    pub fn resolve(
        &self,
        context: &InputContext,
        current: &ParticipantState<B::Uint>,
        input: &EncryptedInput<B::Uint>,
    ) -> Result<ParticipantState<B::Uint>, EngineError>
    where
        B: InputVerifier,
    {
        self.pre_validate(context, input)?;
        Ok(self.apply(current, input))
    }
}
