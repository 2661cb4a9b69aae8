//! Repository contract for the participant registry.

use game_core::{Identity, ParticipantState};

use super::Result;

/// Stored participant: explicit presence marker plus encrypted state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantRecord<C> {
    pub identity: Identity,
    pub initialized: bool,
    pub state: ParticipantState<C>,
}

/// Append-only, insertion-ordered registry of participants and their state.
///
/// Participants are never removed. Order is first-registration order.
pub trait ParticipantRepository<C>: Send + Sync {
    /// Appends `identity` with `state` if absent.
    ///
    /// Returns `false` and leaves the stored state untouched when the
    /// identity is already registered.
    fn insert(&self, identity: Identity, state: ParticipantState<C>) -> Result<bool>;

    /// Replaces the state of a registered participant.
    fn store(&self, identity: Identity, state: ParticipantState<C>) -> Result<()>;

    /// Loads a participant record.
    fn load(&self, identity: &Identity) -> Result<Option<ParticipantRecord<C>>>;

    /// Presence check with no side effects.
    ///
    /// Infallible by contract: implementations report `false` when the
    /// backing store is unavailable (for example a poisoned lock), while
    /// every other method surfaces the failure as an error.
    fn is_registered(&self, identity: &Identity) -> bool;

    /// All registered identities in first-registration order.
    fn identities(&self) -> Result<Vec<Identity>>;

    /// Number of registered participants.
    fn len(&self) -> Result<usize> {
        Ok(self.identities()?.len())
    }

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
