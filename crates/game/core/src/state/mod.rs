//! Participant identities and their encrypted state.
//!
//! State here is opaque ciphertext. It is produced either by
//! [`ParticipantState::initial`] or by the resolution engine, never from a
//! plaintext-derived value.
mod identity;
mod participant;

pub use identity::{Identity, ParseIdentityError};
pub use participant::{ALIVE, DEAD, Field, ParticipantState};
