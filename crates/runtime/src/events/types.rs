//! Event payloads published by the runtime.

use serde::{Deserialize, Serialize};

use game_core::{EngineError, Identity};

use crate::snapshot::ParticipantSnapshot;

/// Runtime notifications.
///
/// Events carry identities, sequence numbers and ciphertext handles only.
/// They never reveal plaintexts or which action was submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuntimeEvent {
    /// A participant entered the registry at `position`.
    ParticipantRegistered { identity: Identity, position: usize },

    /// A submission was resolved and stored.
    ActionResolved {
        sequence: u64,
        snapshot: ParticipantSnapshot,
    },

    /// A submission failed validation; nothing was mutated.
    ActionRejected {
        identity: Identity,
        reason: EngineError,
    },
}

impl RuntimeEvent {
    pub fn identity(&self) -> Identity {
        match self {
            RuntimeEvent::ParticipantRegistered { identity, .. }
            | RuntimeEvent::ActionRejected { identity, .. } => *identity,
            RuntimeEvent::ActionResolved { snapshot, .. } => snapshot.identity,
        }
    }
}
