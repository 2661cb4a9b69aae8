//! Handle-only view of a participant, suitable for transport to a UI.

use serde::{Deserialize, Serialize};

use game_core::{CiphertextHandle, FheBackend, Field, Identity, ParticipantState};

use crate::api::{Result, RuntimeError};

/// All public handles of one participant at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantSnapshot {
    pub identity: Identity,
    pub initialized: bool,
    pub score: CiphertextHandle,
    pub last_action: CiphertextHandle,
    pub last_outcome: CiphertextHandle,
    pub alive: CiphertextHandle,
}

impl ParticipantSnapshot {
    pub fn capture<B: FheBackend>(
        backend: &B,
        identity: Identity,
        initialized: bool,
        state: &ParticipantState<B::Uint>,
    ) -> Self {
        let [score, last_action, last_outcome, alive] = state.handles(backend);
        Self {
            identity,
            initialized,
            score,
            last_action,
            last_outcome,
            alive,
        }
    }

    pub fn handle(&self, field: Field) -> CiphertextHandle {
        match field {
            Field::Score => self.score,
            Field::LastAction => self.last_action,
            Field::LastOutcome => self.last_outcome,
            Field::Alive => self.alive,
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(RuntimeError::Encoding)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(RuntimeError::Encoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParticipantSnapshot {
        ParticipantSnapshot {
            identity: Identity::new([0x42; 20]),
            initialized: true,
            score: CiphertextHandle::new([1; 32]),
            last_action: CiphertextHandle::new([2; 32]),
            last_outcome: CiphertextHandle::new([3; 32]),
            alive: CiphertextHandle::new([4; 32]),
        }
    }

    #[test]
    fn bytes_decode_back() {
        let snapshot = sample();
        let bytes = snapshot.to_bytes().unwrap();
        assert_eq!(ParticipantSnapshot::from_bytes(&bytes).unwrap(), snapshot);
    }

    #[test]
    fn truncated_bytes_are_rejected() {
        let bytes = sample().to_bytes().unwrap();
        let result = ParticipantSnapshot::from_bytes(&bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(RuntimeError::Encoding(_))));
    }

    #[test]
    fn handle_lookup_matches_fields() {
        let snapshot = sample();
        assert_eq!(snapshot.handle(Field::Score), snapshot.score);
        assert_eq!(snapshot.handle(Field::Alive), snapshot.alive);
    }
}
