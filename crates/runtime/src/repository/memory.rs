//! In-memory participant registry for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use game_core::{Identity, ParticipantState};

use crate::repository::{ParticipantRecord, ParticipantRepository, RepositoryError, Result};

struct Arena<C> {
    index: HashMap<Identity, usize>,
    records: Vec<ParticipantRecord<C>>,
}

/// Insertion-ordered arena of participant records behind a single lock.
pub struct InMemoryParticipantRepo<C> {
    arena: RwLock<Arena<C>>,
}

impl<C> InMemoryParticipantRepo<C> {
    pub fn new() -> Self {
        Self {
            arena: RwLock::new(Arena {
                index: HashMap::new(),
                records: Vec::new(),
            }),
        }
    }
}

impl<C> Default for InMemoryParticipantRepo<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clone + Send + Sync> ParticipantRepository<C> for InMemoryParticipantRepo<C> {
    fn insert(&self, identity: Identity, state: ParticipantState<C>) -> Result<bool> {
        let mut arena = self
            .arena
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        if arena.index.contains_key(&identity) {
            return Ok(false);
        }
        let position = arena.records.len();
        arena.records.push(ParticipantRecord {
            identity,
            initialized: true,
            state,
        });
        arena.index.insert(identity, position);
        Ok(true)
    }

    fn store(&self, identity: Identity, state: ParticipantState<C>) -> Result<()> {
        let mut arena = self
            .arena
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let position = *arena
            .index
            .get(&identity)
            .ok_or(RepositoryError::UnknownParticipant(identity))?;
        arena.records[position].state = state;
        Ok(())
    }

    fn load(&self, identity: &Identity) -> Result<Option<ParticipantRecord<C>>> {
        let arena = self
            .arena
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(arena
            .index
            .get(identity)
            .map(|&position| arena.records[position].clone()))
    }

    fn is_registered(&self, identity: &Identity) -> bool {
        self.arena
            .read()
            .map(|arena| arena.index.contains_key(identity))
            .unwrap_or(false)
    }

    fn identities(&self) -> Result<Vec<Identity>> {
        let arena = self
            .arena
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(arena.records.iter().map(|record| record.identity).collect())
    }

    fn len(&self) -> Result<usize> {
        let arena = self
            .arena
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(arena.records.len())
    }
}
