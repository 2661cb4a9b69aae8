//! Submission and read API over the participant registry.
//!
//! [`MirrorRuntime`] owns the backend, the registry, the access list and the
//! event bus. Mutating calls are serialized by a single write lock, so
//! verification, lazy registration, resolution, storage and access grants
//! happen as one unit. Reads only take shared repository locks.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use game_core::{
    CiphertextHandle, Decryptor, EncryptedInput, EngineError, FheBackend, Field, Identity,
    InputContext, InputVerifier, ParticipantState, ResolutionEngine,
};

use crate::acl::{AccessList, Principal};
use crate::api::{Result, RuntimeError};
use crate::config::RuntimeConfig;
use crate::events::{EventBus, RuntimeEvent};
use crate::repository::{InMemoryParticipantRepo, ParticipantRepository};
use crate::snapshot::ParticipantSnapshot;

/// Acknowledgement of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Global order of this submission among accepted ones, starting at 1.
    pub sequence: u64,
    /// Whether this submission registered the participant.
    pub newly_registered: bool,
    /// Handles of the state stored by this submission.
    pub snapshot: ParticipantSnapshot,
}

/// Confidential turn resolution runtime.
pub struct MirrorRuntime<B: FheBackend> {
    backend: B,
    config: RuntimeConfig,
    repository: Box<dyn ParticipantRepository<B::Uint>>,
    acl: AccessList,
    events: EventBus,
    // Guards the accepted-submission counter and serializes writers.
    sequence: Mutex<u64>,
}

impl<B> MirrorRuntime<B>
where
    B: FheBackend,
    B::Uint: Send + Sync + 'static,
{
    pub fn builder(backend: B) -> RuntimeBuilder<B> {
        RuntimeBuilder::new(backend)
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Read-only view of the registry backing this runtime.
    pub fn repository(&self) -> &dyn ParticipantRepository<B::Uint> {
        &*self.repository
    }

    pub fn access_list(&self) -> &AccessList {
        &self.acl
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RuntimeEvent> {
        self.events.subscribe()
    }

    /// Ensures `identity` is registered with the default encrypted state.
    ///
    /// Returns whether the participant was newly added. Never resets an
    /// existing participant.
    pub fn register(&self, identity: Identity) -> Result<bool> {
        let _writer = self.lock_writer()?;
        if self.repository.is_registered(&identity) {
            return Ok(false);
        }
        let state = ParticipantState::initial(&self.backend);
        self.insert_participant(identity, &state)
    }

    /// Verifies and resolves one encrypted action for `identity`.
    ///
    /// Any verification failure aborts before the registry or state is
    /// touched; the rejection is logged and published.
    pub fn submit_action(
        &self,
        identity: Identity,
        input: EncryptedInput<B::Uint>,
    ) -> Result<Receipt>
    where
        B: InputVerifier,
    {
        let mut sequence = self.lock_writer()?;
        let engine = ResolutionEngine::new(&self.backend, &self.config.rules);
        let context = InputContext::new(self.config.contract, identity);

        if let Err(error) = engine.pre_validate(&context, &input) {
            tracing::warn!(%identity, code = error.error_code(), "action rejected");
            self.events.publish(RuntimeEvent::ActionRejected {
                identity,
                reason: error,
            });
            return Err(error.into());
        }

        let (current, registered) = match self.repository.load(&identity)? {
            Some(record) => (record.state, true),
            None => (ParticipantState::initial(&self.backend), false),
        };
        let next = engine.apply(&current, &input);

        let newly_registered = if registered {
            self.repository.store(identity, next.clone())?;
            self.grant(identity, &next)?;
            false
        } else {
            self.insert_participant(identity, &next)?
        };

        *sequence += 1;
        let snapshot = ParticipantSnapshot::capture(&self.backend, identity, true, &next);
        tracing::debug!(%identity, sequence = *sequence, "action resolved");
        self.events.publish(RuntimeEvent::ActionResolved {
            sequence: *sequence,
            snapshot: snapshot.clone(),
        });

        Ok(Receipt {
            sequence: *sequence,
            newly_registered,
            snapshot,
        })
    }

    pub fn is_registered(&self, identity: &Identity) -> bool {
        self.repository.is_registered(identity)
    }

    /// Explicit initialization marker; `false` for unknown identities.
    pub fn is_initialized(&self, identity: &Identity) -> bool {
        matches!(self.repository.load(identity), Ok(Some(record)) if record.initialized)
    }

    /// Registered identities in first-registration order.
    pub fn list_participants(&self) -> Result<Vec<Identity>> {
        Ok(self.repository.identities()?)
    }

    pub fn participant_count(&self) -> Result<usize> {
        Ok(self.repository.len()?)
    }

    /// Handle of one encrypted field of a registered participant.
    pub fn encrypted_field(&self, identity: &Identity, field: Field) -> Result<CiphertextHandle> {
        let state = self.state(identity)?;
        Ok(self.backend.handle(state.field(field)))
    }

    /// Liveness handle and initialization flag.
    ///
    /// Unknown identities read as the zero handle and `false`, never an error.
    pub fn player_status(&self, identity: &Identity) -> Result<(CiphertextHandle, bool)> {
        Ok(match self.repository.load(identity)? {
            Some(record) => (self.backend.handle(&record.state.alive), record.initialized),
            None => (CiphertextHandle::default(), false),
        })
    }

    pub fn snapshot(&self, identity: &Identity) -> Result<ParticipantSnapshot> {
        let record = self
            .repository
            .load(identity)?
            .ok_or(EngineError::NotRegistered(*identity))?;
        Ok(ParticipantSnapshot::capture(
            &self.backend,
            *identity,
            record.initialized,
            &record.state,
        ))
    }

    /// Whether `principal` may decrypt `handle`.
    pub fn is_allowed(&self, handle: &CiphertextHandle, principal: &Principal) -> bool {
        self.acl.is_allowed(handle, principal)
    }

    /// Decrypts `owner`'s `field` on behalf of `requester`.
    ///
    /// Fails with [`RuntimeError::Unauthorized`] unless the current handle was
    /// granted to `requester`.
    pub fn user_decrypt(&self, requester: Identity, owner: &Identity, field: Field) -> Result<u32>
    where
        B: Decryptor,
    {
        let state = self.state(owner)?;
        let ciphertext = state.field(field);
        let handle = self.backend.handle(ciphertext);
        if !self.acl.is_allowed(&handle, &Principal::Account(requester)) {
            tracing::warn!(%requester, %owner, field = %field, "decryption denied");
            return Err(RuntimeError::Unauthorized { requester, handle });
        }
        Ok(self.backend.decrypt(ciphertext))
    }

    fn state(&self, identity: &Identity) -> Result<ParticipantState<B::Uint>> {
        self.repository
            .load(identity)?
            .map(|record| record.state)
            .ok_or_else(|| EngineError::NotRegistered(*identity).into())
    }

    fn lock_writer(&self) -> Result<std::sync::MutexGuard<'_, u64>> {
        self.sequence
            .lock()
            .map_err(|_| RuntimeError::LockPoisoned("runtime writer"))
    }

    fn insert_participant(
        &self,
        identity: Identity,
        state: &ParticipantState<B::Uint>,
    ) -> Result<bool> {
        if !self.repository.insert(identity, state.clone())? {
            return Ok(false);
        }
        self.grant(identity, state)?;
        let position = self.repository.len()?.saturating_sub(1);
        tracing::info!(%identity, position, "participant registered");
        self.events
            .publish(RuntimeEvent::ParticipantRegistered { identity, position });
        Ok(true)
    }

    fn grant(&self, owner: Identity, state: &ParticipantState<B::Uint>) -> Result<()> {
        self.acl.allow_all(
            state.handles(&self.backend),
            &[
                Principal::Account(owner),
                Principal::Contract(self.config.contract),
            ],
        )
    }
}

/// Builder for [`MirrorRuntime`].
pub struct RuntimeBuilder<B: FheBackend> {
    backend: B,
    config: RuntimeConfig,
    repository: Option<Box<dyn ParticipantRepository<B::Uint>>>,
}

impl<B> RuntimeBuilder<B>
where
    B: FheBackend,
    B::Uint: Send + Sync + 'static,
{
    fn new(backend: B) -> Self {
        Self {
            backend,
            config: RuntimeConfig::default(),
            repository: None,
        }
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Uses `repository` instead of a fresh in-memory registry.
    ///
    /// The runtime takes ownership: its writer lock is what serializes
    /// load, resolve and store, so a repository must never back two runtimes.
    pub fn repository<R>(mut self, repository: R) -> Self
    where
        R: ParticipantRepository<B::Uint> + 'static,
    {
        self.repository = Some(Box::new(repository));
        self
    }

    /// Validates the configuration and assembles the runtime.
    pub fn build(self) -> Result<MirrorRuntime<B>> {
        self.config.validate()?;
        let repository = self
            .repository
            .unwrap_or_else(|| Box::new(InMemoryParticipantRepo::new()));
        Ok(MirrorRuntime {
            events: EventBus::with_capacity(self.config.event_buffer_size),
            backend: self.backend,
            config: self.config,
            repository,
            acl: AccessList::new(),
            sequence: Mutex::new(0),
        })
    }
}
