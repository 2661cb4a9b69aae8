//! Runtime for Mirror Protocol's confidential turn resolution.
//!
//! This crate wires the oblivious [`game_core::ResolutionEngine`] to a
//! participant registry, a decryption access list, and an event bus.
//! Consumers build a [`MirrorRuntime`] around an encrypted-arithmetic backend,
//! submit encrypted actions, and read back ciphertext handles.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the submission/read API and its builder
//! - [`api`] exposes the error types downstream clients interact with
//! - [`repository`] provides the participant registry
//! - [`acl`] tracks who may decrypt which handle
//! - [`events`] broadcasts registration and resolution notifications
//! - [`config`], [`snapshot`] and [`logging`] cover configuration, transport
//!   encoding and tracing setup
pub mod acl;
pub mod api;
pub mod config;
pub mod events;
pub mod logging;
pub mod repository;
pub mod runtime;
pub mod snapshot;

pub use acl::{AccessList, Principal};
pub use api::{Result, RuntimeError};
pub use config::RuntimeConfig;
pub use events::{EventBus, RuntimeEvent};
pub use repository::{
    InMemoryParticipantRepo, ParticipantRecord, ParticipantRepository, RepositoryError,
};
pub use runtime::{MirrorRuntime, Receipt, RuntimeBuilder};
pub use snapshot::ParticipantSnapshot;
