//! Participant registry storage.
//!
//! [`ParticipantRepository`] abstracts the append-only, insertion-ordered
//! registry; [`InMemoryParticipantRepo`] is the arena-backed implementation
//! used by the runtime by default.

mod error;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use memory::InMemoryParticipantRepo;
pub use traits::{ParticipantRecord, ParticipantRepository};
