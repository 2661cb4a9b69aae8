//! Plaintext action and outcome codes.
//!
//! These are the client-side vocabulary: encryptors use them to build inputs
//! and viewers use them to label decrypted values. The engine itself only
//! ever sees the codes as ciphertext.
mod kind;
mod roll;

pub use kind::{ActionKind, Outcome};
pub use roll::{Roll, RollOutOfRange};
