use crate::state::Identity;

/// Context an input must be bound to: the contract instance and the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputContext {
    pub contract: Identity,
    pub caller: Identity,
}

impl InputContext {
    pub const fn new(contract: Identity, caller: Identity) -> Self {
        Self { contract, caller }
    }
}

/// Opaque attestation produced alongside client-side encryption.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputProof(pub Vec<u8>);

impl InputProof {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// One turn's submission: encrypted action code, encrypted roll, and proof.
#[derive(Clone, Debug)]
pub struct EncryptedInput<C> {
    pub action: C,
    pub roll: C,
    pub proof: InputProof,
}

impl<C> EncryptedInput<C> {
    pub fn new(action: C, roll: C, proof: InputProof) -> Self {
        Self {
            action,
            roll,
            proof,
        }
    }
}
