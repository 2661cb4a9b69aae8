//! Plaintext-equivalent backend for tests and local development.
//!
//! Ciphertexts carry their plaintext next to a random-looking handle, and
//! every capability call is appended to an operation trace so tests can
//! compare the execution shape of different inputs.
//!
//! ⚠️ Provides no confidentiality whatsoever.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use sha2::{Digest, Sha256};

use super::{
    CiphertextHandle, Decryptor, EncryptedInput, FheBackend, FheOp, InputContext, InputProof,
    InputVerifier,
};
use crate::action::{ActionKind, Roll};
use crate::engine::EngineError;

const HANDLE_DOMAIN: &[u8] = b"mirror/clear/handle/v1";
const PROOF_DOMAIN: &[u8] = b"mirror/clear/input-proof/v1";
const PROOF_LEN: usize = 32 + 2;

/// Encrypted `u32` of the clear backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClearUint {
    value: u32,
    handle: CiphertextHandle,
}

impl ClearUint {
    pub fn handle(&self) -> CiphertextHandle {
        self.handle
    }
}

/// Encrypted boolean of the clear backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClearBool {
    value: bool,
}

/// Plaintext-equivalent [`FheBackend`] with operation tracing.
#[derive(Debug, Default)]
pub struct ClearBackend {
    next_handle: AtomicU64,
    trace: Mutex<Vec<FheOp>>,
}

impl ClearBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Client-side encryption of an arbitrary value. Not traced.
    pub fn encrypt(&self, value: u32) -> ClearUint {
        ClearUint {
            value,
            handle: self.fresh_handle(),
        }
    }

    /// Builds a submission for `context` from typed, in-domain values.
    pub fn encrypt_input(
        &self,
        context: &InputContext,
        action: ActionKind,
        roll: Roll,
    ) -> EncryptedInput<ClearUint> {
        self.encrypt_input_raw(context, action.code(), roll.value())
    }

    /// Builds a submission from raw codes, as a misbehaving client could.
    ///
    /// The proof honestly attests whether each plaintext is in its domain, the
    /// way a proof of knowledge over the plaintext would.
    pub fn encrypt_input_raw(
        &self,
        context: &InputContext,
        action: u32,
        roll: u32,
    ) -> EncryptedInput<ClearUint> {
        let action = self.encrypt(action);
        let roll = self.encrypt(roll);
        let attestation = [
            u8::from(ActionKind::from_code(action.value).is_some()),
            u8::from(Roll::in_range(roll.value)),
        ];

        let mut proof = proof_digest(context, &action.handle, &roll.handle, attestation).to_vec();
        proof.extend_from_slice(&attestation);

        EncryptedInput::new(action, roll, InputProof(proof))
    }

    /// Drains and returns the operations recorded since the last call.
    pub fn take_trace(&self) -> Vec<FheOp> {
        let mut trace = self.trace.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *trace)
    }

    fn record(&self, op: FheOp) {
        self.trace
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(op);
    }

    fn fresh_handle(&self) -> CiphertextHandle {
        let counter = self.next_handle.fetch_add(1, Ordering::Relaxed);
        let digest = Sha256::new()
            .chain_update(HANDLE_DOMAIN)
            .chain_update(counter.to_le_bytes())
            .finalize();
        CiphertextHandle(digest.into())
    }

    fn output(&self, op: FheOp, value: u32) -> ClearUint {
        self.record(op);
        ClearUint {
            value,
            handle: self.fresh_handle(),
        }
    }

    fn output_bool(&self, op: FheOp, value: bool) -> ClearBool {
        self.record(op);
        ClearBool { value }
    }
}

fn proof_digest(
    context: &InputContext,
    action: &CiphertextHandle,
    roll: &CiphertextHandle,
    attestation: [u8; 2],
) -> [u8; 32] {
    Sha256::new()
        .chain_update(PROOF_DOMAIN)
        .chain_update(context.contract.as_bytes())
        .chain_update(context.caller.as_bytes())
        .chain_update(action.as_bytes())
        .chain_update(roll.as_bytes())
        .chain_update(attestation)
        .finalize()
        .into()
}

impl FheBackend for ClearBackend {
    type Uint = ClearUint;
    type Bool = ClearBool;

    fn trivial(&self, value: u32) -> ClearUint {
        self.output(FheOp::Trivial, value)
    }

    fn add(&self, lhs: &ClearUint, rhs: &ClearUint) -> ClearUint {
        self.output(FheOp::Add, lhs.value.wrapping_add(rhs.value))
    }

    fn eq(&self, lhs: &ClearUint, rhs: &ClearUint) -> ClearBool {
        self.output_bool(FheOp::Eq, lhs.value == rhs.value)
    }

    fn lt(&self, lhs: &ClearUint, rhs: &ClearUint) -> ClearBool {
        self.output_bool(FheOp::Lt, lhs.value < rhs.value)
    }

    fn and(&self, lhs: &ClearBool, rhs: &ClearBool) -> ClearBool {
        self.output_bool(FheOp::And, lhs.value & rhs.value)
    }

    fn or(&self, lhs: &ClearBool, rhs: &ClearBool) -> ClearBool {
        self.output_bool(FheOp::Or, lhs.value | rhs.value)
    }

    fn not(&self, value: &ClearBool) -> ClearBool {
        self.output_bool(FheOp::Not, !value.value)
    }

    fn select(&self, condition: &ClearBool, if_true: &ClearUint, if_false: &ClearUint) -> ClearUint {
        // Branch-free mux, mirroring how a real backend evaluates it.
        let mask = u32::from(condition.value).wrapping_neg();
        self.output(
            FheOp::Select,
            (if_true.value & mask) | (if_false.value & !mask),
        )
    }

    fn handle(&self, value: &ClearUint) -> CiphertextHandle {
        value.handle
    }
}

impl InputVerifier for ClearBackend {
    fn verify_input(
        &self,
        context: &InputContext,
        input: &EncryptedInput<ClearUint>,
    ) -> Result<(), EngineError> {
        let bytes = input.proof.as_bytes();
        if bytes.len() != PROOF_LEN {
            return Err(EngineError::ProofInvalid);
        }
        let attestation = [bytes[32], bytes[33]];
        let expected = proof_digest(
            context,
            &input.action.handle,
            &input.roll.handle,
            attestation,
        );
        if bytes[..32] != expected {
            return Err(EngineError::ProofInvalid);
        }

        if attestation[0] != 1 {
            return Err(EngineError::InvalidAction);
        }
        if attestation[1] != 1 {
            return Err(EngineError::InvalidRoll);
        }
        Ok(())
    }
}

impl Decryptor for ClearBackend {
    fn decrypt(&self, value: &ClearUint) -> u32 {
        value.value
    }
}
