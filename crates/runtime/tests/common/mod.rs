#![allow(dead_code)]

use game_core::fhe::ClearBackend;
use game_core::{ActionKind, Field, Identity, InputContext, Roll};
use runtime::{MirrorRuntime, Receipt, RuntimeConfig};

pub const CONTRACT: Identity = Identity::new([0xcc; 20]);

pub fn player(byte: u8) -> Identity {
    Identity::new([byte; 20])
}

pub fn runtime() -> MirrorRuntime<ClearBackend> {
    runtime::logging::init();
    MirrorRuntime::builder(ClearBackend::new())
        .config(RuntimeConfig::default().with_contract(CONTRACT))
        .build()
        .unwrap()
}

pub fn context(caller: Identity) -> InputContext {
    InputContext::new(CONTRACT, caller)
}

pub fn submit(
    rt: &MirrorRuntime<ClearBackend>,
    who: Identity,
    action: ActionKind,
    roll: u32,
) -> runtime::Result<Receipt> {
    let input = rt
        .backend()
        .encrypt_input(&context(who), action, Roll::new(roll).unwrap());
    rt.submit_action(who, input)
}

/// Owner-side decryption of (score, last_action, last_outcome, alive).
pub fn decrypt_all(rt: &MirrorRuntime<ClearBackend>, who: Identity) -> (u32, u32, u32, u32) {
    let read = |field| rt.user_decrypt(who, &who, field).unwrap();
    (
        read(Field::Score),
        read(Field::LastAction),
        read(Field::LastOutcome),
        read(Field::Alive),
    )
}

