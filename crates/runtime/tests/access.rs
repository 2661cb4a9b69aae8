//! Decryption gateway and access grants.

mod common;

use game_core::{ActionKind, Field};
use runtime::{Principal, RuntimeError};
use strum::IntoEnumIterator;

use common::{CONTRACT, player, runtime, submit};

#[test]
fn owner_can_decrypt_every_field() {
    let rt = runtime();
    let alice = player(1);
    submit(&rt, alice, ActionKind::Attack, 70).unwrap();

    for field in Field::iter() {
        assert!(rt.user_decrypt(alice, &alice, field).is_ok(), "{field}");
    }
}

#[test]
fn other_participants_cannot_decrypt() {
    let rt = runtime();
    let (alice, bob) = (player(1), player(2));
    submit(&rt, alice, ActionKind::Attack, 70).unwrap();
    submit(&rt, bob, ActionKind::Defend, 70).unwrap();

    for field in Field::iter() {
        let handle = rt.encrypted_field(&alice, field).unwrap();
        assert!(matches!(
            rt.user_decrypt(bob, &alice, field),
            Err(RuntimeError::Unauthorized { requester, handle: denied })
                if requester == bob && denied == handle
        ));
    }
}

#[test]
fn contract_is_granted_every_stored_handle() {
    let rt = runtime();
    let alice = player(1);
    rt.register(alice).unwrap();

    let registered = rt.snapshot(&alice).unwrap();
    submit(&rt, alice, ActionKind::Scout, 9).unwrap();
    let resolved = rt.snapshot(&alice).unwrap();

    for snapshot in [registered, resolved] {
        for field in Field::iter() {
            let handle = snapshot.handle(field);
            assert!(rt.is_allowed(&handle, &Principal::Contract(CONTRACT)));
            assert!(rt.is_allowed(&handle, &Principal::Account(alice)));
            assert!(!rt.is_allowed(&handle, &Principal::Account(CONTRACT)));
        }
    }
}

#[test]
fn each_resolution_produces_fresh_handles() {
    let rt = runtime();
    let alice = player(1);

    let first = submit(&rt, alice, ActionKind::Defend, 1).unwrap().snapshot;
    let second = submit(&rt, alice, ActionKind::Defend, 1).unwrap().snapshot;

    for field in Field::iter() {
        assert_ne!(first.handle(field), second.handle(field), "{field}");
    }
}
