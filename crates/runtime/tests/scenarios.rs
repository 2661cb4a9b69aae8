//! End-to-end turn resolution through the runtime API.

mod common;

use common::{decrypt_all, player, runtime, submit};
use game_core::{ActionKind, Outcome};

#[test]
fn attack_success_on_first_action() {
    let rt = runtime();
    let alice = player(0xa1);

    let receipt = submit(&rt, alice, ActionKind::Attack, 70).unwrap();

    assert!(receipt.newly_registered);
    assert_eq!(receipt.sequence, 1);
    assert_eq!(decrypt_all(&rt, alice), (100, 1, Outcome::Success.code(), 1));
    assert!(rt.is_initialized(&alice));
}

#[test]
fn attack_fail_keeps_participant_alive() {
    let rt = runtime();
    let bob = player(0xb0);

    submit(&rt, bob, ActionKind::Attack, 10).unwrap();

    assert_eq!(decrypt_all(&rt, bob), (0, 1, Outcome::Fail.code(), 1));
}

#[test]
fn death_pins_outcome_but_records_later_actions() {
    let rt = runtime();
    let carol = player(0xc0);

    submit(&rt, carol, ActionKind::Attack, 55).unwrap();
    assert_eq!(decrypt_all(&rt, carol), (0, 1, Outcome::Death.code(), 0));

    let receipt = submit(&rt, carol, ActionKind::Scout, 15).unwrap();
    assert!(!receipt.newly_registered);
    assert_eq!(decrypt_all(&rt, carol), (0, 3, Outcome::Death.code(), 0));

    submit(&rt, carol, ActionKind::Attack, 90).unwrap();
    assert_eq!(decrypt_all(&rt, carol), (0, 1, Outcome::Death.code(), 0));
}

#[test]
fn defend_as_first_action_initializes() {
    let rt = runtime();
    let dave = player(0xd0);

    submit(&rt, dave, ActionKind::Defend, 42).unwrap();

    assert_eq!(decrypt_all(&rt, dave), (0, 2, Outcome::None.code(), 1));
    let (_, initialized) = rt.player_status(&dave).unwrap();
    assert!(initialized);
    assert_eq!(rt.list_participants().unwrap(), vec![dave]);
}

#[test]
fn score_accumulates_across_turns() {
    let rt = runtime();
    let erin = player(0xe0);

    for roll in [60, 99, 75] {
        submit(&rt, erin, ActionKind::Attack, roll).unwrap();
    }
    submit(&rt, erin, ActionKind::Scout, 0).unwrap();

    assert_eq!(decrypt_all(&rt, erin), (300, 3, Outcome::None.code(), 1));
}

#[test]
fn participants_are_resolved_independently() {
    let rt = runtime();
    let (alice, bob) = (player(1), player(2));

    submit(&rt, alice, ActionKind::Attack, 55).unwrap();
    submit(&rt, bob, ActionKind::Attack, 80).unwrap();

    assert_eq!(decrypt_all(&rt, alice), (0, 1, Outcome::Death.code(), 0));
    assert_eq!(decrypt_all(&rt, bob), (100, 1, Outcome::Success.code(), 1));
}

#[test]
fn sequence_numbers_count_accepted_submissions() {
    let rt = runtime();
    let alice = player(1);

    let first = submit(&rt, alice, ActionKind::Defend, 1).unwrap();
    let rejected = rt.submit_action(
        alice,
        rt.backend()
            .encrypt_input_raw(&common::context(alice), 4, 1),
    );
    let second = submit(&rt, alice, ActionKind::Defend, 1).unwrap();

    assert!(rejected.is_err());
    assert_eq!((first.sequence, second.sequence), (1, 2));
}

#[test]
fn receipt_snapshot_matches_stored_handles() {
    let rt = runtime();
    let alice = player(1);

    let receipt = submit(&rt, alice, ActionKind::Attack, 61).unwrap();

    assert_eq!(rt.snapshot(&alice).unwrap(), receipt.snapshot);
    assert_eq!(
        rt.player_status(&alice).unwrap(),
        (receipt.snapshot.alive, true)
    );
}
