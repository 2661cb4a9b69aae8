//! Oblivious state transition.
//!
//! Every step below is a capability call. Nothing here inspects a ciphertext,
//! so the sequence of calls is the same for every action, roll and liveness.

use crate::action::{ActionKind, Outcome};
use crate::config::RulesConfig;
use crate::fhe::FheBackend;
use crate::state::{ALIVE, DEAD, ParticipantState};

/// Public constants encrypted fresh for one resolution.
struct Constants<U> {
    zero: U,
    alive: U,
    dead: U,
    reward: U,
    fail_below: U,
    death_below: U,
    attack: U,
    defend: U,
    scout: U,
    none: U,
    fail: U,
    death: U,
    success: U,
}

impl<U> Constants<U> {
    fn encrypt<B>(backend: &B, rules: &RulesConfig) -> Self
    where
        B: FheBackend<Uint = U>,
    {
        Self {
            zero: backend.trivial(0),
            alive: backend.trivial(ALIVE),
            dead: backend.trivial(DEAD),
            reward: backend.trivial(rules.success_reward),
            fail_below: backend.trivial(rules.fail_below),
            death_below: backend.trivial(rules.death_below),
            attack: backend.trivial(ActionKind::Attack.code()),
            defend: backend.trivial(ActionKind::Defend.code()),
            scout: backend.trivial(ActionKind::Scout.code()),
            none: backend.trivial(Outcome::None.code()),
            fail: backend.trivial(Outcome::Fail.code()),
            death: backend.trivial(Outcome::Death.code()),
            success: backend.trivial(Outcome::Success.code()),
        }
    }
}

/// Encrypted roll bands. The success band is the complement of both.
struct Bands<B: FheBackend> {
    fail: B::Bool,
    death: B::Bool,
}

fn classify_roll<B: FheBackend>(
    backend: &B,
    constants: &Constants<B::Uint>,
    roll: &B::Uint,
) -> Bands<B> {
    let fail = backend.lt(roll, &constants.fail_below);
    let below_success = backend.lt(roll, &constants.death_below);
    let death = backend.and(&backend.not(&fail), &below_success);
    Bands { fail, death }
}

/// Computes the next state from verified inputs.
pub(super) fn resolve_oblivious<B: FheBackend>(
    backend: &B,
    rules: &RulesConfig,
    current: &ParticipantState<B::Uint>,
    action: &B::Uint,
    roll: &B::Uint,
) -> ParticipantState<B::Uint> {
    let k = Constants::encrypt(backend, rules);

    let is_alive = backend.eq(&current.alive, &k.alive);

    let is_attack = backend.eq(action, &k.attack);
    let is_defend = backend.eq(action, &k.defend);
    let is_scout = backend.eq(action, &k.scout);

    let bands = classify_roll(backend, &k, roll);
    let attack_outcome = backend.select(
        &bands.fail,
        &k.fail,
        &backend.select(&bands.death, &k.death, &k.success),
    );

    // Outcome table, one row per action. Defend and scout never resolve.
    let passive_outcome = backend.select(
        &is_defend,
        &k.none,
        &backend.select(&is_scout, &k.none, &k.none),
    );
    let candidate = backend.select(&is_attack, &attack_outcome, &passive_outcome);

    let attack_succeeded = backend.and(&is_attack, &backend.eq(&candidate, &k.success));
    let reward = backend.select(&attack_succeeded, &k.reward, &k.zero);

    // Dead participants and sums that wrap past u32::MAX keep the old score.
    let sum = backend.add(&current.score, &reward);
    let wrapped = backend.lt(&sum, &current.score);
    let keep_score = backend.or(&wrapped, &backend.not(&is_alive));
    let score = backend.select(&keep_score, &current.score, &sum);

    let killed = backend.and(&is_attack, &backend.eq(&candidate, &k.death));
    let stays_alive = backend.and(&is_alive, &backend.not(&killed));
    let alive = backend.select(&stays_alive, &k.alive, &k.dead);

    let last_outcome = backend.select(&is_alive, &candidate, &current.last_outcome);

    ParticipantState {
        score,
        last_action: action.clone(),
        last_outcome,
        alive,
    }
}
