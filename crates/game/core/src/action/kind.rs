/// Action a participant may submit.
///
/// Only the client ever sees this value in the clear. The engine receives
/// [`ActionKind::code`] encrypted and compares against the codes obliviously.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    Attack,
    Defend,
    Scout,
}

impl ActionKind {
    /// Plaintext code meaning "no action recorded yet".
    pub const NONE_CODE: u32 = 0;

    /// Encoded form submitted to the engine.
    pub const fn code(self) -> u32 {
        match self {
            Self::Attack => 1,
            Self::Defend => 2,
            Self::Scout => 3,
        }
    }

    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::Attack),
            2 => Some(Self::Defend),
            3 => Some(Self::Scout),
            _ => None,
        }
    }
}

impl TryFrom<u32> for ActionKind {
    type Error = u32;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(code)
    }
}

/// Result of resolving a single turn.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// No attack was resolved (initial state, Defend, Scout).
    #[default]
    None,
    /// Attack landed in the failure band.
    Fail,
    /// Attack landed in the lethal band; the participant is now dead.
    Death,
    /// Attack succeeded and awarded the reward.
    Success,
}

impl Outcome {
    pub const fn code(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Fail => 1,
            Self::Death => 2,
            Self::Success => 3,
        }
    }

    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            1 => Some(Self::Fail),
            2 => Some(Self::Death),
            3 => Some(Self::Success),
            _ => None,
        }
    }
}

impl TryFrom<u32> for Outcome {
    type Error = u32;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(code)
    }
}
