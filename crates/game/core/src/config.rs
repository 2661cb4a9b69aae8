use crate::action::Roll;

/// Public resolution rules: roll band thresholds and the success reward.
///
/// These are not secret. They are trivially encrypted each turn and compared
/// against the encrypted roll.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RulesConfig {
    /// Rolls strictly below this value fail.
    pub fail_below: u32,
    /// Rolls in `[fail_below, death_below)` are lethal; the rest succeed.
    pub death_below: u32,
    /// Score added on a successful attack.
    pub success_reward: u32,
}

impl RulesConfig {
    pub const DEFAULT_FAIL_BELOW: u32 = 50;
    pub const DEFAULT_DEATH_BELOW: u32 = 60;
    pub const DEFAULT_SUCCESS_REWARD: u32 = 100;

    pub const fn new() -> Self {
        Self {
            fail_below: Self::DEFAULT_FAIL_BELOW,
            death_below: Self::DEFAULT_DEATH_BELOW,
            success_reward: Self::DEFAULT_SUCCESS_REWARD,
        }
    }

    pub const fn with_thresholds(mut self, fail_below: u32, death_below: u32) -> Self {
        self.fail_below = fail_below;
        self.death_below = death_below;
        self
    }

    pub const fn with_success_reward(mut self, success_reward: u32) -> Self {
        self.success_reward = success_reward;
        self
    }

    /// Checks that the bands partition `[0, 99]` in FAIL, DEATH, SUCCESS order.
    pub fn validate(&self) -> Result<(), RulesConfigError> {
        if self.fail_below > self.death_below {
            return Err(RulesConfigError::BandsOutOfOrder {
                fail_below: self.fail_below,
                death_below: self.death_below,
            });
        }
        if self.death_below > Roll::MAX + 1 {
            return Err(RulesConfigError::ThresholdAboveRollRange {
                threshold: self.death_below,
            });
        }
        Ok(())
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Invalid [`RulesConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RulesConfigError {
    #[error("fail threshold {fail_below} is above death threshold {death_below}")]
    BandsOutOfOrder { fail_below: u32, death_below: u32 },

    #[error("threshold {threshold} is beyond the roll range [0, 99]")]
    ThresholdAboveRollRange { threshold: u32 },
}
