/// Random roll in the closed interval `[0, 99]`.
///
/// Roll generation is external and trusted; this type only guarantees the
/// value handed to an encryptor is in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub struct Roll(u8);

impl Roll {
    pub const MIN: u32 = 0;
    pub const MAX: u32 = 99;

    pub const fn new(value: u32) -> Option<Self> {
        if value <= Self::MAX {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    pub const fn value(self) -> u32 {
        self.0 as u32
    }

    /// Returns true if `value` lies in `[MIN, MAX]`.
    pub const fn in_range(value: u32) -> bool {
        value <= Self::MAX
    }
}

/// Error for a roll value outside `[0, 99]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("roll {0} is outside [0, 99]")]
pub struct RollOutOfRange(pub u32);

impl TryFrom<u32> for Roll {
    type Error = RollOutOfRange;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(RollOutOfRange(value))
    }
}

impl From<Roll> for u32 {
    fn from(roll: Roll) -> Self {
        roll.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert_eq!(Roll::new(0).map(Roll::value), Some(0));
        assert_eq!(Roll::new(99).map(Roll::value), Some(99));
    }

    #[test]
    fn rejects_above_max() {
        assert_eq!(Roll::new(100), None);
        assert_eq!(Roll::try_from(250), Err(RollOutOfRange(250)));
    }
}
