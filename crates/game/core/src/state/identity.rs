use std::fmt;
use std::str::FromStr;

/// Stable external key addressing a participant (wallet-style address).
///
/// Displayed and parsed as `0x`-prefixed lowercase hex. The same shape is used
/// for the contract context that ciphertexts and proofs are bound to.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity(pub [u8; Identity::LEN]);

impl Identity {
    /// Byte length of an identity.
    pub const LEN: usize = 20;

    /// All-zero identity.
    pub const ZERO: Self = Self([0; Self::LEN]);

    pub const fn new(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity({self})")
    }
}

/// Errors raised when parsing an [`Identity`] from text.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ParseIdentityError {
    #[error("identity must be {expected} hex bytes, got {actual}")]
    Length { expected: usize, actual: usize },

    #[error("identity is not valid hex: {0}")]
    Hex(#[from] hex::FromHexError),
}

impl FromStr for Identity {
    type Err = ParseIdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        let bytes = hex::decode(digits)?;
        let bytes: [u8; Self::LEN] =
            bytes
                .as_slice()
                .try_into()
                .map_err(|_| ParseIdentityError::Length {
                    expected: Self::LEN,
                    actual: bytes.len(),
                })?;
        Ok(Self(bytes))
    }
}

// Identities travel as hex strings so config files and event logs stay readable.
#[cfg(feature = "serde")]
impl serde::Serialize for Identity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Identity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct IdentityVisitor;

        impl serde::de::Visitor<'_> for IdentityVisitor {
            type Value = Identity;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a 0x-prefixed 20 byte hex string")
            }

            fn visit_str<E>(self, value: &str) -> Result<Identity, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(IdentityVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_prefixed_hex() {
        let mut bytes = [0u8; Identity::LEN];
        bytes[0] = 0xab;
        bytes[19] = 0x01;
        let identity = Identity::new(bytes);

        assert_eq!(
            identity.to_string(),
            "0xab00000000000000000000000000000000000001"
        );
    }

    #[test]
    fn parses_with_and_without_prefix() {
        let text = "0x00000000000000000000000000000000000000ff";
        let parsed: Identity = text.parse().unwrap();
        assert_eq!(parsed.0[19], 0xff);

        let bare: Identity = text.trim_start_matches("0x").parse().unwrap();
        assert_eq!(parsed, bare);
    }

    #[test]
    fn rejects_wrong_length() {
        let result = "0xdeadbeef".parse::<Identity>();
        assert_eq!(
            result,
            Err(ParseIdentityError::Length {
                expected: 20,
                actual: 4
            })
        );
    }

    #[test]
    fn rejects_non_hex() {
        let result = "0xzz00000000000000000000000000000000000000".parse::<Identity>();
        assert!(matches!(result, Err(ParseIdentityError::Hex(_))));
    }

    #[test]
    fn hex_errors_compare_by_value() {
        let odd = "0x0".parse::<Identity>();
        assert_eq!(
            odd,
            Err(ParseIdentityError::Hex(hex::FromHexError::OddLength))
        );
        assert_ne!(
            odd,
            Err(ParseIdentityError::Length {
                expected: 20,
                actual: 0
            })
        );
    }
}
