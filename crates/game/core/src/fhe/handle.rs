use std::fmt;

/// Opaque 32-byte identifier of a ciphertext.
///
/// Handles are what the read interface hands out. They carry no information
/// about the plaintext; decrypting one requires the external decryption
/// protocol and an access grant.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CiphertextHandle(pub [u8; 32]);

impl CiphertextHandle {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for CiphertextHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for CiphertextHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Short form keeps traces readable.
        write!(f, "CiphertextHandle(0x{}..)", hex::encode(&self.0[..6]))
    }
}
