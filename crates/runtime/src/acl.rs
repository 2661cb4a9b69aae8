//! Decryption access list.
//!
//! Grants are keyed by ciphertext handle. A handle is only ever decryptable by
//! the principals it was explicitly granted to.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use game_core::{CiphertextHandle, Identity};

use crate::api::{Result, RuntimeError};

/// Who may decrypt a handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Principal {
    /// A participant account.
    Account(Identity),
    /// The game contract itself.
    Contract(Identity),
}

#[derive(Default)]
pub struct AccessList {
    grants: RwLock<HashMap<CiphertextHandle, HashSet<Principal>>>,
}

impl AccessList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow(&self, handle: CiphertextHandle, principal: Principal) -> Result<()> {
        let mut grants = self
            .grants
            .write()
            .map_err(|_| RuntimeError::LockPoisoned("access list"))?;
        grants.entry(handle).or_default().insert(principal);
        Ok(())
    }

    /// Grants every handle in `handles` to each of `principals`.
    pub fn allow_all(
        &self,
        handles: impl IntoIterator<Item = CiphertextHandle>,
        principals: &[Principal],
    ) -> Result<()> {
        let mut grants = self
            .grants
            .write()
            .map_err(|_| RuntimeError::LockPoisoned("access list"))?;
        for handle in handles {
            grants
                .entry(handle)
                .or_default()
                .extend(principals.iter().copied());
        }
        Ok(())
    }

    /// Number of handles with at least one grant.
    pub fn len(&self) -> Result<usize> {
        let grants = self
            .grants
            .read()
            .map_err(|_| RuntimeError::LockPoisoned("access list"))?;
        Ok(grants.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Whether `principal` was granted `handle`.
    ///
    /// Fails closed: a poisoned lock denies instead of erroring, unlike the
    /// mutating methods which report [`RuntimeError::LockPoisoned`].
    pub fn is_allowed(&self, handle: &CiphertextHandle, principal: &Principal) -> bool {
        self.grants
            .read()
            .map(|grants| grants.get(handle).is_some_and(|set| set.contains(principal)))
            .unwrap_or(false)
    }
}
