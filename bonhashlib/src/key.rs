use std::fmt;

use thiserror::Error;

use crate::constants::KEY_SIZE;

#[derive(Debug, Error)]
pub enum KeyError {
    #[error("Key is not exactly 42 bytes")]
    InvalidSize,
}

/// A type representing the secret key. The key must be exactly 42 bytes; the
/// index derivations in the scanner reduce modulo that length, so a key of any
/// other size would silently change the output instead of failing, which is
/// why the check lives at construction time.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct HashKey {
    data: [u8; KEY_SIZE],
}

impl HashKey {
    /// Create instance from a byte slice containing the key.
    /// [`KeyError::InvalidSize`] is returned if the slice is not 42 bytes.
    pub fn from_slice(data: &[u8]) -> Result<Self, KeyError> {
        Ok(Self {
            data: data.try_into().map_err(|_| KeyError::InvalidSize)?,
        })
    }

    /// Get byte slice containing the key. The slice is guaranteed to always
    /// be 42 bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for HashKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Keep the raw key out of debug logs
        f.debug_struct("HashKey").finish_non_exhaustive()
    }
}
