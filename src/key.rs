//! Secret signing keys.

use std::fmt;

use subtle::ConstantTimeEq;

/// A secret key for signing and verifying tokens.
///
/// Held in memory for the signer's lifetime, never embedded in tokens and
/// never printed: `Debug` output is redacted. Comparison is constant-time.
#[derive(Clone)]
pub struct SigningKey {
    key: Box<[u8]>,
}

impl SigningKey {
    /// Wraps caller-supplied key material.
    pub fn new(key: impl Into<Box<[u8]>>) -> Self {
        Self { key: key.into() }
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.key
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey").finish_non_exhaustive()
    }
}

impl PartialEq for SigningKey {
    fn eq(&self, other: &Self) -> bool {
        self.key.ct_eq(&other.key).into()
    }
}
impl Eq for SigningKey {}

impl From<&[u8]> for SigningKey {
    fn from(key: &[u8]) -> Self {
        Self::new(key)
    }
}

impl From<Vec<u8>> for SigningKey {
    fn from(key: Vec<u8>) -> Self {
        Self::new(key)
    }
}

impl From<&str> for SigningKey {
    fn from(key: &str) -> Self {
        Self::new(key.as_bytes())
    }
}
