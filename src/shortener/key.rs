//! Short Key Module
//!
//! Deterministic derivation of fixed-length lookup keys from URLs.

use std::fmt;

use crate::shortener::KEY_LENGTH;

// == Short Key ==
/// A fixed-length key derived from a URL by hashing and truncation.
///
/// Keys are 6 lowercase hexadecimal characters. Derivation is deterministic:
/// equal inputs always produce equal keys, across restarts and processes.
///
/// Keys are not unique across distinct inputs. Two URLs whose digests share
/// the same leading characters collapse to one key, and the store resolves
/// the collision by letting the newer entry overwrite the older one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortKey(String);

impl ShortKey {
    // == Derive ==
    /// Derives the key for `input`.
    ///
    /// Computes the MD5 digest of the input bytes and keeps the first
    /// [`KEY_LENGTH`] characters of its hex encoding. The digest is used only
    /// as a well-distributed deterministic identifier, not as a security
    /// primitive, but swapping the algorithm changes every produced key.
    pub fn derive(input: &str) -> Self {
        let digest = md5::compute(input.as_bytes());
        let mut hex = format!("{:x}", digest);
        hex.truncate(KEY_LENGTH);
        Self(hex)
    }

    // == As Str ==
    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
