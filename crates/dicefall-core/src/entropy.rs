//! Salt source abstraction.
//!
//! In production, salts come from the OS CSPRNG — the unpredictability of a
//! roll to the client requesting it rests entirely on this. In tests, a
//! fixed or scripted implementation is injected.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::error::RollError;

/// Number of random bytes mixed into each roll's digest.
pub const SALT_LEN: usize = 8;

/// Abstraction over the random salt source.
pub trait SaltSource: Send {
    /// Returns a fresh salt.
    ///
    /// # Errors
    ///
    /// Returns [`RollError::Entropy`] if the underlying random source fails.
    fn next_salt(&mut self) -> Result<[u8; SALT_LEN], RollError>;
}

/// Production salt source backed by the operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSaltSource;

impl SaltSource for OsSaltSource {
    fn next_salt(&mut self) -> Result<[u8; SALT_LEN], RollError> {
        let mut salt = [0u8; SALT_LEN];
        OsRng
            .try_fill_bytes(&mut salt)
            .map_err(|e| RollError::Entropy(e.to_string()))?;
        Ok(salt)
    }
}
