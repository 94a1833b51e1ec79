//! Test salt sources — deterministic `SaltSource` implementations.

use dicefall_core::entropy::{SALT_LEN, SaltSource};
use dicefall_core::error::RollError;

/// A salt source that always returns the same salt. Suitable for tests that
/// do not depend on salt freshness.
#[derive(Debug, Clone, Copy)]
pub struct FixedSalt(pub [u8; SALT_LEN]);

impl SaltSource for FixedSalt {
    fn next_salt(&mut self) -> Result<[u8; SALT_LEN], RollError> {
        Ok(self.0)
    }
}

/// A salt source that returns salts from a predetermined sequence. Panics
/// if the sequence is exhausted. Used in tests that need specific,
/// repeatable salts.
#[derive(Debug)]
pub struct SequenceSalts {
    salts: Vec<[u8; SALT_LEN]>,
    index: usize,
}

impl SequenceSalts {
    /// Create a new `SequenceSalts` with the given salts.
    #[must_use]
    pub fn new(salts: Vec<[u8; SALT_LEN]>) -> Self {
        Self { salts, index: 0 }
    }
}

impl SaltSource for SequenceSalts {
    fn next_salt(&mut self) -> Result<[u8; SALT_LEN], RollError> {
        let salt = self.salts[self.index];
        self.index += 1;
        Ok(salt)
    }
}

/// A salt source that always fails, for exercising the internal-error path.
#[derive(Debug, Clone, Copy)]
pub struct FailingSaltSource;

impl SaltSource for FailingSaltSource {
    fn next_salt(&mut self) -> Result<[u8; SALT_LEN], RollError> {
        Err(RollError::Entropy("simulated entropy failure".to_string()))
    }
}
