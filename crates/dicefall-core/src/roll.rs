//! Roll generation.
//!
//! A roll is derived from a SHA-256 digest over the client identifier, the
//! current unix timestamp, and a fresh random salt. The digest-to-number
//! mapping is a pure function; all unpredictability comes from the salt.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::clock::Clock;
use crate::entropy::SaltSource;
use crate::error::RollError;

/// A single die outcome, immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRecord {
    /// The outcome, always in `[1, 6]`.
    pub number: u8,
    /// Unix timestamp (seconds) captured when the roll was generated.
    pub ts: i64,
    /// Hex-encoded random salt mixed into the digest.
    pub salt: String,
}

/// Maps a SHA-256 digest to a die face: first four bytes as a big-endian
/// `u32`, modulo 6, plus one.
fn number_from_digest(digest: &[u8]) -> u8 {
    let v = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
    // v % 6 < 6, so the cast is lossless.
    #[allow(clippy::cast_possible_truncation)]
    let face = (v % 6) as u8;
    face + 1
}

/// Generates one roll for `client_id`.
///
/// Captures the current time from `clock`, draws a fresh salt from `salts`,
/// and hashes `client_id`, the decimal timestamp, and the hex salt — three
/// separate updates, in that order.
///
/// # Errors
///
/// Returns [`RollError::Entropy`] if the salt source fails; no other
/// failure mode exists.
pub fn generate_roll(
    client_id: &str,
    clock: &dyn Clock,
    salts: &mut dyn SaltSource,
) -> Result<RollRecord, RollError> {
    let ts = clock.now().timestamp();
    let salt = hex::encode(salts.next_salt()?);

    let mut hasher = Sha256::new();
    hasher.update(client_id.as_bytes());
    hasher.update(ts.to_string().as_bytes());
    hasher.update(salt.as_bytes());
    let digest = hasher.finalize();

    Ok(RollRecord {
        number: number_from_digest(&digest),
        ts,
        salt,
    })
}

// Tests for this module live in `tests/roll.rs`: they use
// `dicefall-test-support`, whose cyclic dev-dependency on this crate would
// compile the library twice if used from a unit test module.
