//! Shared test mocks and utilities for the dicefall service.

mod clock;
mod entropy;

pub use clock::FixedClock;
pub use entropy::{FailingSaltSource, FixedSalt, SequenceSalts};
