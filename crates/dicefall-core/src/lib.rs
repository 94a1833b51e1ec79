//! Dicefall Core — domain logic for the dice roll service.
//!
//! This crate contains everything below the HTTP layer: roll generation,
//! the bounded in-memory roll log, and the admin token check. It contains
//! no networking code.

pub mod auth;
pub mod clock;
pub mod entropy;
pub mod error;
pub mod roll;
pub mod store;
