//! Dicefall API — HTTP layer for the dice roll service.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
