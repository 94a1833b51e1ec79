//! Shared application state.

use std::sync::{Arc, Mutex};

use dicefall_core::clock::Clock;
use dicefall_core::entropy::SaltSource;
use dicefall_core::store::RollLogStore;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The process-wide roll log.
    pub store: Arc<RollLogStore>,
    /// Time source for roll timestamps.
    pub clock: Arc<dyn Clock + Send + Sync>,
    /// Random salt source for roll digests.
    pub salts: Arc<Mutex<dyn SaltSource + Send>>,
    /// Whether rolls are recorded in the store.
    pub store_rolls: bool,
    /// Configured admin token; `None` fails closed.
    pub admin_token: Option<String>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        store: Arc<RollLogStore>,
        clock: Arc<dyn Clock + Send + Sync>,
        salts: Arc<Mutex<dyn SaltSource + Send>>,
        store_rolls: bool,
        admin_token: Option<String>,
    ) -> Self {
        Self {
            store,
            clock,
            salts,
            store_rolls,
            admin_token,
        }
    }
}
