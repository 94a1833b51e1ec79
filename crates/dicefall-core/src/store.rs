//! Bounded in-memory roll log.
//!
//! One process-wide store maps client identifiers to their most recent
//! rolls, capped per client. Entirely volatile: a process restart loses
//! all data.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use crate::roll::RollRecord;

/// Maximum number of retained rolls per client; the oldest is evicted first.
pub const MAX_ROLLS_PER_CLIENT: usize = 1000;

/// Process-wide mapping from client identifier to its bounded roll log.
///
/// Mutated only by the roll-handling path, read only by the admin
/// inspection path. The whole lookup-or-create / append / evict sequence
/// runs under a single lock acquisition so concurrent rolls for the same
/// client cannot lose updates or miscount an eviction.
#[derive(Debug, Default)]
pub struct RollLogStore {
    logs: Mutex<HashMap<String, VecDeque<RollRecord>>>,
}

impl RollLogStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `record` to the log for `client_id`, creating the log on
    /// first use and evicting the oldest entry once the cap is exceeded.
    ///
    /// At most one record is evicted per append, so the log length never
    /// observably exceeds [`MAX_ROLLS_PER_CLIENT`] after this returns.
    pub fn record(&self, client_id: &str, record: RollRecord) {
        let mut logs = self.lock();
        let log = logs.entry(client_id.to_owned()).or_default();
        log.push_back(record);
        if log.len() > MAX_ROLLS_PER_CLIENT {
            log.pop_front();
        }
    }

    /// Returns a full copy of the store, each client's rolls in
    /// chronological order. Read-only.
    #[must_use]
    pub fn snapshot(&self) -> HashMap<String, Vec<RollRecord>> {
        self.lock()
            .iter()
            .map(|(client, log)| (client.clone(), log.iter().cloned().collect()))
            .collect()
    }

    /// Number of rolls currently retained for `client_id`.
    #[must_use]
    pub fn len_for(&self, client_id: &str) -> usize {
        self.lock().get(client_id).map_or(0, VecDeque::len)
    }

    // Every critical section is a single push/pop or a read, so the map is
    // consistent at any panic point; recover from poisoning instead of
    // failing all later requests.
    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, VecDeque<RollRecord>>> {
        self.logs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
