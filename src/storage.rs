use crate::config::TRANSACTION_COUNT_KEY;
use crate::gateway::CountCache;
use gloo::storage::{LocalStorage, Storage};
use log::{debug, warn};

/// Last known transaction count kept in `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalCountCache;

impl CountCache for LocalCountCache {
    fn load(&self) -> Option<u64> {
        match LocalStorage::get::<u64>(TRANSACTION_COUNT_KEY) {
            Ok(count) => Some(count),
            Err(e) => {
                debug!("No cached transaction count: {}", e);
                None
            }
        }
    }

    fn save(&self, count: u64) {
        if let Err(e) = LocalStorage::set(TRANSACTION_COUNT_KEY, count) {
            warn!("Failed to cache transaction count {}: {}", count, e);
        }
    }
}
