use crate::data::result_record::ResultRecord;
use crate::Result;
use std::sync::{Arc, Mutex, MutexGuard};

/// Every finished game, newest first, all players.
pub const HISTORY_KEY: &str = "aztec2048-history";

/// Best score per player, highest first.
pub const LEADERBOARD_KEY: &str = "aztec2048-leaderboard";

/// Key-value store of result sequences.
///
/// `read` never fails: a missing or unreadable document is an empty sequence.
pub trait RecordStore {
    fn read(&self, key: &str) -> Vec<ResultRecord>;

    fn write(&mut self, key: &str, records: &[ResultRecord]) -> Result<()>;
}

/// A store shared between sessions. One lock covers a whole read-modify-write.
pub type SharedStore = Arc<Mutex<dyn RecordStore + Send>>;

pub fn shared_store<S: RecordStore + Send + 'static>(store: S) -> SharedStore {
    Arc::new(Mutex::new(store))
}

/// Locks the store, recovering the guard if a previous holder panicked.
pub fn lock_store(store: &SharedStore) -> MutexGuard<'_, dyn RecordStore + Send + 'static> {
    store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Parses a stored document. Anything that is not a JSON array of records is
/// dropped with a warning and read as empty.
pub(crate) fn decode_records(key: &str, raw: Option<&str>) -> Vec<ResultRecord> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    if raw.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Vec<ResultRecord>>(raw) {
        Ok(records) => records,
        Err(e) => {
            log::warn!("Discarding malformed document under '{}': {}", key, e);
            Vec::new()
        }
    }
}

pub(crate) fn encode_records(records: &[ResultRecord]) -> Result<String> {
    Ok(serde_json::to_string(records)?)
}
