use crate::data::history::prepend_to_history;
use crate::data::leaderboard::submit_to_leaderboard;
use crate::data::record_store::{RecordStore, HISTORY_KEY, LEADERBOARD_KEY};
use crate::data::result_record::ResultRecord;
use crate::Result;

/// Appends a finished game to the history and offers it to the leaderboard.
///
/// Both documents are read and rewritten through the same `store` borrow, so
/// a caller holding the store lock gets the whole update atomically.
pub fn record_result(store: &mut dyn RecordStore, record: &ResultRecord) -> Result<()> {
    let history = prepend_to_history(store.read(HISTORY_KEY), record.clone());
    store.write(HISTORY_KEY, &history)?;

    let board = submit_to_leaderboard(store.read(LEADERBOARD_KEY), record.clone());
    store.write(LEADERBOARD_KEY, &board)?;

    log::info!(
        "Recorded result for {}: score={}, history size={}",
        record.player_name,
        record.final_score,
        history.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::memory_store::MemoryStore;

    #[test]
    fn test_record_result_updates_both_documents() {
        let mut store = MemoryStore::new();
        record_result(&mut store, &ResultRecord::with_timestamp("ada", 200, "t1".into())).unwrap();
        record_result(&mut store, &ResultRecord::with_timestamp("ada", 100, "t2".into())).unwrap();
        record_result(&mut store, &ResultRecord::with_timestamp("bob", 300, "t3".into())).unwrap();

        let history = store.read(HISTORY_KEY);
        let times: Vec<&str> = history.iter().map(|r| r.timestamp.as_str()).collect();
        assert_eq!(times, vec!["t3", "t2", "t1"]);

        let board = store.read(LEADERBOARD_KEY);
        assert_eq!(board.len(), 2);
        assert_eq!((board[0].player_name.as_str(), board[0].final_score), ("bob", 300));
        assert_eq!((board[1].player_name.as_str(), board[1].final_score), ("ada", 200));
    }

    #[test]
    fn test_record_result_recovers_from_corrupted_leaderboard() {
        let mut store = MemoryStore::new();
        store.insert_raw(LEADERBOARD_KEY, "definitely not json");
        record_result(&mut store, &ResultRecord::with_timestamp("ada", 64, "t".into())).unwrap();
        assert_eq!(store.read(LEADERBOARD_KEY).len(), 1);
    }
}
