use crate::data::record_store::{RecordStore, HISTORY_KEY};
use crate::data::result_record::ResultRecord;

/// How many past games the game screen lists for the current player.
pub const RECENT_HISTORY_LEN: usize = 5;

/// Newest first. The history is never truncated.
pub fn prepend_to_history(mut history: Vec<ResultRecord>, record: ResultRecord) -> Vec<ResultRecord> {
    history.insert(0, record);
    history
}

/// The `limit` most recent games of one player.
pub fn recent_for_player(history: &[ResultRecord], player_name: &str, limit: usize) -> Vec<ResultRecord> {
    history
        .iter()
        .filter(|record| record.player_name == player_name)
        .take(limit)
        .cloned()
        .collect()
}

pub fn load_recent_history(store: &dyn RecordStore, player_name: &str) -> Vec<ResultRecord> {
    recent_for_player(&store.read(HISTORY_KEY), player_name, RECENT_HISTORY_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, score: u64, time: &str) -> ResultRecord {
        ResultRecord::with_timestamp(name, score, time.to_string())
    }

    #[test]
    fn test_prepend_puts_newest_first() {
        let history = vec![record("ada", 10, "t1")];
        let history = prepend_to_history(history, record("bob", 20, "t2"));
        assert_eq!(history[0].player_name, "bob");
        assert_eq!(history[1].player_name, "ada");
    }

    #[test]
    fn test_recent_for_player_filters_and_limits() {
        let mut history = Vec::new();
        for i in 0..8 {
            history = prepend_to_history(history, record("ada", i, &format!("t{}", i)));
            history = prepend_to_history(history, record("bob", 100 + i, &format!("t{}", i)));
        }

        let recent = recent_for_player(&history, "ada", RECENT_HISTORY_LEN);
        assert_eq!(recent.len(), 5);
        assert!(recent.iter().all(|r| r.player_name == "ada"));
        let scores: Vec<u64> = recent.iter().map(|r| r.final_score).collect();
        assert_eq!(scores, vec![7, 6, 5, 4, 3]);
    }

    #[test]
    fn test_unknown_player_has_no_history() {
        let history = vec![record("ada", 10, "t1")];
        assert!(recent_for_player(&history, "carla", RECENT_HISTORY_LEN).is_empty());
    }
}
