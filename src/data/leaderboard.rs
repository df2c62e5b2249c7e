use crate::data::record_store::{RecordStore, LEADERBOARD_KEY};
use crate::data::result_record::ResultRecord;

pub const LEADERBOARD_CAPACITY: usize = 100;

/// Folds one result into the leaderboard.
///
/// A player keeps a single entry, replaced only by a strictly higher score.
/// The board is re-sorted by score, highest first, and cut to
/// [`LEADERBOARD_CAPACITY`] entries.
pub fn submit_to_leaderboard(mut board: Vec<ResultRecord>, record: ResultRecord) -> Vec<ResultRecord> {
    match board
        .iter()
        .position(|entry| entry.player_name == record.player_name)
    {
        Some(index) => {
            if record.final_score > board[index].final_score {
                board[index] = record;
            }
        }
        None => board.push(record),
    }

    board.sort_by(|a, b| b.final_score.cmp(&a.final_score));
    board.truncate(LEADERBOARD_CAPACITY);
    board
}

pub fn load_leaderboard(store: &dyn RecordStore) -> Vec<ResultRecord> {
    store.read(LEADERBOARD_KEY)
}

/// 1-based position of a player on the board, if listed.
pub fn rank_of(board: &[ResultRecord], player_name: &str) -> Option<usize> {
    board
        .iter()
        .position(|entry| entry.player_name == player_name)
        .map(|index| index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, score: u64) -> ResultRecord {
        ResultRecord::with_timestamp(name, score, format!("t-{}-{}", name, score))
    }

    fn is_sorted_descending(board: &[ResultRecord]) -> bool {
        board.windows(2).all(|w| w[0].final_score >= w[1].final_score)
    }

    #[test]
    fn test_lower_score_leaves_entry_unchanged() {
        let board = submit_to_leaderboard(Vec::new(), record("ada", 500));
        let board = submit_to_leaderboard(board, record("ada", 300));
        assert_eq!(board, vec![record("ada", 500)]);
    }

    #[test]
    fn test_equal_score_keeps_first_entry() {
        let first = ResultRecord::with_timestamp("ada", 500, "first".into());
        let board = submit_to_leaderboard(Vec::new(), first.clone());
        let board = submit_to_leaderboard(board, ResultRecord::with_timestamp("ada", 500, "second".into()));
        assert_eq!(board, vec![first]);
    }

    #[test]
    fn test_higher_score_replaces_entry() {
        let board = submit_to_leaderboard(Vec::new(), record("ada", 300));
        let board = submit_to_leaderboard(board, record("bob", 400));
        let board = submit_to_leaderboard(board, record("ada", 900));
        assert_eq!(board.len(), 2);
        assert_eq!(board[0], record("ada", 900));
        assert_eq!(board[1], record("bob", 400));
    }

    #[test]
    fn test_capped_and_sorted_after_every_update() {
        let mut board = Vec::new();
        for i in 0..150u64 {
            // Scores go up and down so the insert position varies.
            let score = (i * 37) % 211;
            board = submit_to_leaderboard(board, record(&format!("player{}", i), score));
            assert!(board.len() <= LEADERBOARD_CAPACITY);
            assert!(is_sorted_descending(&board));
        }
        assert_eq!(board.len(), LEADERBOARD_CAPACITY);
    }

    #[test]
    fn test_low_newcomer_on_full_board_is_dropped() {
        let mut board = Vec::new();
        for i in 0..LEADERBOARD_CAPACITY as u64 {
            board = submit_to_leaderboard(board, record(&format!("p{}", i), 1000 + i));
        }
        let board = submit_to_leaderboard(board, record("latecomer", 1));
        assert_eq!(board.len(), LEADERBOARD_CAPACITY);
        assert_eq!(rank_of(&board, "latecomer"), None);
    }

    #[test]
    fn test_rank_of() {
        let board = submit_to_leaderboard(Vec::new(), record("ada", 10));
        let board = submit_to_leaderboard(board, record("bob", 20));
        assert_eq!(rank_of(&board, "bob"), Some(1));
        assert_eq!(rank_of(&board, "ada"), Some(2));
    }
}
