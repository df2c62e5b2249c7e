pub mod export_csv;
pub mod history;
pub mod json_file_store;
pub mod leaderboard;
pub mod memory_store;
pub mod record_result;
pub mod record_store;
pub mod result_record;
pub mod sqlite_store;

pub use export_csv::{export_records_to_path, write_records_csv};
pub use history::{load_recent_history, prepend_to_history, recent_for_player, RECENT_HISTORY_LEN};
pub use json_file_store::JsonFileStore;
pub use leaderboard::{load_leaderboard, rank_of, submit_to_leaderboard, LEADERBOARD_CAPACITY};
pub use memory_store::MemoryStore;
pub use record_result::record_result;
pub use record_store::{
    lock_store, shared_store, RecordStore, SharedStore, HISTORY_KEY, LEADERBOARD_KEY,
};
pub use result_record::ResultRecord;
pub use sqlite_store::SqliteStore;
