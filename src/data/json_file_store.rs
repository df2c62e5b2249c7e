use crate::data::record_store::{decode_records, encode_records, RecordStore};
use crate::data::result_record::ResultRecord;
use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// One JSON file per key inside a data directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    base_dir: PathBuf,
}

impl JsonFileStore {
    /// Creates the directory if needed.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }
}

impl RecordStore for JsonFileStore {
    fn read(&self, key: &str) -> Vec<ResultRecord> {
        let path = self.file_path(key);
        match fs::read_to_string(&path) {
            Ok(raw) => decode_records(key, Some(&raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                log::warn!("Unable to read {}: {}", path.display(), e);
                Vec::new()
            }
        }
    }

    fn write(&mut self, key: &str, records: &[ResultRecord]) -> Result<()> {
        let path = self.file_path(key);
        let tmp_path = path.with_extension("json.tmp");

        // Atomic replace: readers see the old document or the new one.
        fs::write(&tmp_path, encode_records(records)?)?;
        fs::rename(&tmp_path, &path)?;

        log::debug!("Wrote {} records to {}", records.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::record_store::{HISTORY_KEY, LEADERBOARD_KEY};
    use tempfile::tempdir;

    #[test]
    fn test_round_trip_through_disk() -> Result<()> {
        let dir = tempdir()?;
        let mut store = JsonFileStore::new(dir.path())?;
        let records = vec![
            ResultRecord::with_timestamp("ada", 512, "t1".into()),
            ResultRecord::with_timestamp("ada", 256, "t0".into()),
        ];

        store.write(HISTORY_KEY, &records)?;

        let reopened = JsonFileStore::new(dir.path())?;
        assert_eq!(reopened.read(HISTORY_KEY), records);
        assert!(reopened.read(LEADERBOARD_KEY).is_empty());
        assert!(dir.path().join("aztec2048-history.json").exists());
        Ok(())
    }

    #[test]
    fn test_garbage_file_reads_empty() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("aztec2048-leaderboard.json"), "<<garbage>>")?;
        let store = JsonFileStore::new(dir.path())?;
        assert!(store.read(LEADERBOARD_KEY).is_empty());
        Ok(())
    }

    #[test]
    fn test_creates_nested_directory() -> Result<()> {
        let dir = tempdir()?;
        let nested = dir.path().join("a").join("b");
        let _store = JsonFileStore::new(&nested)?;
        assert!(nested.is_dir());
        Ok(())
    }
}
