use crate::data::record_store::{decode_records, encode_records, RecordStore};
use crate::data::result_record::ResultRecord;
use crate::Result;
use std::collections::HashMap;

/// In-process store. Documents are kept serialized so they go through the
/// same JSON path as the persistent backends.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw document access, for seeding tests with arbitrary content.
    pub fn insert_raw(&mut self, key: &str, raw: &str) {
        self.documents.insert(key.to_string(), raw.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.documents.get(key).map(String::as_str)
    }
}

impl RecordStore for MemoryStore {
    fn read(&self, key: &str) -> Vec<ResultRecord> {
        decode_records(key, self.raw(key))
    }

    fn write(&mut self, key: &str, records: &[ResultRecord]) -> Result<()> {
        let raw = encode_records(records)?;
        self.documents.insert(key.to_string(), raw);
        Ok(())
    }
}
