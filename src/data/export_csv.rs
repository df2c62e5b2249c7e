//! CSV export of stored results.
//!
//! Format: name,score,time (one row per record, same order as the store).

use crate::data::result_record::ResultRecord;
use crate::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub fn write_records_csv<W: Write>(records: &[ResultRecord], writer: W) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(records.len())
}

pub fn export_records_to_path<P: AsRef<Path>>(records: &[ResultRecord], path: P) -> Result<usize> {
    let file = File::create(path.as_ref())?;
    let written = write_records_csv(records, file)?;
    log::info!("Exported {} records to {}", written, path.as_ref().display());
    Ok(written)
}
