//! Storage capability for the record store and the processed ledger.
//!
//! Generation and processing only talk to [`PipelineStorage`], so a
//! different backend can be swapped in without touching either of them.

mod csv_store;
mod memory;

pub use csv_store::{CsvStorage, JOURNAL_FILE, STAGED_SUFFIX};
pub use memory::MemoryStorage;

use crate::error::Result;
use crate::models::{ProcessedSummary, StudentRecord};

pub trait PipelineStorage {
    /// All record store rows in storage order. A store that was never
    /// written reads as empty.
    fn load_records(&self) -> Result<Vec<StudentRecord>>;

    /// Replaces the whole record store. Transient summaries are not stored.
    fn save_records(&mut self, records: &[StudentRecord]) -> Result<()>;

    /// All processed ledger rows in append order.
    fn load_ledger(&self) -> Result<Vec<ProcessedSummary>>;

    /// Replaces the record store and appends `appended` to the ledger as one
    /// unit: either both land or neither does.
    fn commit_processed(
        &mut self,
        records: &[StudentRecord],
        appended: &[ProcessedSummary],
    ) -> Result<()>;
}
