use std::io;
use std::path::PathBuf;

use super::PipelineStorage;
use crate::error::{PipelineError, Result};
use crate::models::{ProcessedSummary, StudentRecord};

/// Keeps both tables in memory. `fail_commits` makes the next commits fail
/// before anything is applied.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    pub records: Vec<StudentRecord>,
    pub ledger: Vec<ProcessedSummary>,
    pub fail_commits: bool,
}

impl MemoryStorage {
    pub fn with_records(records: Vec<StudentRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }
}

impl PipelineStorage for MemoryStorage {
    fn load_records(&self) -> Result<Vec<StudentRecord>> {
        Ok(self.records.clone())
    }

    fn save_records(&mut self, records: &[StudentRecord]) -> Result<()> {
        self.records = records
            .iter()
            .cloned()
            .map(|mut record| {
                record.summary = None;
                record
            })
            .collect();
        Ok(())
    }

    fn load_ledger(&self) -> Result<Vec<ProcessedSummary>> {
        Ok(self.ledger.clone())
    }

    fn commit_processed(
        &mut self,
        records: &[StudentRecord],
        appended: &[ProcessedSummary],
    ) -> Result<()> {
        if self.fail_commits {
            return Err(PipelineError::unavailable(
                &PathBuf::from("memory"),
                io::Error::new(io::ErrorKind::Other, "commit refused"),
            ));
        }
        self.save_records(records)?;
        self.ledger.extend_from_slice(appended);
        Ok(())
    }
}
