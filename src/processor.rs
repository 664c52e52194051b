use serde::Serialize;

use crate::config::BATCH_SIZE;
use crate::error::Result;
use crate::models::ProcessedSummary;
use crate::storage::PipelineStorage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// The record store holds no rows.
    EmptyStore,
    /// Fewer unprocessed rows than one batch needs.
    InsufficientBatch { unprocessed: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProcessOutcome {
    NothingToDo { reason: SkipReason },
    Processed { batches: usize, records: usize },
}

impl ProcessOutcome {
    pub fn batches(&self) -> usize {
        match self {
            ProcessOutcome::NothingToDo { .. } => 0,
            ProcessOutcome::Processed { batches, .. } => *batches,
        }
    }
}

/// Marks every full batch of unprocessed records as processed and appends
/// their summaries to the ledger.
///
/// Unprocessed rows are taken in store order, three at a time; a trailing
/// group of one or two waits for a later run. The record store rewrite and
/// the ledger append are committed together, so a failure leaves both
/// tables as they were.
pub fn process<S>(storage: &mut S) -> Result<ProcessOutcome>
where
    S: PipelineStorage + ?Sized,
{
    let mut records = storage.load_records()?;
    if records.is_empty() {
        tracing::info!("no student data to process");
        return Ok(ProcessOutcome::NothingToDo {
            reason: SkipReason::EmptyStore,
        });
    }

    let unprocessed: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| !record.processed)
        .map(|(idx, _)| idx)
        .collect();

    let batches = unprocessed.len() / BATCH_SIZE;
    if batches == 0 {
        tracing::info!(
            unprocessed = unprocessed.len(),
            needed = BATCH_SIZE,
            "not enough unprocessed records for a batch"
        );
        return Ok(ProcessOutcome::NothingToDo {
            reason: SkipReason::InsufficientBatch {
                unprocessed: unprocessed.len(),
            },
        });
    }

    let mut appended = Vec::with_capacity(batches * BATCH_SIZE);
    for (batch, positions) in unprocessed.chunks_exact(BATCH_SIZE).enumerate() {
        for &idx in positions {
            let record = &mut records[idx];
            let summary = record.summary_line();
            record.processed = true;
            record.summary = Some(summary.clone());
            appended.push(ProcessedSummary {
                student_id: record.student_id.clone(),
                summary,
            });
        }
        tracing::debug!(batch, "batch summarized");
    }

    storage.commit_processed(&records, &appended)?;

    tracing::info!(
        records = appended.len(),
        batches,
        "processed student records"
    );
    Ok(ProcessOutcome::Processed {
        batches,
        records: appended.len(),
    })
}
