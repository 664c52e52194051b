use rand::Rng;
use serde::Serialize;

use crate::error::Result;
use crate::gate::should_process;
use crate::generator::StudentGenerator;
use crate::identity::StudentIdSource;
use crate::processor::{process, ProcessOutcome};
use crate::storage::PipelineStorage;

/// What one generate → gate → process cycle did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleReport {
    pub generated: usize,
    pub total_records: usize,
    pub gate_passed: bool,
    /// `None` when the gate skipped processing.
    pub outcome: Option<ProcessOutcome>,
}

/// Runs one cycle in the order the orchestration host does: generate, gate on
/// the cumulative total, then process only if the gate opened.
pub fn run_cycle<S, R, I>(
    storage: &mut S,
    generator: &mut StudentGenerator<R, I>,
    count: usize,
) -> Result<CycleReport>
where
    S: PipelineStorage + ?Sized,
    R: Rng,
    I: StudentIdSource,
{
    let total_records = generator.generate(storage, count)?;
    let gate_passed = should_process(total_records);

    let outcome = if gate_passed {
        Some(process(storage)?)
    } else {
        tracing::info!(total_records, "gate closed, skipping processing");
        None
    };

    Ok(CycleReport {
        generated: count,
        total_records,
        gate_passed,
        outcome,
    })
}
