use crate::config::BATCH_SIZE;

/// Whether the processor should run, judged on the cumulative record count.
pub fn should_process(total_count: usize) -> bool {
    total_count % BATCH_SIZE == 0
}
