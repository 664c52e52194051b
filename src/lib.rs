//! Batch pipeline that synthesizes student records, gates processing on the
//! cumulative record count, and turns full batches of unprocessed records
//! into an append-only ledger of summaries.

pub mod config;
pub mod error;
pub mod gate;
pub mod generator;
pub mod identity;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod processor;
pub mod report;
pub mod storage;

pub use config::{load_config, PipelineConfig, BATCH_SIZE};
pub use error::{PipelineError, Result};
pub use gate::should_process;
pub use generator::StudentGenerator;
pub use identity::{IdPolicy, RandomStudentIds, SequentialStudentIds, StudentIdSource};
pub use models::{Major, ProcessedSummary, StudentRecord};
pub use pipeline::{run_cycle, CycleReport};
pub use processor::{process, ProcessOutcome, SkipReason};
pub use storage::{CsvStorage, MemoryStorage, PipelineStorage};
