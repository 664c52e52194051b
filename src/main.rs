use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use student_pipeline::config::ENV_PREFIX;
use student_pipeline::logging::init_logging;
use student_pipeline::report;
use student_pipeline::{
    load_config, process, run_cycle, should_process, CsvStorage, IdPolicy, PipelineStorage,
    ProcessOutcome, SkipReason, StudentGenerator, BATCH_SIZE,
};

#[derive(Parser)]
#[command(name = "student-pipeline")]
#[command(about = "Generate student records and process them in batches of three", long_about = None)]
struct Cli {
    /// TOML config file; falls back to STUDENT_PIPELINE_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Append synthetic students and print the total record count
    Generate {
        #[arg(long)]
        count: Option<usize>,
    },
    /// Print whether a total record count opens the processing gate
    ShouldProcess { total: usize },
    /// Process every full batch of unprocessed students
    Process,
    /// Generate, check the gate, and process when it opens
    Cycle {
        #[arg(long)]
        count: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Write a markdown status report
    Report {
        #[arg(long, default_value = "status.md")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::ShouldProcess { total } = cli.command {
        println!("{}", should_process(total));
        return Ok(());
    }

    let config_path = cli
        .config
        .or_else(|| std::env::var(format!("{ENV_PREFIX}CONFIG")).ok().map(PathBuf::from));
    let config = load_config(config_path.as_deref()).context("failed to load configuration")?;
    init_logging(config.log_format);

    let mut storage = CsvStorage::open(&config).with_context(|| {
        format!("failed to open data directory {}", config.data_dir.display())
    })?;
    let policy = IdPolicy::from_flag(config.unique_ids);

    match cli.command {
        Commands::ShouldProcess { .. } => {}
        Commands::Generate { count } => {
            let count = count.unwrap_or(config.generate_count);
            let total = StudentGenerator::from_entropy(policy)
                .generate(&mut storage, count)
                .context("generation failed")?;
            println!("{total}");
        }
        Commands::Process => {
            let outcome = process(&mut storage).context("processing failed")?;
            print_outcome(&outcome);
        }
        Commands::Cycle { count, json } => {
            let count = count.unwrap_or(config.generate_count);
            let mut generator = StudentGenerator::from_entropy(policy);
            let cycle = run_cycle(&mut storage, &mut generator, count).context("cycle failed")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&cycle)?);
            } else {
                println!(
                    "Generated {} records, {} total.",
                    cycle.generated, cycle.total_records
                );
                match &cycle.outcome {
                    Some(outcome) => print_outcome(outcome),
                    None => println!("Gate closed; processing skipped."),
                }
            }
        }
        Commands::Report { out } => {
            let records = storage.load_records()?;
            let ledger = storage.load_ledger()?;
            let status = report::build_status_report(&records, &ledger, chrono::Utc::now());
            std::fs::write(&out, status)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}

fn print_outcome(outcome: &ProcessOutcome) {
    match outcome {
        ProcessOutcome::NothingToDo {
            reason: SkipReason::EmptyStore,
        } => println!("No student data to process."),
        ProcessOutcome::NothingToDo {
            reason: SkipReason::InsufficientBatch { unprocessed },
        } => println!(
            "Only {unprocessed} unprocessed records. Need at least {BATCH_SIZE} to process."
        ),
        ProcessOutcome::Processed { batches, records } => {
            println!("Processed {records} student records in {batches} batches.")
        }
    }
}
