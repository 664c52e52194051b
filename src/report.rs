use std::collections::BTreeMap;
use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::config::BATCH_SIZE;
use crate::models::{Major, ProcessedSummary, StudentRecord};

pub fn build_status_report(
    records: &[StudentRecord],
    ledger: &[ProcessedSummary],
    generated_at: DateTime<Utc>,
) -> String {
    let mut processed = 0usize;
    let mut by_major: BTreeMap<Major, (usize, f64)> = BTreeMap::new();
    for record in records {
        if record.processed {
            processed += 1;
        }
        let (count, gpa_sum) = by_major.entry(record.major).or_insert((0, 0.0));
        *count += 1;
        *gpa_sum += record.gpa;
    }
    let unprocessed = records.len() - processed;

    // Most common majors first; ties keep the enum order.
    let mut majors: Vec<(Major, usize, f64)> = by_major
        .into_iter()
        .map(|(major, (count, gpa_sum))| (major, count, gpa_sum / count as f64))
        .collect();
    majors.sort_by(|a, b| b.1.cmp(&a.1));

    let mut output = String::new();

    let _ = writeln!(output, "# Student Pipeline Status");
    let _ = writeln!(output, "Generated at {}", generated_at.format("%Y-%m-%d %H:%M:%S UTC"));
    let _ = writeln!(output);
    let _ = writeln!(output, "## Totals");
    let _ = writeln!(output, "- Records: {}", records.len());
    let _ = writeln!(output, "- Processed: {processed}");
    let _ = writeln!(output, "- Unprocessed: {unprocessed}");
    let _ = writeln!(
        output,
        "- Full batches waiting: {} (batch size {BATCH_SIZE})",
        unprocessed / BATCH_SIZE
    );
    let _ = writeln!(output, "- Ledger rows: {}", ledger.len());

    let _ = writeln!(output);
    let _ = writeln!(output, "## Majors");

    if majors.is_empty() {
        let _ = writeln!(output, "No students recorded yet.");
    } else {
        for (major, count, avg_gpa) in &majors {
            let _ = writeln!(output, "- {major}: {count} students (avg GPA {avg_gpa:.2})");
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Recently Processed");

    if ledger.is_empty() {
        let _ = writeln!(output, "Nothing processed yet.");
    } else {
        for entry in ledger.iter().rev().take(5) {
            let _ = writeln!(output, "- {}: {}", entry.student_id, entry.summary);
        }
    }

    output
}
