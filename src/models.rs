use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};

/// Majors a generated student can be enrolled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Major {
    #[serde(rename = "Computer Science")]
    ComputerScience,
    #[serde(rename = "Data Science")]
    DataScience,
    #[serde(rename = "AI")]
    Ai,
    #[serde(rename = "Business")]
    Business,
    #[serde(rename = "Engineering")]
    Engineering,
}

impl Major {
    pub const ALL: [Major; 5] = [
        Major::ComputerScience,
        Major::DataScience,
        Major::Ai,
        Major::Business,
        Major::Engineering,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Major::ComputerScience => "Computer Science",
            Major::DataScience => "Data Science",
            Major::Ai => "AI",
            Major::Business => "Business",
            Major::Engineering => "Engineering",
        }
    }
}

impl fmt::Display for Major {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row of the record store.
///
/// `summary` only lives for the duration of a processing run; it is skipped
/// by serde so a rewrite of the store never carries it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub major: Major,
    pub gpa: f64,
    pub email: String,
    #[serde(deserialize_with = "deserialize_flag")]
    pub processed: bool,
    #[serde(skip)]
    pub summary: Option<String>,
}

impl StudentRecord {
    /// Human readable one-line description written to the processed ledger.
    pub fn summary_line(&self) -> String {
        format!(
            "{} {} - {} - GPA: {} - Email: {}",
            self.first_name,
            self.last_name,
            self.major,
            format_gpa(self.gpa),
            self.email
        )
    }
}

/// A row of the processed ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedSummary {
    pub student_id: String,
    pub summary: String,
}

/// Column order of the record store header.
pub const RECORD_COLUMNS: [&str; 7] = [
    "student_id",
    "first_name",
    "last_name",
    "major",
    "gpa",
    "email",
    "processed",
];

/// Column order of the processed ledger header.
pub const LEDGER_COLUMNS: [&str; 2] = ["student_id", "summary"];

/// Renders a GPA the way floats print in the ledger: always with a decimal
/// part (`3.0`, `3.57`).
pub fn format_gpa(gpa: f64) -> String {
    format!("{gpa:?}")
}

/// Rounds to two decimal places.
pub fn round_gpa(raw: f64) -> f64 {
    (raw * 100.0).round() / 100.0
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim() {
        "true" | "True" | "TRUE" | "1" => Ok(true),
        "false" | "False" | "FALSE" | "0" => Ok(false),
        other => Err(de::Error::custom(format!(
            "invalid processed flag `{other}`"
        ))),
    }
}
