use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use uuid::Uuid;

use super::PipelineStorage;
use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use crate::models::{ProcessedSummary, StudentRecord, LEDGER_COLUMNS, RECORD_COLUMNS};

pub const JOURNAL_FILE: &str = "commit.journal.json";
pub const STAGED_SUFFIX: &str = ".staged";

/// Both tables as CSV files inside one data directory.
///
/// A processing commit stages the new record store and the new ledger next
/// to their targets, then writes the commit journal. The journal is the
/// commit point: once it exists, the next open or table access finishes the
/// moves it lists, and staged files without a journal are thrown away.
#[derive(Debug)]
pub struct CsvStorage {
    dir: PathBuf,
    records_file: String,
    ledger_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CommitJournal {
    pub run_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub moves: Vec<StagedMove>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct StagedMove {
    pub staged: String,
    pub target: String,
}

impl CsvStorage {
    pub fn open(config: &PipelineConfig) -> Result<Self> {
        config.validate()?;
        Self::open_in(&config.data_dir, &config.records_file, &config.ledger_file)
    }

    /// Creates `dir` if needed and recovers any interrupted commit.
    pub fn open_in(
        dir: impl Into<PathBuf>,
        records_file: impl Into<String>,
        ledger_file: impl Into<String>,
    ) -> Result<Self> {
        let storage = Self {
            dir: dir.into(),
            records_file: records_file.into(),
            ledger_file: ledger_file.into(),
        };
        fs::create_dir_all(&storage.dir).map_err(|e| PipelineError::unavailable(&storage.dir, e))?;
        storage.recover()?;
        Ok(storage)
    }

    pub fn records_path(&self) -> PathBuf {
        self.dir.join(&self.records_file)
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.dir.join(&self.ledger_file)
    }

    pub fn journal_path(&self) -> PathBuf {
        self.dir.join(JOURNAL_FILE)
    }

    fn staged_name(file: &str) -> String {
        format!("{file}{STAGED_SUFFIX}")
    }

    fn recover(&self) -> Result<()> {
        let journal_path = self.journal_path();
        let bytes = match fs::read(&journal_path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return self.discard_staged();
            }
            Err(e) => return Err(PipelineError::unavailable(&journal_path, e)),
        };

        let journal: CommitJournal = serde_json::from_slice(&bytes)
            .map_err(|e| PipelineError::malformed(&journal_path, e.to_string()))?;
        tracing::warn!(
            run_id = %journal.run_id,
            created_at = %journal.created_at,
            "rolling forward interrupted commit"
        );
        self.apply(&journal)?;
        self.finish()
    }

    fn discard_staged(&self) -> Result<()> {
        for file in [&self.records_file, &self.ledger_file] {
            let staged = self.dir.join(Self::staged_name(file));
            match fs::remove_file(&staged) {
                Ok(()) => {
                    tracing::warn!(path = %staged.display(), "discarded uncommitted staged file");
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(PipelineError::unavailable(&staged, e)),
            }
        }
        Ok(())
    }

    /// Stages both tables and writes the journal. After this returns the
    /// commit is durable even if nothing else runs.
    pub(crate) fn prepare_commit(
        &self,
        records: &[StudentRecord],
        appended: &[ProcessedSummary],
    ) -> Result<CommitJournal> {
        let records_bytes = encode_records(&self.records_path(), records)?;
        let ledger_bytes = self.appended_ledger_bytes(appended)?;

        let moves = match self.stage_tables(&records_bytes, &ledger_bytes) {
            Ok(moves) => moves,
            Err(e) => {
                let _ = self.discard_staged();
                return Err(e);
            }
        };

        let journal = CommitJournal {
            run_id: Uuid::new_v4(),
            created_at: Utc::now(),
            moves,
        };
        let journal_path = self.journal_path();
        let bytes = serde_json::to_vec_pretty(&journal)
            .map_err(|e| PipelineError::malformed(&journal_path, e.to_string()))?;
        if let Err(e) = write_atomic(&self.dir, &journal_path, &bytes) {
            let _ = self.discard_staged();
            return Err(e);
        }
        tracing::debug!(run_id = %journal.run_id, "commit journal written");
        Ok(journal)
    }

    fn stage_tables(&self, records: &[u8], ledger: &[u8]) -> Result<Vec<StagedMove>> {
        Ok(vec![
            self.stage(&self.records_file, records)?,
            self.stage(&self.ledger_file, ledger)?,
        ])
    }

    fn stage(&self, file: &str, bytes: &[u8]) -> Result<StagedMove> {
        let staged = Self::staged_name(file);
        write_atomic(&self.dir, &self.dir.join(&staged), bytes)?;
        Ok(StagedMove {
            staged,
            target: file.to_string(),
        })
    }

    fn apply(&self, journal: &CommitJournal) -> Result<()> {
        let journal_path = self.journal_path();
        for mv in &journal.moves {
            for name in [&mv.staged, &mv.target] {
                if Path::new(name).components().count() != 1 {
                    return Err(PipelineError::malformed(
                        &journal_path,
                        format!("journal names a path outside the data directory: {name}"),
                    ));
                }
            }
            let staged = self.dir.join(&mv.staged);
            let target = self.dir.join(&mv.target);
            if !staged.exists() {
                continue;
            }
            fs::rename(&staged, &target).map_err(|e| PipelineError::unavailable(&target, e))?;
        }
        sync_dir(&self.dir)
    }

    fn finish(&self) -> Result<()> {
        let journal_path = self.journal_path();
        match fs::remove_file(&journal_path) {
            Ok(()) => sync_dir(&self.dir),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PipelineError::unavailable(&journal_path, e)),
        }
    }

    /// Existing ledger bytes, untouched, followed by `appended`.
    fn appended_ledger_bytes(&self, appended: &[ProcessedSummary]) -> Result<Vec<u8>> {
        let path = self.ledger_path();
        let mut bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(PipelineError::unavailable(&path, e)),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return encode_table(&path, &LEDGER_COLUMNS, appended);
        }

        let header = validated_header(&path, &bytes, &LEDGER_COLUMNS)?;
        if !bytes.ends_with(b"\n") {
            bytes.push(b'\n');
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(bytes);
        for row in appended {
            let fields = header.iter().map(|column| match column.as_str() {
                "student_id" => row.student_id.as_str(),
                "summary" => row.summary.as_str(),
                _ => "",
            });
            writer
                .write_record(fields)
                .map_err(|e| PipelineError::from_csv(&path, e))?;
        }
        finish_writer(&path, writer)
    }
}

impl PipelineStorage for CsvStorage {
    fn load_records(&self) -> Result<Vec<StudentRecord>> {
        self.recover()?;
        let path = self.records_path();
        let rows: Vec<StudentRecord> = read_table(&path, &RECORD_COLUMNS)?;
        tracing::debug!(path = %path.display(), rows = rows.len(), "loaded record store");
        Ok(rows)
    }

    fn save_records(&mut self, records: &[StudentRecord]) -> Result<()> {
        self.recover()?;
        let path = self.records_path();
        let bytes = encode_records(&path, records)?;
        write_atomic(&self.dir, &path, &bytes)?;
        tracing::debug!(path = %path.display(), rows = records.len(), "saved record store");
        Ok(())
    }

    fn load_ledger(&self) -> Result<Vec<ProcessedSummary>> {
        self.recover()?;
        read_table(&self.ledger_path(), &LEDGER_COLUMNS)
    }

    fn commit_processed(
        &mut self,
        records: &[StudentRecord],
        appended: &[ProcessedSummary],
    ) -> Result<()> {
        self.recover()?;
        let journal = self.prepare_commit(records, appended)?;
        self.apply(&journal)?;
        self.finish()?;
        tracing::debug!(
            run_id = %journal.run_id,
            records = records.len(),
            appended = appended.len(),
            "processing commit applied"
        );
        Ok(())
    }
}

fn read_table<T: DeserializeOwned>(path: &Path, columns: &[&str]) -> Result<Vec<T>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(PipelineError::unavailable(path, e)),
    };

    let mut reader = csv::Reader::from_reader(BufReader::new(file));
    let headers = reader
        .headers()
        .map_err(|e| PipelineError::from_csv(path, e))?
        .clone();
    if headers.is_empty() {
        return Ok(Vec::new());
    }
    check_columns(path, &headers, columns)?;

    reader
        .deserialize()
        .map(|row| row.map_err(|e| PipelineError::from_csv(path, e)))
        .collect()
}

fn check_columns(path: &Path, headers: &csv::StringRecord, columns: &[&str]) -> Result<()> {
    for column in columns {
        if !headers.iter().any(|h| h == *column) {
            return Err(PipelineError::malformed(
                path,
                format!("missing column `{column}`"),
            ));
        }
    }
    Ok(())
}

/// Parses every row of an existing table and returns its header.
fn validated_header(path: &Path, bytes: &[u8], columns: &[&str]) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_reader(bytes);
    let headers = reader
        .headers()
        .map_err(|e| PipelineError::from_csv(path, e))?
        .clone();
    check_columns(path, &headers, columns)?;
    for row in reader.records() {
        row.map_err(|e| PipelineError::from_csv(path, e))?;
    }
    Ok(headers.iter().map(str::to_string).collect())
}

fn encode_records(path: &Path, records: &[StudentRecord]) -> Result<Vec<u8>> {
    encode_table(path, &RECORD_COLUMNS, records)
}

/// Header line written once from `columns`, then one line per row. The
/// serde writer's own header is switched off so it never repeats.
fn encode_table<T: Serialize>(path: &Path, columns: &[&str], rows: &[T]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer
        .write_record(columns)
        .map_err(|e| PipelineError::from_csv(path, e))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| PipelineError::from_csv(path, e))?;
    }
    finish_writer(path, writer)
}

fn finish_writer(path: &Path, writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>> {
    writer
        .into_inner()
        .map_err(|e| PipelineError::unavailable(path, io::Error::new(io::ErrorKind::Other, e.to_string())))
}

/// Temp file in `dir`, fsync, rename over `target`.
fn write_atomic(dir: &Path, target: &Path, bytes: &[u8]) -> Result<()> {
    let mut temp = NamedTempFile::new_in(dir).map_err(|e| PipelineError::unavailable(dir, e))?;
    temp.write_all(bytes)
        .map_err(|e| PipelineError::unavailable(temp.path(), e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| PipelineError::unavailable(target, e))?;
    temp.persist(target)
        .map_err(|e| PipelineError::unavailable(target, e.error))?;
    sync_dir(dir)
}

/// Flushes directory entries so a completed rename survives power loss.
#[cfg(unix)]
fn sync_dir(dir: &Path) -> Result<()> {
    File::open(dir)
        .and_then(|handle| handle.sync_all())
        .map_err(|e| PipelineError::unavailable(dir, e))
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Major;
    use tempfile::TempDir;

    fn record(id: &str, processed: bool) -> StudentRecord {
        StudentRecord {
            student_id: id.to_string(),
            first_name: "Robert".to_string(),
            last_name: "Miller".to_string(),
            major: Major::Engineering,
            gpa: 3.42,
            email: "robert.miller85@university.edu".to_string(),
            processed,
            summary: None,
        }
    }

    fn summary(id: &str) -> ProcessedSummary {
        ProcessedSummary {
            student_id: id.to_string(),
            summary: format!("summary for {id}"),
        }
    }

    fn open(dir: &TempDir) -> CsvStorage {
        CsvStorage::open_in(dir.path(), "students.csv", "processed_students.csv").unwrap()
    }

    #[test]
    fn missing_tables_read_as_empty() {
        let dir = TempDir::new().unwrap();
        let storage = open(&dir);
        assert!(storage.load_records().unwrap().is_empty());
        assert!(storage.load_ledger().unwrap().is_empty());
    }

    #[test]
    fn open_creates_data_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("data");
        CsvStorage::open_in(&nested, "students.csv", "processed_students.csv").unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn open_fails_when_data_dir_is_a_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("data");
        fs::write(&blocker, "not a directory").unwrap();
        let err = CsvStorage::open_in(&blocker, "students.csv", "processed_students.csv")
            .unwrap_err();
        assert!(matches!(err, PipelineError::StorageUnavailable { .. }));
    }

    #[test]
    fn save_then_load_keeps_order_and_drops_summary() {
        let dir = TempDir::new().unwrap();
        let mut storage = open(&dir);
        let mut rows = vec![record("S10003", false), record("S10001", true)];
        rows[0].summary = Some("transient".to_string());
        storage.save_records(&rows).unwrap();

        let text = fs::read_to_string(storage.records_path()).unwrap();
        assert!(text.starts_with("student_id,first_name,last_name,major,gpa,email,processed\n"));
        assert!(!text.contains("transient"));

        let loaded = storage.load_records().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].student_id, "S10003");
        assert!(loaded[1].processed);
        assert!(loaded[0].summary.is_none());
    }

    #[test]
    fn empty_save_writes_header_only() {
        let dir = TempDir::new().unwrap();
        let mut storage = open(&dir);
        storage.save_records(&[]).unwrap();
        let text = fs::read_to_string(storage.records_path()).unwrap();
        assert_eq!(text, format!("{}\n", RECORD_COLUMNS.join(",")));
        assert!(storage.load_records().unwrap().is_empty());
    }

    #[test]
    fn missing_column_is_malformed() {
        let dir = TempDir::new().unwrap();
        let storage = open(&dir);
        fs::write(
            storage.records_path(),
            "student_id,first_name,last_name\nS10001,Mary,Smith\n",
        )
        .unwrap();
        let err = storage.load_records().unwrap_err();
        assert!(matches!(err, PipelineError::MalformedStorage { .. }));
        assert!(err.to_string().contains("major"));
    }

    #[test]
    fn unparseable_gpa_is_malformed() {
        let dir = TempDir::new().unwrap();
        let storage = open(&dir);
        fs::write(
            storage.records_path(),
            "student_id,first_name,last_name,major,gpa,email,processed\n\
             S10001,Mary,Smith,AI,high,mary.smith80@university.edu,False\n",
        )
        .unwrap();
        let err = storage.load_records().unwrap_err();
        assert!(matches!(err, PipelineError::MalformedStorage { .. }));
    }

    #[test]
    fn columns_bind_by_name() {
        let dir = TempDir::new().unwrap();
        let storage = open(&dir);
        fs::write(
            storage.records_path(),
            "processed,email,gpa,major,last_name,first_name,student_id\n\
             False,mary.smith80@university.edu,2.75,Business,Smith,Mary,S10001\n",
        )
        .unwrap();
        let rows = storage.load_records().unwrap();
        assert_eq!(rows[0].student_id, "S10001");
        assert_eq!(rows[0].major, Major::Business);
        assert_eq!(rows[0].gpa, 2.75);
    }

    #[test]
    fn commit_preserves_existing_ledger_bytes() {
        let dir = TempDir::new().unwrap();
        let mut storage = open(&dir);
        let prior = "student_id,summary\n\"S10001\",\"Mary Smith - AI - GPA: 3.0 - Email: x\"";
        fs::write(storage.ledger_path(), prior).unwrap();

        storage
            .commit_processed(&[record("S10002", true)], &[summary("S10002")])
            .unwrap();

        let text = fs::read_to_string(storage.ledger_path()).unwrap();
        assert!(text.starts_with(prior));
        assert!(text.ends_with("S10002,summary for S10002\n"));
        assert_eq!(storage.load_ledger().unwrap().len(), 2);
        assert!(storage.load_records().unwrap()[0].processed);
        assert!(!storage.journal_path().exists());
    }

    #[test]
    fn first_commit_writes_ledger_header() {
        let dir = TempDir::new().unwrap();
        let mut storage = open(&dir);
        storage
            .commit_processed(&[record("S10002", true)], &[summary("S10002"), summary("S10003")])
            .unwrap();
        let text = fs::read_to_string(storage.ledger_path()).unwrap();
        assert_eq!(
            text,
            "student_id,summary\nS10002,summary for S10002\nS10003,summary for S10003\n"
        );
    }

    #[test]
    fn ledger_append_follows_existing_column_order() {
        let dir = TempDir::new().unwrap();
        let mut storage = open(&dir);
        fs::write(storage.ledger_path(), "summary,student_id\nold,S10001\n").unwrap();
        storage.commit_processed(&[], &[summary("S10002")]).unwrap();
        let ledger = storage.load_ledger().unwrap();
        assert_eq!(ledger[1].student_id, "S10002");
        assert_eq!(ledger[1].summary, "summary for S10002");
    }

    #[test]
    fn malformed_ledger_blocks_the_whole_commit() {
        let dir = TempDir::new().unwrap();
        let mut storage = open(&dir);
        storage.save_records(&[record("S10001", false)]).unwrap();
        fs::write(storage.ledger_path(), "id,text\nS1,hello\n").unwrap();

        let err = storage
            .commit_processed(&[record("S10001", true)], &[summary("S10001")])
            .unwrap_err();
        assert!(matches!(err, PipelineError::MalformedStorage { .. }));
        assert!(!storage.load_records().unwrap()[0].processed);
        assert!(!dir.path().join("students.csv.staged").exists());
    }

    #[test]
    fn interrupted_commit_rolls_forward_on_open() {
        let dir = TempDir::new().unwrap();
        let mut storage = open(&dir);
        storage.save_records(&[record("S10001", false)]).unwrap();

        let journal = storage
            .prepare_commit(&[record("S10001", true)], &[summary("S10001")])
            .unwrap();
        assert_eq!(journal.moves.len(), 2);
        assert!(storage.journal_path().exists());
        drop(storage);

        let reopened = open(&dir);
        assert!(reopened.load_records().unwrap()[0].processed);
        assert_eq!(reopened.load_ledger().unwrap(), vec![summary("S10001")]);
        assert!(!reopened.journal_path().exists());
        assert!(!dir.path().join("students.csv.staged").exists());
    }

    #[test]
    fn partially_applied_commit_finishes_on_open() {
        let dir = TempDir::new().unwrap();
        let storage = open(&dir);
        let journal = storage
            .prepare_commit(&[record("S10001", true)], &[summary("S10001")])
            .unwrap();
        let first = &journal.moves[0];
        fs::rename(dir.path().join(&first.staged), dir.path().join(&first.target)).unwrap();
        drop(storage);

        let reopened = open(&dir);
        assert_eq!(reopened.load_records().unwrap().len(), 1);
        assert_eq!(reopened.load_ledger().unwrap().len(), 1);
    }

    #[test]
    fn pending_commit_lands_before_a_later_save() {
        let dir = TempDir::new().unwrap();
        let mut storage = open(&dir);
        let first = vec![record("S10001", false), record("S10002", false), record("S10003", false)];
        storage.save_records(&first).unwrap();

        let committed: Vec<StudentRecord> =
            first.iter().map(|r| record(&r.student_id, true)).collect();
        storage
            .prepare_commit(&committed, &[summary("S10001"), summary("S10002"), summary("S10003")])
            .unwrap();

        let mut rows = storage.load_records().unwrap();
        assert!(rows.iter().all(|r| r.processed));
        rows.push(record("S10004", false));
        storage.save_records(&rows).unwrap();
        drop(storage);

        let reopened = open(&dir);
        let ids: Vec<String> = reopened
            .load_records()
            .unwrap()
            .into_iter()
            .map(|r| r.student_id)
            .collect();
        assert_eq!(ids, ["S10001", "S10002", "S10003", "S10004"]);
        assert_eq!(reopened.load_ledger().unwrap().len(), 3);
    }

    #[test]
    fn pending_commit_lands_before_the_next_commit() {
        let dir = TempDir::new().unwrap();
        let mut storage = open(&dir);
        storage
            .prepare_commit(&[record("S10001", true)], &[summary("S10001")])
            .unwrap();
        storage
            .commit_processed(
                &[record("S10001", true), record("S10002", true)],
                &[summary("S10002")],
            )
            .unwrap();
        drop(storage);

        let reopened = open(&dir);
        assert_eq!(
            reopened.load_ledger().unwrap(),
            vec![summary("S10001"), summary("S10002")]
        );
        assert!(!reopened.journal_path().exists());
    }

    #[test]
    fn first_commit_ledger_has_only_appended_rows() {
        let dir = TempDir::new().unwrap();
        let mut storage = open(&dir);
        let rows = [summary("S10001"), summary("S10002"), summary("S10003")];
        storage.commit_processed(&[], &rows).unwrap();

        let ledger = storage.load_ledger().unwrap();
        assert_eq!(ledger, rows);
        assert!(ledger.iter().all(|row| row.student_id != "student_id"));
    }

    #[cfg(unix)]
    #[test]
    fn directory_sync_reports_missing_dir() {
        let dir = TempDir::new().unwrap();
        assert!(sync_dir(dir.path()).is_ok());
        let err = sync_dir(&dir.path().join("gone")).unwrap_err();
        assert!(matches!(err, PipelineError::StorageUnavailable { .. }));
    }

    #[test]
    fn atomic_write_replaces_target() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("table.csv");
        fs::write(&target, "old").unwrap();
        write_atomic(dir.path(), &target, b"new").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
    }

    #[test]
    fn staged_files_without_journal_are_discarded() {
        let dir = TempDir::new().unwrap();
        let mut storage = open(&dir);
        storage.save_records(&[record("S10001", false)]).unwrap();
        fs::write(dir.path().join("students.csv.staged"), "garbage").unwrap();
        drop(storage);

        let reopened = open(&dir);
        assert!(!dir.path().join("students.csv.staged").exists());
        assert!(!reopened.load_records().unwrap()[0].processed);
    }

    #[test]
    fn corrupt_journal_is_malformed() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(JOURNAL_FILE), "{not json").unwrap();
        let err = CsvStorage::open_in(dir.path(), "students.csv", "processed_students.csv")
            .unwrap_err();
        assert!(matches!(err, PipelineError::MalformedStorage { .. }));
    }

    #[test]
    fn journal_paths_must_stay_inside_data_dir() {
        let dir = TempDir::new().unwrap();
        let journal = serde_json::json!({
            "run_id": Uuid::new_v4(),
            "created_at": Utc::now(),
            "moves": [{ "staged": "../x.staged", "target": "students.csv" }],
        });
        fs::write(dir.path().join(JOURNAL_FILE), journal.to_string()).unwrap();
        let err = CsvStorage::open_in(dir.path(), "students.csv", "processed_students.csv")
            .unwrap_err();
        assert!(err.to_string().contains("outside the data directory"));
    }
}
