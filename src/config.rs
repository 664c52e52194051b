use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

/// Number of records in every processing batch.
pub const BATCH_SIZE: usize = 3;

/// Prefix of every environment override, e.g. `STUDENT_PIPELINE_DATA_DIR`.
pub const ENV_PREFIX: &str = "STUDENT_PIPELINE_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Directory holding both tables and the commit journal.
    pub data_dir: PathBuf,
    pub records_file: String,
    pub ledger_file: String,
    /// Records created per cycle.
    pub generate_count: usize,
    /// Redraw student ids already present in the store.
    pub unique_ids: bool,
    pub log_format: LogFormat,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            records_file: "students.csv".to_string(),
            ledger_file: "processed_students.csv".to_string(),
            generate_count: 1,
            unique_ids: true,
            log_format: LogFormat::Plain,
        }
    }
}

impl PipelineConfig {
    pub fn batch_size(&self) -> usize {
        BATCH_SIZE
    }

    pub fn records_path(&self) -> PathBuf {
        self.data_dir.join(&self.records_file)
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.data_dir.join(&self.ledger_file)
    }

    pub fn validate(&self) -> Result<()> {
        if self.generate_count == 0 {
            return Err(PipelineError::InvalidConfig(
                "generate_count must be at least 1".to_string(),
            ));
        }
        for (key, name) in [
            ("records_file", &self.records_file),
            ("ledger_file", &self.ledger_file),
        ] {
            if name.trim().is_empty() {
                return Err(PipelineError::InvalidConfig(format!("{key} must not be empty")));
            }
            if Path::new(name).components().count() != 1 {
                return Err(PipelineError::InvalidConfig(format!(
                    "{key} must be a plain file name, got `{name}`"
                )));
            }
        }
        if self.records_file == self.ledger_file {
            return Err(PipelineError::InvalidConfig(
                "records_file and ledger_file must differ".to_string(),
            ));
        }
        Ok(())
    }
}

/// Defaults, then the optional TOML file, then `STUDENT_PIPELINE_*` variables.
pub fn load_config(path: Option<&Path>) -> Result<PipelineConfig> {
    let mut figment = Figment::from(Serialized::defaults(PipelineConfig::default()));

    if let Some(path) = path {
        if !path.exists() {
            return Err(PipelineError::InvalidConfig(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        figment = figment.merge(Toml::file(path));
    }

    let config: PipelineConfig = figment
        .merge(Env::prefixed(ENV_PREFIX).ignore(&["config", "log"]))
        .extract()
        .map_err(|e| PipelineError::InvalidConfig(e.to_string()))?;

    config.validate()?;
    Ok(config)
}

/// Parses a TOML document over the defaults, without consulting the environment.
pub fn load_config_from_str(toml_str: &str) -> Result<PipelineConfig> {
    let config: PipelineConfig = Figment::from(Serialized::defaults(PipelineConfig::default()))
        .merge(Toml::string(toml_str))
        .extract()
        .map_err(|e| PipelineError::InvalidConfig(e.to_string()))?;
    config.validate()?;
    Ok(config)
}
