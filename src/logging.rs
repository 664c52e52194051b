//! Tracing subscriber setup for the pipeline binary.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogFormat;

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

pub const LOG_ENV: &str = "STUDENT_PIPELINE_LOG";

/// Filter from `STUDENT_PIPELINE_LOG`, then `RUST_LOG`, then `info`.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber once; later calls are no-ops.
pub fn init_logging(format: LogFormat) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let registry = tracing_subscriber::registry().with(env_filter());
        let result = match format {
            LogFormat::Plain => registry
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .try_init(),
            LogFormat::Json => registry
                .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
                .try_init(),
        };

        if result.is_err() {
            tracing::debug!("global tracing subscriber already installed");
        }
    });
}
