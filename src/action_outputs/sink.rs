//! Output sink resolution and emission

use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

use super::{OUTPUT_COLUMNS_FOUND, OUTPUT_ROWS_COUNT, OUTPUT_VALIDATION_STATUS};
use crate::validator::ValidationResult;

/// Environment variable naming the runner's output file
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Errors that can occur while emitting outputs
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write outputs to '{path}': {source}")]
    File {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write outputs to stdout: {0}")]
    Stdout(#[source] io::Error),
}

/// Result type for output operations
pub type Result<T> = std::result::Result<T, OutputError>;

/// Where action outputs are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    /// Append `name=value` lines to this file
    File(PathBuf),
    /// Print `::set-output` commands on stdout
    Stdout,
}

impl OutputSink {
    /// Resolve the sink from `GITHUB_OUTPUT`
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var_os(GITHUB_OUTPUT_ENV))
    }

    /// Resolve the sink from an already-read `GITHUB_OUTPUT` value
    ///
    /// An unset or empty value selects stdout.
    pub fn from_env_value(value: Option<OsString>) -> Self {
        match value {
            Some(path) if !path.is_empty() => OutputSink::File(PathBuf::from(path)),
            _ => OutputSink::Stdout,
        }
    }

    /// Render one output entry in this sink's line format
    pub fn render(&self, name: &str, value: &str) -> String {
        match self {
            OutputSink::File(_) => format!("{}={}\n", name, value),
            OutputSink::Stdout => format!("::set-output name={}::{}\n", name, value),
        }
    }

    /// Write all outputs for `result`
    ///
    /// The file sink appends; existing content is never truncated.
    pub fn emit(&self, result: &ValidationResult) -> Result<()> {
        let rendered: String = output_entries(result)
            .iter()
            .map(|(name, value)| self.render(name, value))
            .collect();

        match self {
            OutputSink::File(path) => {
                debug!("Appending outputs to {}", path.display());
                let file_err = |source| OutputError::File {
                    path: path.display().to_string(),
                    source,
                };
                let mut file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(file_err)?;
                file.write_all(rendered.as_bytes()).map_err(file_err)?;
            }
            OutputSink::Stdout => {
                let stdout = io::stdout();
                let mut lock = stdout.lock();
                lock.write_all(rendered.as_bytes())
                    .and_then(|_| lock.flush())
                    .map_err(OutputError::Stdout)?;
            }
        }

        for (name, value) in output_entries(result) {
            info!("Output '{}': {}", name, value);
        }
        Ok(())
    }
}

/// Output entries for a result, in emission order
pub fn output_entries(result: &ValidationResult) -> [(&'static str, String); 3] {
    [
        (OUTPUT_VALIDATION_STATUS, result.status.to_string()),
        (OUTPUT_ROWS_COUNT, result.row_count.to_string()),
        (OUTPUT_COLUMNS_FOUND, result.column_count.to_string()),
    ]
}
