//! CLI module
//!
//! Provides:
//! - Argument parsing (flags backed by `INPUT_*` action variables)
//! - Logging setup
//! - Mode dispatch (validate, inventory) and exit codes

pub mod args;
pub mod dispatch;
pub mod logging;

// Re-exports
pub use args::{Cli, Command, InventoryArgs, ValidateArgs};
pub use dispatch::{exit_code_for, run, unknown_on_panic, ExitCode};
pub use logging::{init_logging, LogFormat, LOG_FORMAT_ENV};

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error(transparent)]
    Outputs(#[from] crate::action_outputs::OutputError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Inventory demo failed: {0:#}")]
    Inventory(anyhow::Error),
}

/// Exit codes (deterministic)
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_OUTPUT_ERROR: i32 = 2;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, Error>;
