//! CLI argument parsing
//!
//! ```text
//! csvcheck [validate options]             validate (default)
//! csvcheck validate [validate options]
//! csvcheck inventory [--output-dir <dir>]
//! ```
//!
//! Every validate option falls back to the matching `INPUT_*` variable a
//! CI runner sets for action inputs. An explicit flag wins.

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::inventory::DEFAULT_OUTPUT_DIR;
use crate::validator::ValidationInputs;

/// Parsed command line
#[derive(Debug, Parser)]
#[command(name = "csvcheck", version, about = "Check a CSV file's column count")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub validate: ValidateArgs,
}

impl Cli {
    /// Selected command; bare invocation validates
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Validate(self.validate))
    }
}

/// CLI modes
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a CSV file's column count and write action outputs
    Validate(ValidateArgs),

    /// Generate, transform and save the sample inventory
    Inventory(InventoryArgs),
}

/// Options for validate mode
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to the CSV file
    #[arg(long, env = "INPUT_CSV_FILE_PATH")]
    pub csv_file_path: Option<String>,

    /// Expected number of columns
    #[arg(long, env = "INPUT_EXPECTED_COLUMNS")]
    pub expected_columns: Option<String>,

    /// Field delimiter (single ASCII character, or "tab"; default ",")
    ///
    /// Checked during validation so a bad value still produces outputs.
    #[arg(long, env = "INPUT_DELIMITER")]
    pub delimiter: Option<String>,

    /// Exit non-zero when the status is anything but success
    ///
    /// From the environment, any value other than a false-like word
    /// ("false", "0", "no", "off", "n", "f" or empty) turns this on.
    #[arg(
        long,
        env = "INPUT_FAIL_ON_FAILURE",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub fail_on_failure: bool,

    /// Also print the result as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

impl ValidateArgs {
    pub fn to_inputs(&self) -> ValidationInputs {
        ValidationInputs {
            csv_file_path: self.csv_file_path.clone(),
            expected_columns: self.expected_columns.clone(),
            delimiter: self.delimiter.clone(),
        }
    }
}

/// Options for inventory mode
#[derive(Debug, Clone, Args)]
pub struct InventoryArgs {
    /// Directory the transformed CSV is written to
    #[arg(long, env = "INVENTORY_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,
}
