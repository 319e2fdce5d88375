//! Action outputs: report a validation result to the CI runner
//!
//! Outputs go to the file named by `GITHUB_OUTPUT` when it is set,
//! otherwise to stdout as legacy `::set-output` workflow commands.

mod sink;

pub use sink::{output_entries, OutputError, OutputSink, Result, GITHUB_OUTPUT_ENV};

/// Output names, in emission order
pub const OUTPUT_VALIDATION_STATUS: &str = "validation_status";
pub const OUTPUT_ROWS_COUNT: &str = "rows_count";
pub const OUTPUT_COLUMNS_FOUND: &str = "columns_found";
