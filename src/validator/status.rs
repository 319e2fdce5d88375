//! Validation status and result types

use serde::{Serialize, Serializer};
use std::fmt;

/// Category of an unexpected failure while reading the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExceptionKind {
    /// Operating system level read failure
    IoError,
    /// File content is not valid UTF-8
    Utf8Error,
    /// A data row could not be tokenized against the header
    ParserError,
    /// No header row to read columns from
    EmptyDataError,
}

impl ExceptionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExceptionKind::IoError => "IoError",
            ExceptionKind::Utf8Error => "Utf8Error",
            ExceptionKind::ParserError => "ParserError",
            ExceptionKind::EmptyDataError => "EmptyDataError",
        }
    }
}

impl fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal classification of one validation attempt
///
/// The `Display` form is the value written to the `validation_status`
/// action output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValidationStatus {
    /// No status was assigned
    #[default]
    Unknown,
    Success,
    ColumnMismatch,
    MissingInputPath,
    MissingInputColumns,
    InvalidColumnType,
    InvalidDelimiter,
    FileNotFound,
    Exception(ExceptionKind),
}

impl ValidationStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, ValidationStatus::Success)
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationStatus::Unknown => f.write_str("unknown"),
            ValidationStatus::Success => f.write_str("success"),
            ValidationStatus::ColumnMismatch => f.write_str("column_mismatch"),
            ValidationStatus::MissingInputPath => f.write_str("missing_input_path"),
            ValidationStatus::MissingInputColumns => f.write_str("missing_input_columns"),
            ValidationStatus::InvalidColumnType => f.write_str("invalid_column_type"),
            ValidationStatus::InvalidDelimiter => f.write_str("invalid_delimiter"),
            ValidationStatus::FileNotFound => f.write_str("file_not_found"),
            ValidationStatus::Exception(kind) => write!(f, "exception_{}", kind),
        }
    }
}

impl Serialize for ValidationStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Result of one validation attempt
///
/// Counts stay at zero unless the file was read successfully.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationResult {
    /// Final status
    pub status: ValidationStatus,
    /// Number of data rows (header excluded)
    pub row_count: usize,
    /// Number of header columns
    pub column_count: usize,
}

impl ValidationResult {
    /// Result for a check that short-circuited before the file was read
    pub fn failed(status: ValidationStatus) -> Self {
        Self {
            status,
            row_count: 0,
            column_count: 0,
        }
    }
}
