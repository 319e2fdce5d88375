//! table shape: count header columns and data rows of a delimited file
//!
//! Reads the whole file through the `csv` reader. The header row defines the
//! column count. Short rows are tolerated, rows wider than the header are not.

use std::path::Path;
use thiserror::Error;

use super::status::{ExceptionKind, ValidationStatus};

/// Errors that can occur while reading a table
#[derive(Error, Debug)]
pub enum TableError {
    #[error("CSV file not found at '{0}'")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid UTF-8: {0}")]
    InvalidUtf8(String),

    #[error("Error tokenizing data: {0}")]
    Parser(String),

    #[error("No columns to parse from file")]
    EmptyData,
}

impl TableError {
    /// Exception category for unexpected read failures
    pub fn kind(&self) -> ExceptionKind {
        match self {
            TableError::NotFound(_) | TableError::Io(_) => ExceptionKind::IoError,
            TableError::InvalidUtf8(_) => ExceptionKind::Utf8Error,
            TableError::Parser(_) => ExceptionKind::ParserError,
            TableError::EmptyData => ExceptionKind::EmptyDataError,
        }
    }
}

impl From<&TableError> for ValidationStatus {
    fn from(err: &TableError) -> Self {
        match err {
            TableError::NotFound(_) => ValidationStatus::FileNotFound,
            other => ValidationStatus::Exception(other.kind()),
        }
    }
}

impl From<csv::Error> for TableError {
    fn from(err: csv::Error) -> Self {
        match err.into_kind() {
            csv::ErrorKind::Io(e) => TableError::Io(e),
            csv::ErrorKind::Utf8 { pos, err } => match pos {
                Some(pos) => TableError::InvalidUtf8(format!("line {}: {}", pos.line(), err)),
                None => TableError::InvalidUtf8(err.to_string()),
            },
            other => TableError::Parser(format!("{:?}", other)),
        }
    }
}

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;

/// UTF-8 byte order mark, dropped from the first header
const UTF8_BOM: char = '\u{feff}';

/// Row and column counts of a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableShape {
    /// Data rows, header excluded; blank lines are not rows
    pub rows: usize,
    /// Header columns
    pub columns: usize,
    /// Header names, in file order
    pub headers: Vec<String>,
}

/// Read a delimited file and return its shape
///
/// # Arguments
/// * `path` - Path to the file
/// * `delimiter` - Field delimiter byte
///
/// # Returns
/// * `Ok(TableShape)` - Data row and header column counts
/// * `Err(TableError)` - Missing file, unreadable content, or no header
pub fn read_table_shape(path: &Path, delimiter: u8) -> Result<TableShape> {
    if !path.exists() {
        return Err(TableError::NotFound(path.display().to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| match i {
            0 => h.trim_start_matches(UTF8_BOM).to_string(),
            _ => h.to_string(),
        })
        .collect();

    // a BOM with nothing after it leaves one empty header
    let columns = headers.len();
    if columns == 0 || (columns == 1 && headers[0].is_empty()) {
        return Err(TableError::EmptyData);
    }

    let mut rows = 0;
    for record in reader.records() {
        let record = record?;
        if record.len() > columns {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            return Err(TableError::Parser(format!(
                "Expected {} fields in line {}, saw {}",
                columns,
                line,
                record.len()
            )));
        }
        rows += 1;
    }

    Ok(TableShape {
        rows,
        columns,
        headers,
    })
}
