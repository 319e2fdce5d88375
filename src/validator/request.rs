//! Validation inputs and request construction
//!
//! Raw inputs arrive as optional strings (environment or flags). Turning
//! them into a [`ValidationRequest`] is where missing and malformed inputs
//! are detected.

use std::path::{Path, PathBuf};
use thiserror::Error;

use super::status::ValidationStatus;
use super::DEFAULT_DELIMITER;

/// Errors from converting raw inputs into a request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("'csv_file_path' input is missing")]
    MissingPath,

    #[error("'expected_columns' input is missing")]
    MissingExpectedColumns,

    #[error("'expected_columns' ({0}) must be a non-negative integer")]
    InvalidExpectedColumns(String),

    #[error("'delimiter' ({0}) must be a single ASCII character or \"tab\"")]
    InvalidDelimiter(String),
}

impl From<&InputError> for ValidationStatus {
    fn from(err: &InputError) -> Self {
        match err {
            InputError::MissingPath => ValidationStatus::MissingInputPath,
            InputError::MissingExpectedColumns => ValidationStatus::MissingInputColumns,
            InputError::InvalidExpectedColumns(_) => ValidationStatus::InvalidColumnType,
            InputError::InvalidDelimiter(_) => ValidationStatus::InvalidDelimiter,
        }
    }
}

/// Raw validator inputs, before any checking
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationInputs {
    /// Path to the delimited file
    pub csv_file_path: Option<String>,
    /// Expected column count, as supplied
    pub expected_columns: Option<String>,
    /// Field delimiter, as supplied; unset or empty means `,`
    pub delimiter: Option<String>,
}

impl ValidationInputs {
    pub fn new(csv_file_path: Option<String>, expected_columns: Option<String>) -> Self {
        Self {
            csv_file_path,
            expected_columns,
            ..Self::default()
        }
    }
}

/// A well-formed validation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRequest {
    path: PathBuf,
    expected_column_count: usize,
    delimiter: u8,
}

impl ValidationRequest {
    pub fn new(path: impl Into<PathBuf>, expected_column_count: usize) -> Self {
        Self {
            path: path.into(),
            expected_column_count,
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Same request with a different field delimiter
    pub fn with_delimiter(self, delimiter: u8) -> Self {
        Self { delimiter, ..self }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn expected_column_count(&self) -> usize {
        self.expected_column_count
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }
}

impl TryFrom<&ValidationInputs> for ValidationRequest {
    type Error = InputError;

    /// Checks run in a fixed order: path, expected columns presence,
    /// expected columns format, delimiter.
    fn try_from(inputs: &ValidationInputs) -> Result<Self, Self::Error> {
        let path = match inputs.csv_file_path.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => return Err(InputError::MissingPath),
        };

        let raw_expected = match inputs.expected_columns.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => return Err(InputError::MissingExpectedColumns),
        };

        let expected = parse_expected_columns(raw_expected)?;

        let delimiter = match inputs.delimiter.as_deref() {
            Some(d) if !d.is_empty() => parse_delimiter(d)?,
            _ => DEFAULT_DELIMITER,
        };

        Ok(ValidationRequest::new(path, expected).with_delimiter(delimiter))
    }
}

/// Parse an expected column count
///
/// Accepts surrounding whitespace and a leading sign, so `-0` is zero.
/// Negative numbers, decimals and anything else non-numeric are rejected.
pub fn parse_expected_columns(raw: &str) -> Result<usize, InputError> {
    let invalid = || InputError::InvalidExpectedColumns(raw.to_string());
    let value = raw.trim().parse::<i64>().map_err(|_| invalid())?;
    usize::try_from(value).map_err(|_| invalid())
}

/// Parse a delimiter into a single byte
///
/// `tab` and `\t` (escaped or literal) select a tab.
pub fn parse_delimiter(raw: &str) -> Result<u8, InputError> {
    match raw {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii() => Ok(c as u8),
                _ => Err(InputError::InvalidDelimiter(raw.to_string())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(path: Option<&str>, expected: Option<&str>) -> ValidationInputs {
        ValidationInputs::new(path.map(String::from), expected.map(String::from))
    }

    #[test]
    fn test_parse_expected_columns_plain() {
        assert_eq!(parse_expected_columns("3"), Ok(3));
        assert_eq!(parse_expected_columns("0"), Ok(0));
    }

    #[test]
    fn test_parse_expected_columns_whitespace_and_sign() {
        assert_eq!(parse_expected_columns(" 7 "), Ok(7));
        assert_eq!(parse_expected_columns("+4"), Ok(4));
    }

    #[test]
    fn test_parse_expected_columns_negative_zero() {
        assert_eq!(parse_expected_columns("-0"), Ok(0));
        assert_eq!(parse_expected_columns(" -00 "), Ok(0));
    }

    #[test]
    fn test_parse_expected_columns_rejects_non_integers() {
        for raw in ["three", "3.0", "-1", "", "   ", "3a"] {
            assert_eq!(
                parse_expected_columns(raw),
                Err(InputError::InvalidExpectedColumns(raw.to_string())),
                "expected rejection for {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_request_from_inputs() {
        let request = ValidationRequest::try_from(&inputs(Some("data.csv"), Some("3"))).unwrap();
        assert_eq!(request.path(), Path::new("data.csv"));
        assert_eq!(request.expected_column_count(), 3);
        assert_eq!(request.delimiter(), b',');
    }

    #[test]
    fn test_request_keeps_delimiter() {
        let mut raw = inputs(Some("data.tsv"), Some("2"));
        raw.delimiter = Some("tab".to_string());
        let request = ValidationRequest::try_from(&raw).unwrap();
        assert_eq!(request.delimiter(), b'\t');
    }

    #[test]
    fn test_empty_delimiter_means_comma() {
        let mut raw = inputs(Some("data.csv"), Some("2"));
        raw.delimiter = Some(String::new());
        let request = ValidationRequest::try_from(&raw).unwrap();
        assert_eq!(request.delimiter(), b',');
    }

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(","), Ok(b','));
        assert_eq!(parse_delimiter(";"), Ok(b';'));
        assert_eq!(parse_delimiter("tab"), Ok(b'\t'));
        assert_eq!(parse_delimiter("\\t"), Ok(b'\t'));
        for raw in [",,", "ab", "é"] {
            assert_eq!(
                parse_delimiter(raw),
                Err(InputError::InvalidDelimiter(raw.to_string()))
            );
        }
    }

    #[test]
    fn test_invalid_delimiter_checked_after_columns() {
        let mut raw = inputs(Some("data.csv"), Some("x"));
        raw.delimiter = Some("ab".to_string());
        let err = ValidationRequest::try_from(&raw).unwrap_err();
        assert!(matches!(err, InputError::InvalidExpectedColumns(_)));

        raw.expected_columns = Some("2".to_string());
        let err = ValidationRequest::try_from(&raw).unwrap_err();
        assert_eq!(err, InputError::InvalidDelimiter("ab".to_string()));
        assert_eq!(ValidationStatus::from(&err), ValidationStatus::InvalidDelimiter);
    }

    #[test]
    fn test_missing_path_checked_first() {
        let err = ValidationRequest::try_from(&inputs(None, None)).unwrap_err();
        assert_eq!(err, InputError::MissingPath);

        let err = ValidationRequest::try_from(&inputs(Some(""), Some("x"))).unwrap_err();
        assert_eq!(err, InputError::MissingPath);
    }

    #[test]
    fn test_missing_expected_columns() {
        let err = ValidationRequest::try_from(&inputs(Some("a.csv"), None)).unwrap_err();
        assert_eq!(err, InputError::MissingExpectedColumns);

        let err = ValidationRequest::try_from(&inputs(Some("a.csv"), Some(""))).unwrap_err();
        assert_eq!(err, InputError::MissingExpectedColumns);
    }

    #[test]
    fn test_input_errors_map_to_status() {
        assert_eq!(
            ValidationStatus::from(&InputError::MissingPath),
            ValidationStatus::MissingInputPath
        );
        assert_eq!(
            ValidationStatus::from(&InputError::MissingExpectedColumns),
            ValidationStatus::MissingInputColumns
        );
        assert_eq!(
            ValidationStatus::from(&InputError::InvalidExpectedColumns("x".into())),
            ValidationStatus::InvalidColumnType
        );
    }
}
