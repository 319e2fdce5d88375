//! validate: compare a file's column count against an expected value
//!
//! Never returns an error. Each check logs what it looked at, and the first
//! failing check decides the status.

use tracing::{error, info};

use super::request::{ValidationInputs, ValidationRequest};
use super::status::{ValidationResult, ValidationStatus};
use super::table::{read_table_shape, TableError};

/// Validate raw inputs
///
/// Converts the inputs into a [`ValidationRequest`] and runs [`validate`].
/// Malformed or missing inputs short-circuit with zero counts.
pub fn validate_inputs(inputs: &ValidationInputs) -> ValidationResult {
    match ValidationRequest::try_from(inputs) {
        Ok(request) => validate(&request),
        Err(e) => {
            error!("{}", e);
            ValidationResult::failed(ValidationStatus::from(&e))
        }
    }
}

/// Validate one request
///
/// # Returns
/// * `success` - header column count equals the expected count
/// * `column_mismatch` - file read fine but the counts differ
/// * `missing_input_path` / `file_not_found` / `exception_<kind>` - the
///   file could not be read; counts are zero
pub fn validate(request: &ValidationRequest) -> ValidationResult {
    if request.path().as_os_str().is_empty() {
        error!("{}", super::InputError::MissingPath);
        return ValidationResult::failed(ValidationStatus::MissingInputPath);
    }

    let path = request.path().display();
    let expected = request.expected_column_count();
    info!("Input CSV Path: {}", path);
    info!("Input Expected Columns: {}", expected);

    info!("Reading CSV file: {}", path);
    let shape = match read_table_shape(request.path(), request.delimiter()) {
        Ok(shape) => shape,
        Err(e @ TableError::NotFound(_)) => {
            error!("{}", e);
            return ValidationResult::failed(ValidationStatus::from(&e));
        }
        Err(e) => {
            error!(kind = %e.kind(), "An unexpected error occurred: {}", e);
            return ValidationResult::failed(ValidationStatus::from(&e));
        }
    };

    info!(
        "File read successfully. Rows found: {}, Columns found: {}",
        shape.rows, shape.columns
    );

    let status = if shape.columns == expected {
        info!(
            "Validation successful: Found {} columns as expected.",
            shape.columns
        );
        ValidationStatus::Success
    } else {
        error!(
            "Validation failed: Expected {} columns, but found {}.",
            expected, shape.columns
        );
        ValidationStatus::ColumnMismatch
    };

    ValidationResult {
        status,
        row_count: shape.rows,
        column_count: shape.columns,
    }
}
