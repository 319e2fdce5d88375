//! Column-count validator
//!
//! Reads a delimited file with a header row, counts data rows and header
//! columns, and compares the column count against an expected value.
//!
//! Every failure is folded into a [`ValidationStatus`]; callers always get a
//! [`ValidationResult`] back.

mod request;
mod status;
mod table;
mod validate;

pub use request::{
    parse_delimiter, parse_expected_columns, InputError, ValidationInputs, ValidationRequest,
};
pub use status::{ExceptionKind, ValidationResult, ValidationStatus};
pub use table::{read_table_shape, TableError, TableShape};
pub use validate::{validate, validate_inputs};

/// Default field delimiter
pub const DEFAULT_DELIMITER: u8 = b',';
