//! csvcheck: column-count validation for delimited files in CI
//!
//! This library provides the pieces behind the `csvcheck` action binary:
//! a validator that never fails past its boundary, the action output
//! channel, and the inventory demo pipeline.

pub mod action_outputs;
pub mod cli;
pub mod inventory;
pub mod validator;

// Re-export the validator surface for convenience
pub use validator::{
    validate, validate_inputs, ExceptionKind, InputError, TableError, TableShape,
    ValidationInputs, ValidationRequest, ValidationResult, ValidationStatus,
};

// Re-export action outputs
pub use action_outputs::{OutputError, OutputSink};

// Re-export the inventory demo
pub use inventory::{run_inventory_demo, InventoryItem, PriceCategory, ProcessedItem};
