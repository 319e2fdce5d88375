//! CLI mode dispatch
//!
//! Dispatches to the mode handlers:
//! - validate: check the CSV file and write action outputs
//! - inventory: run the inventory demo

use std::panic::{self, AssertUnwindSafe};
use tracing::{error, info};

use crate::action_outputs::OutputSink;
use crate::cli::{
    Command, Error, InventoryArgs, Result, ValidateArgs, EXIT_FAILURE, EXIT_OUTPUT_ERROR,
    EXIT_SUCCESS,
};
use crate::inventory::run_inventory_demo;
use crate::validator::{validate_inputs, ValidationInputs, ValidationResult};

/// Exit code wrapper for CLI operations
pub type ExitCode = i32;

/// Run the selected mode and return its exit code
pub fn run(command: Command) -> ExitCode {
    match command {
        Command::Validate(args) => run_validate_mode(&args),
        Command::Inventory(args) => match run_inventory_mode(&args) {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => {
                error!("{}", e);
                EXIT_FAILURE
            }
        },
    }
}

/// Exit code for a validation result under the chosen policy
///
/// Without `fail_on_failure` the status alone tells callers what happened
/// and the process always succeeds.
pub fn exit_code_for(result: &ValidationResult, fail_on_failure: bool) -> ExitCode {
    if fail_on_failure && !result.status.is_success() {
        EXIT_FAILURE
    } else {
        EXIT_SUCCESS
    }
}

fn run_validate_mode(args: &ValidateArgs) -> ExitCode {
    info!("--- CSV validator starting ---");

    let result = validate_guarded(&args.to_inputs());

    info!("Setting action outputs...");
    if let Err(e) = emit_outputs(&result, args.json) {
        error!("{}", e);
        return EXIT_OUTPUT_ERROR;
    }

    info!("--- CSV validator finished ---");
    exit_code_for(&result, args.fail_on_failure)
}

/// Validate, turning a panic into the default `unknown` result
fn validate_guarded(inputs: &ValidationInputs) -> ValidationResult {
    unknown_on_panic(|| validate_inputs(inputs))
}

/// Run `check`, falling back to the default `unknown` result if it panics
pub fn unknown_on_panic<F>(check: F) -> ValidationResult
where
    F: FnOnce() -> ValidationResult,
{
    panic::catch_unwind(AssertUnwindSafe(check)).unwrap_or_else(|_| {
        error!("Validation aborted before a status was assigned");
        ValidationResult::default()
    })
}

fn emit_outputs(result: &ValidationResult, json: bool) -> Result<()> {
    OutputSink::from_env().emit(result)?;

    if json {
        println!("{}", serde_json::to_string(result)?);
    }
    Ok(())
}

fn run_inventory_mode(args: &InventoryArgs) -> Result<()> {
    info!("--- Inventory demo starting ---");
    let path = run_inventory_demo(&args.output_dir).map_err(Error::Inventory)?;
    info!("--- Inventory demo finished: {} ---", path.display());
    Ok(())
}
