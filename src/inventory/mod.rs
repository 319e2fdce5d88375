//! Inventory demo: build a sample table, derive columns, write CSV
//!
//! The pipeline is fixed and deterministic. Only the output directory is
//! configurable.

mod item;
mod transform;
mod writer;

pub use item::{sample_inventory, InventoryItem, PriceCategory, ProcessedItem};
pub use transform::{categorize_price, process_inventory, LOW_PRICE_LIMIT, MEDIUM_PRICE_LIMIT};
pub use writer::{format_table, write_inventory, TableRow, WriteError, OUTPUT_FILE_NAME};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "processed_data_output";

/// Run the whole demo pipeline and return the written file path
pub fn run_inventory_demo(output_dir: &Path) -> Result<PathBuf> {
    info!("Step 1: Generating sample inventory data...");
    let items = sample_inventory();
    info!("Original inventory:\n{}", format_table(&items));

    info!("Step 2: Performing transformations...");
    let processed = process_inventory(&items);
    info!("Transformed inventory:\n{}", format_table(&processed));

    let path = write_inventory(output_dir, &processed).with_context(|| {
        format!(
            "failed to write inventory under '{}'",
            output_dir.display()
        )
    })?;
    info!("Step 3: Processed data saved to: {}", path.display());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_run_inventory_demo() {
        let temp_dir = TempDir::new().unwrap();
        let out_dir = temp_dir.path().join(DEFAULT_OUTPUT_DIR);

        let path = run_inventory_demo(&out_dir).unwrap();
        assert_eq!(path, out_dir.join(OUTPUT_FILE_NAME));

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<ProcessedItem> = reader.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(rows, process_inventory(&sample_inventory()));
    }

    #[test]
    fn test_run_inventory_demo_unwritable_dir() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("file");
        std::fs::write(&blocker, "not a dir").unwrap();

        let err = run_inventory_demo(&blocker.join("out")).unwrap_err();
        assert!(err.to_string().contains("failed to write inventory"));
    }
}
