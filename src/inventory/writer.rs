//! Writing and displaying inventory tables

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use super::item::{InventoryItem, ProcessedItem};

/// File name written inside the output directory
pub const OUTPUT_FILE_NAME: &str = "transformed_inventory.csv";

/// Errors that can occur while writing the inventory
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Write processed rows to `<dir>/transformed_inventory.csv`
///
/// Creates `dir` and its parents if missing. Overwrites an existing file.
pub fn write_inventory(dir: &Path, rows: &[ProcessedItem]) -> Result<PathBuf, WriteError> {
    if !dir.exists() {
        info!("Creating output directory: {}", dir.display());
        fs::create_dir_all(dir)?;
    }

    let path = dir.join(OUTPUT_FILE_NAME);
    let mut writer = csv::Writer::from_path(&path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(path)
}

/// Anything that can be shown as one row of a text table
pub trait TableRow {
    fn headers() -> Vec<&'static str>;
    fn cells(&self) -> Vec<String>;
}

impl TableRow for InventoryItem {
    fn headers() -> Vec<&'static str> {
        vec![
            "product_id",
            "product_name",
            "category",
            "unit_price",
            "stock_quantity",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.product_id.clone(),
            self.product_name.clone(),
            self.category.clone(),
            format!("{:.2}", self.unit_price),
            self.stock_quantity.to_string(),
        ]
    }
}

impl TableRow for ProcessedItem {
    fn headers() -> Vec<&'static str> {
        vec![
            "product_id",
            "product_name",
            "category",
            "unit_price",
            "stock_quantity",
            "total_stock_value",
            "price_category",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.product_id.clone(),
            self.product_name.clone(),
            self.category.clone(),
            format!("{:.2}", self.unit_price),
            self.stock_quantity.to_string(),
            format!("{:.2}", self.total_stock_value),
            self.price_category.to_string(),
        ]
    }
}

/// Render rows as a right-aligned text table with an index column
pub fn format_table<T: TableRow>(rows: &[T]) -> String {
    let headers = T::headers();
    let cells: Vec<Vec<String>> = rows.iter().map(|r| r.cells()).collect();

    let index_width = rows.len().saturating_sub(1).to_string().len();
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            cells
                .iter()
                .map(|row| row[i].len())
                .chain(std::iter::once(h.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = format!("{:>width$}", "", width = index_width);
    for (h, w) in headers.iter().zip(&widths) {
        out.push_str(&format!("  {:>width$}", h, width = w));
    }
    for (idx, row) in cells.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!("{:>width$}", idx, width = index_width));
        for (cell, w) in row.iter().zip(&widths) {
            out.push_str(&format!("  {:>width$}", cell, width = w));
        }
    }
    out
}
