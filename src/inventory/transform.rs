//! Derived columns: stock value and price band

use super::item::{InventoryItem, PriceCategory, ProcessedItem};

/// Upper bound (exclusive) of the Low band
pub const LOW_PRICE_LIMIT: f64 = 50.0;
/// Upper bound (exclusive) of the Medium band
pub const MEDIUM_PRICE_LIMIT: f64 = 300.0;

/// Classify a unit price
pub fn categorize_price(price: f64) -> PriceCategory {
    if price < LOW_PRICE_LIMIT {
        PriceCategory::Low
    } else if price < MEDIUM_PRICE_LIMIT {
        PriceCategory::Medium
    } else {
        PriceCategory::High
    }
}

/// Add `total_stock_value` and `price_category` to every row, keeping order
pub fn process_inventory(items: &[InventoryItem]) -> Vec<ProcessedItem> {
    items
        .iter()
        .map(|item| ProcessedItem {
            product_id: item.product_id.clone(),
            product_name: item.product_name.clone(),
            category: item.category.clone(),
            unit_price: item.unit_price,
            stock_quantity: item.stock_quantity,
            total_stock_value: item.unit_price * f64::from(item.stock_quantity),
            price_category: categorize_price(item.unit_price),
        })
        .collect()
}
