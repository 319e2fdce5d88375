//! Inventory row types and the fixed sample table

use serde::{Deserialize, Serialize};
use std::fmt;

/// One product in the source inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub product_id: String,
    pub product_name: String,
    pub category: String,
    pub unit_price: f64,
    pub stock_quantity: u32,
}

impl InventoryItem {
    pub fn new(
        product_id: &str,
        product_name: &str,
        category: &str,
        unit_price: f64,
        stock_quantity: u32,
    ) -> Self {
        Self {
            product_id: product_id.to_string(),
            product_name: product_name.to_string(),
            category: category.to_string(),
            unit_price,
            stock_quantity,
        }
    }
}

/// Price band derived from the unit price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceCategory {
    Low,
    Medium,
    High,
}

impl fmt::Display for PriceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PriceCategory::Low => "Low",
            PriceCategory::Medium => "Medium",
            PriceCategory::High => "High",
        };
        f.write_str(s)
    }
}

/// Inventory row with the two derived columns
///
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedItem {
    pub product_id: String,
    pub product_name: String,
    pub category: String,
    pub unit_price: f64,
    pub stock_quantity: u32,
    pub total_stock_value: f64,
    pub price_category: PriceCategory,
}

/// The six-product sample inventory
pub fn sample_inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem::new("P001", "SuperWidget", "Widgets", 19.99, 150),
        InventoryItem::new("P002", "MegaDevice", "Devices", 120.50, 30),
        InventoryItem::new("P003", "FlexiGizmo", "Gizmos", 45.00, 75),
        InventoryItem::new("P004", "RoboArm", "Robotics", 899.00, 10),
        InventoryItem::new("P005", "DataStreamer", "Data", 250.75, 22),
        InventoryItem::new("P006", "AI-Core", "AI", 1500.00, 5),
    ]
}
