//! Product catalog types shared by the receiving, picking, and expiration
//! workflows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product category, used for grouping and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Dairy,
    Produce,
    MeatDeli,
    Bakery,
    PackagedGoods,
    Frozen,
    Beverages,
    Other,
}

impl ProductCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductCategory::Dairy => "Dairy",
            ProductCategory::Produce => "Produce",
            ProductCategory::MeatDeli => "Meat/Deli",
            ProductCategory::Bakery => "Bakery",
            ProductCategory::PackagedGoods => "Packaged Goods",
            ProductCategory::Frozen => "Frozen",
            ProductCategory::Beverages => "Beverages",
            ProductCategory::Other => "Other",
        }
    }
}

/// A stocked product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub upc: String,
    pub sku: String,
    pub category: ProductCategory,
    /// Unit price in USD.
    pub price: f64,
    /// Shelf location, e.g. "Aisle 5, Bay 3".
    pub location: String,
    #[serde(default)]
    pub expiration_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub stock_level: Option<i32>,
    #[serde(default)]
    pub reorder_point: Option<i32>,
}
