//! Row types for the historical sales table.

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

/// Columns the loader refuses to run without. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Date",
    "Store ID",
    "Product ID",
    "Inventory Level",
    "Price",
    "Discount",
    "Units Sold",
];

/// One CSV row as written on disk, date still a string.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Store ID")]
    pub store_id: String,
    #[serde(rename = "Product ID")]
    pub product_id: String,
    #[serde(rename = "Inventory Level")]
    pub inventory_level: f64,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Discount")]
    pub discount: f64,
    #[serde(rename = "Units Sold")]
    pub units_sold: f64,
}

/// One retained row, with Year and Month derived from the parsed date.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRow {
    pub date: NaiveDate,
    pub year: i32,
    pub month: u32,
    pub store_id: String,
    pub product_id: String,
    pub inventory_level: f64,
    pub price: f64,
    pub discount: f64,
    pub units_sold: f64,
}

impl SalesRow {
    /// Promote a raw record once its date has parsed.
    pub fn from_raw(raw: RawRecord, date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            date,
            store_id: raw.store_id,
            product_id: raw.product_id,
            inventory_level: raw.inventory_level,
            price: raw.price,
            discount: raw.discount,
            units_sold: raw.units_sold,
        }
    }
}
