//! Workspace-wide constants.

/// Feature names the assembler knows how to supply. The serialized feature
/// list decides which of these (and in what order) the model receives.
pub mod features {
    pub const YEAR: &str = "Year";
    pub const MONTH: &str = "Month";
    pub const STORE_ENC: &str = "Store_enc";
    pub const PRODUCT_ENC: &str = "Product_enc";
    pub const INVENTORY_LEVEL: &str = "Inventory Level";
    pub const PRICE: &str = "Price";
    pub const DISCOUNT: &str = "Discount";
    pub const HOLIDAY_SEASON: &str = "Holiday_Season";
    pub const PREV_UNITS_SOLD: &str = "Prev_Units_Sold";
}

/// Months treated as holiday season when the model asks for the flag.
pub const HOLIDAY_MONTHS: [u32; 2] = [11, 12];

/// A prediction below this fraction of the global mean advises stocking less.
pub const DEFAULT_STOCK_LESS_RATIO: f64 = 0.9;
