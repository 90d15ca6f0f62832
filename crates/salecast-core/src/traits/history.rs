use serde::{Deserialize, Serialize};

/// Aggregates over the historical rows matching one (store, product) pair.
///
/// All means are arithmetic means over the matching rows; `last_units_sold`
/// is taken from the last matching row in file order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairStats {
    /// Number of matching rows.
    pub row_count: usize,
    /// Mean inventory level.
    pub mean_inventory_level: f64,
    /// Mean price.
    pub mean_price: f64,
    /// Mean discount.
    pub mean_discount: f64,
    /// Units sold in the last matching row.
    pub last_units_sold: f64,
}

/// Read-only access to the historical sales table.
///
/// Loaded once at startup; implementations are queried synchronously per
/// interaction and never mutated afterwards.
pub trait SalesHistory: Send + Sync {
    /// Aggregates for one (store, product) pair, or `None` when no rows match.
    fn pair_stats(&self, store_id: &str, product_id: &str) -> Option<PairStats>;

    /// Mean units sold over every retained row. Threshold base for advice.
    fn global_mean_units(&self) -> f64;

    /// Sorted, de-duplicated store identifiers.
    fn store_ids(&self) -> Vec<String>;

    /// Sorted, de-duplicated product identifiers.
    fn product_ids(&self) -> Vec<String>;

    /// Sorted, de-duplicated months present in the history.
    fn months(&self) -> Vec<u32>;
}
