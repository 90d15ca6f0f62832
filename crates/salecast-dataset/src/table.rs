//! In-memory sales table implementing `SalesHistory`.

use salecast_core::traits::{PairStats, SalesHistory};

use crate::record::SalesRow;

/// The retained historical rows plus the global mean, computed once.
#[derive(Debug, Clone)]
pub struct SalesTable {
    rows: Vec<SalesRow>,
    global_mean_units: f64,
}

impl SalesTable {
    /// Build a table from retained rows. The global mean units sold is
    /// computed here and never recomputed.
    pub fn new(rows: Vec<SalesRow>) -> Self {
        let global_mean_units = if rows.is_empty() {
            0.0
        } else {
            rows.iter().map(|r| r.units_sold).sum::<f64>() / rows.len() as f64
        };
        Self {
            rows,
            global_mean_units,
        }
    }

    /// Number of retained rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All retained rows, in file order.
    pub fn rows(&self) -> &[SalesRow] {
        &self.rows
    }

    fn sorted_unique<T, F>(&self, f: F) -> Vec<T>
    where
        T: Ord + Clone,
        F: Fn(&SalesRow) -> T,
    {
        let mut values: Vec<T> = self.rows.iter().map(f).collect();
        values.sort();
        values.dedup();
        values
    }
}

impl SalesHistory for SalesTable {
    fn pair_stats(&self, store_id: &str, product_id: &str) -> Option<PairStats> {
        let matching: Vec<&SalesRow> = self
            .rows
            .iter()
            .filter(|r| r.store_id == store_id && r.product_id == product_id)
            .collect();
        if matching.is_empty() {
            return None;
        }

        let n = matching.len() as f64;
        Some(PairStats {
            row_count: matching.len(),
            mean_inventory_level: matching.iter().map(|r| r.inventory_level).sum::<f64>() / n,
            mean_price: matching.iter().map(|r| r.price).sum::<f64>() / n,
            mean_discount: matching.iter().map(|r| r.discount).sum::<f64>() / n,
            // Last matching row in file order.
            last_units_sold: matching.last().map(|r| r.units_sold).unwrap_or(0.0),
        })
    }

    fn global_mean_units(&self) -> f64 {
        self.global_mean_units
    }

    fn store_ids(&self) -> Vec<String> {
        self.sorted_unique(|r| r.store_id.clone())
    }

    fn product_ids(&self) -> Vec<String> {
        self.sorted_unique(|r| r.product_id.clone())
    }

    fn months(&self) -> Vec<u32> {
        self.sorted_unique(|r| r.month)
    }
}
