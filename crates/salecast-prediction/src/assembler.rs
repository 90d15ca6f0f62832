//! Builds the per-request feature vector.
//!
//! The base features are always supplied; `Holiday_Season` and
//! `Prev_Units_Sold` are supplied only when the serialized feature list
//! names them, matching the artifacts the model was trained with.

use salecast_core::constants::{features, HOLIDAY_MONTHS};
use salecast_core::traits::PairStats;
use salecast_model::{FeatureList, FeatureVector};

use crate::request::ForecastRequest;

/// Assemble the named feature values for one request.
pub fn assemble(
    request: &ForecastRequest,
    store_code: u32,
    product_code: u32,
    stats: &PairStats,
    list: &FeatureList,
) -> FeatureVector {
    let mut vector = FeatureVector::new();
    vector.set(features::YEAR, request.year as f64);
    vector.set(features::MONTH, request.month as f64);
    vector.set(features::STORE_ENC, store_code as f64);
    vector.set(features::PRODUCT_ENC, product_code as f64);
    vector.set(features::INVENTORY_LEVEL, stats.mean_inventory_level);
    vector.set(features::PRICE, stats.mean_price);
    vector.set(features::DISCOUNT, stats.mean_discount);

    if list.contains(features::HOLIDAY_SEASON) {
        let flag = if HOLIDAY_MONTHS.contains(&request.month) {
            1.0
        } else {
            0.0
        };
        vector.set(features::HOLIDAY_SEASON, flag);
    }
    if list.contains(features::PREV_UNITS_SOLD) {
        vector.set(features::PREV_UNITS_SOLD, stats.last_units_sold);
    }

    vector
}
