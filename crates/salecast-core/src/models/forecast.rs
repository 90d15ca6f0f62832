use serde::{Deserialize, Serialize};

use super::StockAdvice;

/// Result of one forecast request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forecast {
    /// Store the forecast was made for.
    pub store_id: String,
    /// Product the forecast was made for.
    pub product_id: String,
    /// Requested year.
    pub year: i32,
    /// Requested month (1-12).
    pub month: u32,
    /// Predicted units sold.
    pub predicted_units: f64,
    /// Global mean units sold across the whole history, the threshold base.
    pub global_mean_units: f64,
    /// Three-way stocking recommendation derived from the prediction.
    pub advice: StockAdvice,
}
