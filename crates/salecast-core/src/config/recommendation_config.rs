use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_STOCK_LESS_RATIO;

/// Thresholding for the stocking recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Predictions below `stock_less_ratio * global_mean` advise stocking
    /// less; predictions above the global mean advise stocking more.
    pub stock_less_ratio: f64,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            stock_less_ratio: DEFAULT_STOCK_LESS_RATIO,
        }
    }
}
