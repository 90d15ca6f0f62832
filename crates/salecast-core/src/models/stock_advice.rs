use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-way stocking recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockAdvice {
    /// Prediction is above the global mean.
    StockMore,
    /// Prediction is below the stock-less fraction of the global mean.
    StockLess,
    /// Prediction sits between the two thresholds.
    Maintain,
}

impl StockAdvice {
    /// Human-readable suggestion line.
    pub fn message(self) -> &'static str {
        match self {
            StockAdvice::StockMore => "Stock More",
            StockAdvice::StockLess => "Stock Less",
            StockAdvice::Maintain => "Maintain Stock Level",
        }
    }
}

impl fmt::Display for StockAdvice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
