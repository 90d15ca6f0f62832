//! Thresholding a prediction into a stocking recommendation.

use salecast_core::models::StockAdvice;

/// Classify a prediction against the global mean units sold.
///
/// Strict comparisons on both sides: a prediction exactly at the global
/// mean, or exactly at `stock_less_ratio * global_mean`, holds the level.
pub fn advise(prediction: f64, global_mean: f64, stock_less_ratio: f64) -> StockAdvice {
    if prediction > global_mean {
        StockAdvice::StockMore
    } else if prediction < stock_less_ratio * global_mean {
        StockAdvice::StockLess
    } else {
        StockAdvice::Maintain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_example_with_mean_100() {
        assert_eq!(advise(95.0, 100.0, 0.9), StockAdvice::Maintain);
        assert_eq!(advise(89.0, 100.0, 0.9), StockAdvice::StockLess);
        assert_eq!(advise(101.0, 100.0, 0.9), StockAdvice::StockMore);
    }

    #[test]
    fn boundaries_hold_the_level() {
        assert_eq!(advise(100.0, 100.0, 0.9), StockAdvice::Maintain);
        assert_eq!(advise(90.0, 100.0, 0.9), StockAdvice::Maintain);
    }

    #[test]
    fn ratio_is_configurable() {
        assert_eq!(advise(84.0, 100.0, 0.85), StockAdvice::StockLess);
        assert_eq!(advise(86.0, 100.0, 0.85), StockAdvice::Maintain);
    }
}
