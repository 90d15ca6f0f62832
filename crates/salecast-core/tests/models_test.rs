use salecast_core::models::{Forecast, StockAdvice};

#[test]
fn stock_advice_messages() {
    assert_eq!(StockAdvice::StockMore.message(), "Stock More");
    assert_eq!(StockAdvice::StockLess.message(), "Stock Less");
    assert_eq!(StockAdvice::Maintain.message(), "Maintain Stock Level");
}

#[test]
fn stock_advice_display_matches_message() {
    assert_eq!(StockAdvice::StockMore.to_string(), "Stock More");
}

#[test]
fn forecast_serde_roundtrip() {
    let forecast = Forecast {
        store_id: "S001".into(),
        product_id: "P042".into(),
        year: 2024,
        month: 11,
        predicted_units: 123.45,
        global_mean_units: 100.0,
        advice: StockAdvice::StockMore,
    };
    let json = serde_json::to_string(&forecast).unwrap();
    let back: Forecast = serde_json::from_str(&json).unwrap();
    assert_eq!(back.store_id, "S001");
    assert_eq!(back.month, 11);
    assert_eq!(back.advice, StockAdvice::StockMore);
}
