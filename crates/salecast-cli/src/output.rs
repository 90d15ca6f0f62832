//! Terminal rendering of forecasts and failures.

use console::style;

use salecast_core::models::{Forecast, StockAdvice};

/// The prediction line plus the suggestion line.
pub fn print_forecast(forecast: &Forecast) {
    println!(
        "{} {}",
        style("Predicted Units Sold").green().bold(),
        style(format!(
            "for {} at {} in {}-{}: {:.2}",
            forecast.product_id,
            forecast.store_id,
            forecast.month,
            forecast.year,
            forecast.predicted_units
        )),
    );
    let advice = match forecast.advice {
        StockAdvice::StockMore => style(forecast.advice.message()).cyan(),
        StockAdvice::StockLess => style(forecast.advice.message()).yellow(),
        StockAdvice::Maintain => style(forecast.advice.message()).green(),
    };
    println!("{} {advice}", style("Suggestion:").bold());
}

/// A user-visible failure: printed, never propagated as a crash.
pub fn print_failure(message: &str) {
    eprintln!("{} {message}", style("✗").red().bold());
}
