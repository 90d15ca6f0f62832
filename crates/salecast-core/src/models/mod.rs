//! Shared result models.

mod forecast;
mod stock_advice;

pub use forecast::Forecast;
pub use stock_advice::StockAdvice;
