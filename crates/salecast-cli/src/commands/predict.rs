//! One-shot forecast.

use anyhow::Result;

use salecast_prediction::ForecastRequest;

use crate::app::App;
use crate::output;

pub fn run(app: &App, year: i32, month: u32, store: &str, product: &str) -> Result<()> {
    let request = ForecastRequest {
        year,
        month,
        store_id: store.to_string(),
        product_id: product.to_string(),
    };
    match app.engine.forecast(&request) {
        Ok(forecast) => {
            output::print_forecast(&forecast);
            Ok(())
        }
        Err(err) if err.is_user_facing() => {
            output::print_failure(&err.to_string());
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}
