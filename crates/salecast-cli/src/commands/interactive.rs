//! Single-screen interactive form.
//!
//! Mirrors the original page: show the valid inputs, read the four fields,
//! print the prediction and the suggestion. Unknown-category and
//! missing-history failures end the interaction with a message.

use anyhow::Result;
use console::{style, Term};

use salecast_core::traits::SalesHistory;
use salecast_prediction::ForecastRequest;

use crate::app::App;
use crate::output;

pub fn run(app: &App) -> Result<()> {
    let term = Term::stdout();
    term.write_line(&format!("{}", style("Retail Sales Predictor").bold()))?;
    term.write_line("Predict units sold for a product in a given store and month.")?;
    term.write_line("")?;

    let history = app.engine.history();
    term.write_line(&format!(
        "Stores:   {}",
        history.store_ids().join(", ")
    ))?;
    term.write_line(&format!(
        "Products: {}",
        history.product_ids().join(", ")
    ))?;
    term.write_line(&format!(
        "Months:   {}",
        history
            .months()
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    ))?;
    term.write_line("")?;

    let year: i32 = prompt_number(&term, "Year")?;
    let month: u32 = prompt_number(&term, "Month (1-12)")?;
    let store_id = prompt(&term, "Store ID")?;
    let product_id = prompt(&term, "Product ID")?;

    let request = ForecastRequest {
        year,
        month,
        store_id,
        product_id,
    };
    match app.engine.forecast(&request) {
        Ok(forecast) => {
            term.write_line("")?;
            output::print_forecast(&forecast);
            Ok(())
        }
        Err(err) if err.is_user_facing() => {
            output::print_failure(&err.to_string());
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn prompt(term: &Term, label: &str) -> Result<String> {
    term.write_str(&format!("{}: ", style(label).bold()))?;
    Ok(term.read_line()?.trim().to_string())
}

/// Re-prompt until the input parses.
fn prompt_number<T: std::str::FromStr>(term: &Term, label: &str) -> Result<T> {
    loop {
        let text = prompt(term, label)?;
        match text.parse::<T>() {
            Ok(value) => return Ok(value),
            Err(_) => term.write_line(&format!("not a number: {text}"))?,
        }
    }
}
