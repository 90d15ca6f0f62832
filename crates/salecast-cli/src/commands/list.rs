//! Valid-input discovery, mirrors the original form's select boxes.

use anyhow::Result;

use salecast_core::traits::SalesHistory;

use crate::app::App;
use crate::cli::ListTarget;

pub fn run(app: &App, target: &ListTarget) -> Result<()> {
    match target {
        ListTarget::Stores => {
            for id in app.engine.history().store_ids() {
                println!("{id}");
            }
        }
        ListTarget::Products => {
            for id in app.engine.history().product_ids() {
                println!("{id}");
            }
        }
        ListTarget::Months => {
            for month in app.engine.history().months() {
                println!("{month}");
            }
        }
    }
    Ok(())
}
