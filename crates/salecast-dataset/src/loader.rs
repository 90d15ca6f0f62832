//! CSV loader for the historical sales table.

use chrono::NaiveDate;
use tracing::{info, warn};

use salecast_core::config::DatasetConfig;
use salecast_core::errors::{DatasetError, SalecastResult};

use crate::record::{RawRecord, SalesRow, REQUIRED_COLUMNS};
use crate::table::SalesTable;

/// Load the sales history from the configured CSV.
///
/// Rows whose Date fails to parse with the configured format are dropped;
/// rows with malformed numeric columns are an error. The loader fails if the
/// file is unreadable, a required column is missing, or no row survives.
pub fn load_table(config: &DatasetConfig) -> SalecastResult<SalesTable> {
    let mut reader =
        csv::Reader::from_path(&config.csv_path).map_err(|e| DatasetError::ReadFailed {
            path: config.csv_path.clone(),
            reason: e.to_string(),
        })?;

    let headers = reader
        .headers()
        .map_err(|e| DatasetError::ReadFailed {
            path: config.csv_path.clone(),
            reason: e.to_string(),
        })?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DatasetError::MissingColumn {
                column: column.to_string(),
            }
            .into());
        }
    }

    let mut rows = Vec::new();
    let mut dropped = 0usize;
    for (idx, result) in reader.deserialize::<RawRecord>().enumerate() {
        // Header row is line 1, so the first data row reports as row 2.
        let raw = result.map_err(|e| DatasetError::MalformedRow {
            row: idx + 2,
            reason: e.to_string(),
        })?;
        match NaiveDate::parse_from_str(&raw.date, &config.date_format) {
            Ok(date) => rows.push(SalesRow::from_raw(raw, date)),
            Err(_) => dropped += 1,
        }
    }

    if rows.is_empty() {
        return Err(DatasetError::Empty {
            path: config.csv_path.clone(),
        }
        .into());
    }

    if dropped > 0 {
        warn!(dropped, "dropped rows with unparseable dates");
    }
    info!(
        rows = rows.len(),
        path = %config.csv_path,
        "sales history loaded"
    );

    Ok(SalesTable::new(rows))
}
