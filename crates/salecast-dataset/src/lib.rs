//! # salecast-dataset
//!
//! Loads the historical sales CSV and serves per-pair aggregates behind the
//! `SalesHistory` trait from salecast-core.
//!
//! Rows with unparseable dates are dropped at load time (with a logged
//! count); everything else is kept in memory and never mutated.

pub mod loader;
pub mod record;
pub mod table;

pub use loader::load_table;
pub use record::{RawRecord, SalesRow};
pub use table::SalesTable;
