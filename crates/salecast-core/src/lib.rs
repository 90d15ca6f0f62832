//! # salecast-core
//!
//! Foundation crate for the salecast retail forecasting workspace.
//! Defines the shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SalecastConfig;
pub use errors::{ArtifactError, DatasetError, SalecastError, SalecastResult};
pub use models::{Forecast, StockAdvice};
pub use traits::{PairStats, Predictor, SalesHistory};
