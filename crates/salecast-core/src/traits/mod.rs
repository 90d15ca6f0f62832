//! Trait seams between the workspace crates.

mod history;
mod predictor;

pub use history::{PairStats, SalesHistory};
pub use predictor::Predictor;
