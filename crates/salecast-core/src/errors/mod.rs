//! Error taxonomy for the salecast workspace.
//!
//! Sub-errors are per subsystem (dataset loading, artifact loading) and
//! convert into the top-level [`SalecastError`] via `#[from]`.

mod artifact_error;
mod dataset_error;

pub use artifact_error::ArtifactError;
pub use dataset_error::DatasetError;

use std::fmt;

/// Convenience alias used across the workspace.
pub type SalecastResult<T> = Result<T, SalecastError>;

/// Which categorical vocabulary a label failed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    Store,
    Product,
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryKind::Store => write!(f, "store"),
            CategoryKind::Product => write!(f, "product"),
        }
    }
}

/// Top-level error for all salecast operations.
#[derive(Debug, thiserror::Error)]
pub enum SalecastError {
    #[error("unknown {kind} '{label}': not part of the training vocabulary")]
    UnknownCategory { kind: CategoryKind, label: String },

    #[error("no past data for store '{store}' and product '{product}'")]
    NoHistory { store: String, product: String },

    #[error("model expects feature '{name}' which cannot be supplied")]
    FeatureMissing { name: String },

    #[error("invalid month {month}: expected a value in 1-12")]
    InvalidMonth { month: u32 },

    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("artifact error: {0}")]
    Artifact(#[from] ArtifactError),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SalecastError {
    /// Whether this error should end the current interaction with a plain
    /// message rather than propagate as a failure of the process.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            SalecastError::UnknownCategory { .. }
                | SalecastError::NoHistory { .. }
                | SalecastError::InvalidMonth { .. }
        )
    }
}
