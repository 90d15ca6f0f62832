//! Configuration for the salecast workspace.
//!
//! All sections default sensibly so an empty TOML document is a valid
//! configuration. Partial documents override only the fields they name.

mod artifacts_config;
mod dataset_config;
mod observability_config;
mod recommendation_config;

pub use artifacts_config::ArtifactsConfig;
pub use dataset_config::DatasetConfig;
pub use observability_config::ObservabilityConfig;
pub use recommendation_config::RecommendationConfig;

use serde::{Deserialize, Serialize};

use crate::errors::SalecastResult;

/// Centralized defaults, shared between `Default` impls and tests.
pub mod defaults {
    pub const DEFAULT_MODEL_PATH: &str = "artifacts/best_model.json";
    pub const DEFAULT_STORE_ENCODER_PATH: &str = "artifacts/store_encoder.json";
    pub const DEFAULT_PRODUCT_ENCODER_PATH: &str = "artifacts/product_encoder.json";
    pub const DEFAULT_FEATURE_LIST_PATH: &str = "artifacts/final_features.json";
    pub const DEFAULT_CSV_PATH: &str = "retail_store_inventory.csv";
    pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
    pub const DEFAULT_LOG_LEVEL: &str = "info";
}

/// Top-level configuration, one section per subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SalecastConfig {
    pub artifacts: ArtifactsConfig,
    pub dataset: DatasetConfig,
    pub recommendation: RecommendationConfig,
    pub observability: ObservabilityConfig,
}

impl SalecastConfig {
    /// Parse a TOML document; missing sections and fields keep defaults.
    pub fn from_toml(text: &str) -> SalecastResult<Self> {
        Ok(toml::from_str(text)?)
    }
}
