use serde::{Deserialize, Serialize};

use super::defaults;

/// Paths of the externally produced, serialized artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactsConfig {
    /// Serialized regressor.
    pub model_path: String,
    /// Serialized store label encoder.
    pub store_encoder_path: String,
    /// Serialized product label encoder.
    pub product_encoder_path: String,
    /// Serialized ordered list of expected feature names.
    pub feature_list_path: String,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            model_path: defaults::DEFAULT_MODEL_PATH.to_string(),
            store_encoder_path: defaults::DEFAULT_STORE_ENCODER_PATH.to_string(),
            product_encoder_path: defaults::DEFAULT_PRODUCT_ENCODER_PATH.to_string(),
            feature_list_path: defaults::DEFAULT_FEATURE_LIST_PATH.to_string(),
        }
    }
}
