//! Loads and cross-checks the full artifact set.

use tracing::info;

use salecast_core::config::ArtifactsConfig;
use salecast_core::errors::{ArtifactError, SalecastResult};
use salecast_core::traits::Predictor;

use crate::encoder::LabelEncoder;
use crate::features::FeatureList;
use crate::model::SalesModel;

/// Everything the forecast engine needs, loaded once at startup.
#[derive(Debug, Clone)]
pub struct ArtifactBundle {
    pub model: SalesModel,
    pub store_encoder: LabelEncoder,
    pub product_encoder: LabelEncoder,
    pub features: FeatureList,
}

impl ArtifactBundle {
    /// Load all four artifacts and verify they agree with each other:
    /// the model must expect exactly as many features as the list names,
    /// and the model structure must validate.
    pub fn load(config: &ArtifactsConfig) -> SalecastResult<Self> {
        let model = load_model(&config.model_path)?;
        let store_encoder = LabelEncoder::from_path(&config.store_encoder_path)?;
        let product_encoder = LabelEncoder::from_path(&config.product_encoder_path)?;
        let features = FeatureList::from_path(&config.feature_list_path)?;

        if model.feature_count() != features.len() {
            return Err(ArtifactError::FeatureCountMismatch {
                expected: model.feature_count(),
                actual: features.len(),
            }
            .into());
        }

        info!(
            model = model.name(),
            features = features.len(),
            stores = store_encoder.len(),
            products = product_encoder.len(),
            "artifacts loaded"
        );

        Ok(Self {
            model,
            store_encoder,
            product_encoder,
            features,
        })
    }
}

fn load_model(path: &str) -> SalecastResult<SalesModel> {
    let text = std::fs::read_to_string(path).map_err(|e| ArtifactError::LoadFailed {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    let model: SalesModel =
        serde_json::from_str(&text).map_err(|e| ArtifactError::Malformed {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
    model.validate().map_err(|reason| ArtifactError::Malformed {
        path: path.to_string(),
        reason,
    })?;
    Ok(model)
}
