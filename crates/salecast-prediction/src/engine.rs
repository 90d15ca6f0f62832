//! ForecastEngine — encodes, assembles, scores, and advises.

use tracing::debug;

use salecast_core::config::RecommendationConfig;
use salecast_core::errors::{CategoryKind, SalecastError, SalecastResult};
use salecast_core::models::Forecast;
use salecast_core::traits::{Predictor, SalesHistory};
use salecast_model::ArtifactBundle;

use crate::advice::advise;
use crate::assembler;
use crate::request::ForecastRequest;

/// Forecast engine, generic over the history source so tests can supply a
/// mock table.
pub struct ForecastEngine<H: SalesHistory> {
    history: H,
    artifacts: ArtifactBundle,
    stock_less_ratio: f64,
}

impl<H: SalesHistory> ForecastEngine<H> {
    /// Create a new engine over a loaded history and artifact set.
    pub fn new(history: H, artifacts: ArtifactBundle, config: &RecommendationConfig) -> Self {
        Self {
            history,
            artifacts,
            stock_less_ratio: config.stock_less_ratio,
        }
    }

    /// The history source backing this engine.
    pub fn history(&self) -> &H {
        &self.history
    }

    /// Run one forecast request end to end.
    pub fn forecast(&self, request: &ForecastRequest) -> SalecastResult<Forecast> {
        request.validate()?;

        let store_code = self
            .artifacts
            .store_encoder
            .code(&request.store_id)
            .ok_or_else(|| SalecastError::UnknownCategory {
                kind: CategoryKind::Store,
                label: request.store_id.clone(),
            })?;
        let product_code = self
            .artifacts
            .product_encoder
            .code(&request.product_id)
            .ok_or_else(|| SalecastError::UnknownCategory {
                kind: CategoryKind::Product,
                label: request.product_id.clone(),
            })?;

        let stats = self
            .history
            .pair_stats(&request.store_id, &request.product_id)
            .ok_or_else(|| SalecastError::NoHistory {
                store: request.store_id.clone(),
                product: request.product_id.clone(),
            })?;

        let vector = assembler::assemble(
            request,
            store_code,
            product_code,
            &stats,
            &self.artifacts.features,
        );
        let ordered = vector.ordered(&self.artifacts.features)?;
        let predicted_units = self.artifacts.model.predict(&ordered)?;

        let global_mean = self.history.global_mean_units();
        let advice = advise(predicted_units, global_mean, self.stock_less_ratio);

        debug!(
            store = %request.store_id,
            product = %request.product_id,
            year = request.year,
            month = request.month,
            rows = stats.row_count,
            predicted_units,
            global_mean,
            ?advice,
            "forecast complete"
        );

        Ok(Forecast {
            store_id: request.store_id.clone(),
            product_id: request.product_id.clone(),
            year: request.year,
            month: request.month,
            predicted_units,
            global_mean_units: global_mean,
            advice,
        })
    }
}
