use crate::errors::SalecastResult;

/// A pre-trained regressor this system can call but never train.
pub trait Predictor: Send + Sync {
    /// Score one feature vector, ordered per the serialized feature list.
    fn predict(&self, features: &[f64]) -> SalecastResult<f64>;

    /// Number of features the model expects.
    fn feature_count(&self) -> usize;

    /// Short model-kind name for logging.
    fn name(&self) -> &str;
}
