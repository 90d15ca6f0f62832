//! # salecast-model
//!
//! Consumers for the externally produced artifacts: the serialized
//! regressor, the two label encoders, and the expected-feature-name list.
//! This crate only deserializes and scores; nothing here trains, fits, or
//! mutates a model.

pub mod artifacts;
pub mod encoder;
pub mod features;
pub mod model;

pub use artifacts::ArtifactBundle;
pub use encoder::LabelEncoder;
pub use features::{FeatureList, FeatureVector};
pub use model::SalesModel;
