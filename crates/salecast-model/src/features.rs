//! Expected-feature-name list and the per-request feature vector.
//!
//! The serialized list dictates both membership and order of the values
//! handed to the model. A name the assembler never supplied is an error,
//! not a silent zero.

use std::collections::BTreeMap;

use salecast_core::errors::{ArtifactError, SalecastError, SalecastResult};

/// Ordered feature names the model expects, loaded from a JSON array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureList {
    names: Vec<String>,
}

impl FeatureList {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Load from a JSON array of feature names.
    pub fn from_path(path: &str) -> SalecastResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| ArtifactError::LoadFailed {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        let names: Vec<String> =
            serde_json::from_str(&text).map_err(|e| ArtifactError::Malformed {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self::new(names))
    }

    /// Whether the model asks for a feature of this name.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Named feature values for one request, before ordering.
#[derive(Debug, Clone, Default)]
pub struct FeatureVector {
    values: BTreeMap<String, f64>,
}

impl FeatureVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a feature value, overwriting any previous value of that name.
    pub fn set(&mut self, name: &str, value: f64) {
        self.values.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Order the values per the feature list. Fails with `FeatureMissing`
    /// on the first name this vector cannot supply.
    pub fn ordered(&self, list: &FeatureList) -> SalecastResult<Vec<f64>> {
        list.names()
            .iter()
            .map(|name| {
                self.get(name).ok_or_else(|| SalecastError::FeatureMissing {
                    name: name.clone(),
                })
            })
            .collect()
    }
}
