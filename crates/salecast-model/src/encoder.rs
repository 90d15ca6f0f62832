//! Label encoder: a fixed mapping from a categorical label seen during
//! training to an integer code. The code of a label is its index in the
//! serialized class list.

use std::collections::HashMap;

use salecast_core::errors::{ArtifactError, SalecastResult};

/// A frozen categorical vocabulary.
#[derive(Debug, Clone)]
pub struct LabelEncoder {
    classes: Vec<String>,
    index: HashMap<String, u32>,
}

impl LabelEncoder {
    /// Build from an ordered class list.
    pub fn new(classes: Vec<String>) -> Self {
        let index = classes
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), i as u32))
            .collect();
        Self { classes, index }
    }

    /// Load from a JSON array of class labels. An empty array is rejected.
    pub fn from_path(path: &str) -> SalecastResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| ArtifactError::LoadFailed {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        let classes: Vec<String> =
            serde_json::from_str(&text).map_err(|e| ArtifactError::Malformed {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
        if classes.is_empty() {
            return Err(ArtifactError::EmptyEncoder {
                path: path.to_string(),
            }
            .into());
        }
        Ok(Self::new(classes))
    }

    /// Integer code for a label, or `None` when the label was never seen.
    pub fn code(&self, label: &str) -> Option<u32> {
        self.index.get(label).copied()
    }

    /// Label for a code, the inverse of [`code`](Self::code).
    pub fn class(&self, code: u32) -> Option<&str> {
        self.classes.get(code as usize).map(String::as_str)
    }

    /// Number of classes in the vocabulary.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
