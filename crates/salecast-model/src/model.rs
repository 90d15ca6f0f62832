//! Deserialized regressor kinds and their scoring.
//!
//! The on-disk format is a JSON document tagged by `kind`. Two kinds are
//! supported: a linear model (intercept + per-feature coefficients) and a
//! gradient-boosted ensemble of decision trees over feature indices.

use serde::{Deserialize, Serialize};

use salecast_core::errors::{ArtifactError, SalecastResult};
use salecast_core::traits::Predictor;

/// A pre-trained regressor, tagged by kind on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SalesModel {
    Linear(LinearModel),
    Gbdt(GbdtModel),
}

impl SalesModel {
    /// Structural validation beyond what serde enforces. Called once at
    /// load; scoring relies on it.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            SalesModel::Linear(m) => {
                if m.coefficients.is_empty() {
                    return Err("linear model has no coefficients".to_string());
                }
            }
            SalesModel::Gbdt(m) => m.validate()?,
        }
        Ok(())
    }
}

impl Predictor for SalesModel {
    fn predict(&self, features: &[f64]) -> SalecastResult<f64> {
        if features.len() != self.feature_count() {
            return Err(ArtifactError::FeatureCountMismatch {
                expected: self.feature_count(),
                actual: features.len(),
            }
            .into());
        }
        match self {
            SalesModel::Linear(m) => Ok(m.score(features)),
            SalesModel::Gbdt(m) => Ok(m.score(features)),
        }
    }

    fn feature_count(&self) -> usize {
        match self {
            SalesModel::Linear(m) => m.coefficients.len(),
            SalesModel::Gbdt(m) => m.n_features,
        }
    }

    fn name(&self) -> &str {
        match self {
            SalesModel::Linear(_) => "linear",
            SalesModel::Gbdt(_) => "gbdt",
        }
    }
}

/// Intercept + dot product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl LinearModel {
    fn score(&self, features: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(c, x)| c * x)
                .sum::<f64>()
    }
}

/// Base score plus the sum of every tree's leaf value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GbdtModel {
    pub base_score: f64,
    pub n_features: usize,
    pub trees: Vec<DecisionTree>,
}

impl GbdtModel {
    fn score(&self, features: &[f64]) -> f64 {
        self.base_score + self.trees.iter().map(|t| t.score(features)).sum::<f64>()
    }

    fn validate(&self) -> Result<(), String> {
        if self.n_features == 0 {
            return Err("gbdt model declares zero features".to_string());
        }
        for (ti, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(format!("tree {ti} has no nodes"));
            }
            for (ni, node) in tree.nodes.iter().enumerate() {
                if let TreeNode::Split {
                    feature,
                    left,
                    right,
                    ..
                } = node
                {
                    if *feature >= self.n_features {
                        return Err(format!(
                            "tree {ti} node {ni} splits on feature {feature} of {}",
                            self.n_features
                        ));
                    }
                    // Children strictly after the parent: in range and acyclic.
                    if *left <= ni || *right <= ni || *left >= tree.nodes.len()
                        || *right >= tree.nodes.len()
                    {
                        return Err(format!("tree {ti} node {ni} has bad child indices"));
                    }
                }
            }
        }
        Ok(())
    }
}

/// One tree, nodes stored flat; node 0 is the root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    fn score(&self, features: &[f64]) -> f64 {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                TreeNode::Leaf { value } => return *value,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if features[*feature] < *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }
}

/// Flat tree node; validation guarantees child indices stay in range.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stump(feature: usize, threshold: f64, low: f64, high: f64) -> DecisionTree {
        DecisionTree {
            nodes: vec![
                TreeNode::Split {
                    feature,
                    threshold,
                    left: 1,
                    right: 2,
                },
                TreeNode::Leaf { value: low },
                TreeNode::Leaf { value: high },
            ],
        }
    }

    #[test]
    fn linear_model_scores_dot_product_plus_intercept() {
        let model = SalesModel::Linear(LinearModel {
            intercept: 1.0,
            coefficients: vec![2.0, 3.0],
        });
        let y = model.predict(&[10.0, 100.0]).unwrap();
        assert_eq!(y, 1.0 + 20.0 + 300.0);
    }

    #[test]
    fn linear_model_rejects_wrong_feature_count() {
        let model = SalesModel::Linear(LinearModel {
            intercept: 0.0,
            coefficients: vec![1.0, 1.0],
        });
        assert!(model.predict(&[1.0]).is_err());
    }

    #[test]
    fn gbdt_sums_base_score_and_tree_leaves() {
        let model = SalesModel::Gbdt(GbdtModel {
            base_score: 50.0,
            n_features: 2,
            trees: vec![stump(0, 5.0, -10.0, 10.0), stump(1, 0.5, 1.0, 2.0)],
        });
        // feature 0 = 7.0 -> right leaf 10.0; feature 1 = 0.1 -> left leaf 1.0
        assert_eq!(model.predict(&[7.0, 0.1]).unwrap(), 61.0);
    }

    #[test]
    fn gbdt_split_comparison_is_strict_less_than() {
        let model = SalesModel::Gbdt(GbdtModel {
            base_score: 0.0,
            n_features: 1,
            trees: vec![stump(0, 5.0, -1.0, 1.0)],
        });
        // Exactly at the threshold goes right.
        assert_eq!(model.predict(&[5.0]).unwrap(), 1.0);
        assert_eq!(model.predict(&[4.999]).unwrap(), -1.0);
    }

    #[test]
    fn validate_rejects_out_of_range_feature_index() {
        let model = SalesModel::Gbdt(GbdtModel {
            base_score: 0.0,
            n_features: 1,
            trees: vec![stump(3, 5.0, 0.0, 0.0)],
        });
        assert!(model.validate().is_err());
    }

    #[test]
    fn validate_rejects_backward_child_edge() {
        let tree = DecisionTree {
            nodes: vec![
                TreeNode::Split {
                    feature: 0,
                    threshold: 1.0,
                    left: 0,
                    right: 1,
                },
                TreeNode::Leaf { value: 0.0 },
            ],
        };
        let model = SalesModel::Gbdt(GbdtModel {
            base_score: 0.0,
            n_features: 1,
            trees: vec![tree],
        });
        assert!(model.validate().is_err());
    }

    #[test]
    fn model_json_roundtrip_is_tagged_by_kind() {
        let model = SalesModel::Linear(LinearModel {
            intercept: 2.5,
            coefficients: vec![1.0],
        });
        let json = serde_json::to_string(&model).unwrap();
        assert!(json.contains("\"kind\":\"linear\""));
        let back: SalesModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back.predict(&[4.0]).unwrap(), 6.5);
    }
}
