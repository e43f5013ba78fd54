//! Gradient-boosted tree ensemble evaluation.
//!
//! `xgb_model.json` stores the trained ensemble as a base score plus a list
//! of regression trees; a prediction is the base score plus the sum of each
//! tree's leaf value. Traversal is the usual `x[feature] < threshold ?
//! left : right` walk from node 0. Malformed trees (dangling indices,
//! cyclic references) are reported as errors, never panics.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
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

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<TreeNode>,
}

impl Tree {
    fn score(&self, x: &[f64]) -> Result<f64, String> {
        let mut idx = 0usize;
        // A well-formed tree reaches a leaf in at most `nodes.len()` hops.
        for _ in 0..=self.nodes.len() {
            match self
                .nodes
                .get(idx)
                .ok_or_else(|| format!("Tree node index {idx} is out of range."))?
            {
                TreeNode::Leaf { value } => return Ok(*value),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let v = x.get(*feature).ok_or_else(|| {
                        format!(
                            "Split references feature {feature}, but the input has {} features.",
                            x.len()
                        )
                    })?;
                    idx = if *v < *threshold { *left } else { *right };
                }
            }
        }
        Err("Tree traversal did not reach a leaf (cyclic node references).".to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GbtModel {
    pub base_score: f64,
    pub trees: Vec<Tree>,
}

impl GbtModel {
    /// Point estimate for a single scaled feature vector.
    pub fn predict(&self, x: &[f64]) -> Result<f64, String> {
        let mut sum = self.base_score;
        for tree in &self.trees {
            sum += tree.score(x)?;
        }
        if !sum.is_finite() {
            return Err("Non-finite model prediction.".to_string());
        }
        Ok(sum)
    }
}
