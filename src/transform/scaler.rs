//! Fitted numeric standard scaler.
//!
//! `scaler.json` stores a per-column `(mean, scale)` pair fitted at training
//! time; inference applies `(x - mean) / scale` column-wise.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Standardize an encoded feature vector.
    pub fn transform(&self, x: &[f64]) -> Result<Vec<f64>, String> {
        if self.mean.len() != self.scale.len() {
            return Err(format!(
                "Scaler parameters are inconsistent: {} means vs {} scales.",
                self.mean.len(),
                self.scale.len()
            ));
        }
        if x.len() != self.mean.len() {
            return Err(format!(
                "Scaler expects {} features, got {}.",
                self.mean.len(),
                x.len()
            ));
        }

        let mut out = Vec::with_capacity(x.len());
        for ((&v, &mean), &scale) in x.iter().zip(&self.mean).zip(&self.scale) {
            if !scale.is_finite() || scale == 0.0 {
                return Err(format!("Invalid scale {scale} in scaler parameters."));
            }
            out.push((v - mean) / scale);
        }
        Ok(out)
    }
}
