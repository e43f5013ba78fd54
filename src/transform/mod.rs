//! The fixed three-stage transform chain: encode, then scale, then predict.
//!
//! Stage order is non-negotiable; each stage consumes exactly the output of
//! the prior stage. Any stage error is collapsed into a single
//! [`PredictionFailure`] carrying a human-readable detail string. Which
//! stage failed is deliberately not part of the public contract: a failure
//! abandons the request with no partial output and no substituted default
//! price, and the caller surfaces the detail verbatim.

pub mod encoder;
pub mod model;
pub mod scaler;

pub use encoder::TargetEncoder;
pub use model::{GbtModel, Tree, TreeNode};
pub use scaler::StandardScaler;

use crate::domain::VehicleRecord;

/// The single failure domain of the transform chain.
#[derive(Debug, Clone)]
pub struct PredictionFailure {
    detail: String,
}

impl PredictionFailure {
    fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for PredictionFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.detail)
    }
}

impl std::error::Error for PredictionFailure {}

/// Run encode -> scale -> predict over a record, producing a price estimate.
pub fn predict_price(
    record: &VehicleRecord,
    encoder: &TargetEncoder,
    scaler: &StandardScaler,
    model: &GbtModel,
) -> Result<f64, PredictionFailure> {
    let encoded = encoder.transform(record).map_err(PredictionFailure::new)?;
    let scaled = scaler.transform(&encoded).map_err(PredictionFailure::new)?;
    let price = model.predict(&scaled).map_err(PredictionFailure::new)?;
    Ok(price)
}
