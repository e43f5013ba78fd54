//! Shared prediction workflow used by the CLI front-end.
//!
//! Keeping this in one place avoids duplicating the core sequence:
//! validate selection -> derive record -> transform chain
//!
//! The front-end can then focus on presentation (flag parsing, printing,
//! exports).

use chrono::NaiveDate;

use crate::artifacts::Artifacts;
use crate::domain::{RawSelection, VehicleRecord};
use crate::error::AppError;
use crate::features;
use crate::transform;

/// All computed outputs of a single prediction run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub record: VehicleRecord,
    pub price: f64,
}

/// Execute the full prediction pipeline for one selection.
///
/// The selection is checked against the catalog and the numeric widget
/// ranges before the record is built; the transform chain then runs to a
/// price or a single terminal failure. No retries, no partial output.
pub fn run_predict(
    selection: &RawSelection,
    artifacts: &Artifacts,
    today: NaiveDate,
) -> Result<RunOutput, AppError> {
    // 1) Categorical membership against the catalog.
    artifacts
        .options
        .validate_selection(selection)
        .map_err(|e| AppError::new(2, e.to_string()))?;

    // 2) Numeric widget ranges.
    features::validate_ranges(selection, today).map_err(|e| AppError::new(2, e))?;

    // 3) Build the record (car_age is wall-clock-dependent).
    let record = features::derive(selection, today);

    // 4) Encode -> scale -> predict.
    let price = transform::predict_price(
        &record,
        &artifacts.encoder,
        &artifacts.scaler,
        &artifacts.model,
    )
    .map_err(|e| {
        log::error!("prediction failed: {e}");
        AppError::new(4, format!("Calculation error: {e}"))
    })?;

    Ok(RunOutput { record, price })
}
