//! Write valuation JSON files.
//!
//! Valuation JSON is the "portable" record of a single prediction: the
//! derived record, the price, and the date the valuation was made. The
//! schema is defined by `ValuationFile`.

use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::VehicleRecord;
use crate::error::AppError;
use crate::report::WINNER_ACCURACY_PCT;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationFile {
    pub tool: String,
    pub date: NaiveDate,
    pub record: VehicleRecord,
    pub price_usd: f64,
    /// Static holdout accuracy of the deployed model, not a per-request figure.
    pub model_accuracy_pct: f64,
}

/// Write a valuation JSON file.
pub fn write_valuation_json(
    path: &Path,
    record: &VehicleRecord,
    price: f64,
    date: NaiveDate,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create valuation JSON '{}': {e}", path.display()),
        )
    })?;

    let valuation = ValuationFile {
        tool: "carval".to_string(),
        date,
        record: record.clone(),
        price_usd: price,
        model_accuracy_pct: WINNER_ACCURACY_PCT,
    };

    serde_json::to_writer_pretty(file, &valuation)
        .map_err(|e| AppError::new(2, format!("Failed to write valuation JSON: {e}")))?;

    Ok(())
}
