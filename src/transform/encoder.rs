//! Fitted categorical target encoder.
//!
//! `target_encoder.json` stores one lookup table per categorical column,
//! mapping each category seen at training time to its learned numeric
//! encoding. Numeric columns (`condition`, `odometer`, `car_age`) pass
//! through unchanged. An unseen category is an error at inference time; it
//! surfaces through the chain as a `PredictionFailure`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{FEATURE_COLUMNS, FieldValue, VehicleRecord};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetEncoder {
    /// Column name -> (category -> learned encoding).
    pub mappings: HashMap<String, HashMap<String, f64>>,
}

impl TargetEncoder {
    /// Flatten a record into a feature vector in [`FEATURE_COLUMNS`] order.
    pub fn transform(&self, record: &VehicleRecord) -> Result<Vec<f64>, String> {
        let mut out = Vec::with_capacity(FEATURE_COLUMNS.len());
        for name in FEATURE_COLUMNS {
            let value = record
                .field(name)
                .ok_or_else(|| format!("Unknown feature column `{name}`."))?;
            match value {
                FieldValue::Numeric(v) => out.push(v),
                FieldValue::Categorical(category) => {
                    let table = self
                        .mappings
                        .get(name)
                        .ok_or_else(|| format!("No learned encoding for column `{name}`."))?;
                    let encoded = table.get(category).ok_or_else(|| {
                        format!("Unseen category '{category}' for column `{name}`.")
                    })?;
                    out.push(*encoded);
                }
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> VehicleRecord {
        VehicleRecord {
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            trim: "LE".to_string(),
            body: "Sedan".to_string(),
            transmission: "Automatic".to_string(),
            state: "ca".to_string(),
            condition: 4.0,
            odometer: 45_000,
            color: "White".to_string(),
            interior: "Black".to_string(),
            seller: "Dealer".to_string(),
            car_age: 9,
        }
    }

    fn encoder() -> TargetEncoder {
        let table = |entries: &[(&str, f64)]| {
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<HashMap<_, _>>()
        };
        TargetEncoder {
            mappings: HashMap::from([
                ("make".to_string(), table(&[("Toyota", 0.1)])),
                ("model".to_string(), table(&[("Camry", 0.2)])),
                ("trim".to_string(), table(&[("LE", 0.3)])),
                ("body".to_string(), table(&[("Sedan", 0.4)])),
                ("transmission".to_string(), table(&[("Automatic", 0.5)])),
                ("state".to_string(), table(&[("ca", 0.6)])),
                ("color".to_string(), table(&[("White", 0.7)])),
                ("interior".to_string(), table(&[("Black", 0.8)])),
                ("seller".to_string(), table(&[("Dealer", 0.9)])),
            ]),
        }
    }

    #[test]
    fn transform_preserves_column_order() {
        let encoded = encoder().transform(&record()).unwrap();
        // make, model, trim, body, transmission, state,
        // condition, odometer, color, interior, seller, car_age
        assert_eq!(
            encoded,
            vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 4.0, 45_000.0, 0.7, 0.8, 0.9, 9.0]
        );
    }

    #[test]
    fn unseen_category_is_an_error() {
        let mut r = record();
        r.color = "Chartreuse".to_string();
        let err = encoder().transform(&r).unwrap_err();
        assert!(err.contains("Chartreuse"));
        assert!(err.contains("color"));
    }

    #[test]
    fn missing_column_table_is_an_error() {
        let mut enc = encoder();
        enc.mappings.remove("seller");
        let err = enc.transform(&record()).unwrap_err();
        assert!(err.contains("seller"));
    }

    #[test]
    fn negative_car_age_passes_through() {
        let mut r = record();
        r.car_age = -1;
        let encoded = encoder().transform(&r).unwrap();
        assert_eq!(encoded[11], -1.0);
    }
}
