//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - built from CLI flags or any other front-end
//! - fed through the transform chain in-memory
//! - exported to JSON alongside the predicted price

use serde::{Deserialize, Serialize};

/// Fixed column order consumed by the transform chain.
///
/// The encoder walks this array when flattening a [`VehicleRecord`] into a
/// feature vector, so the order here must match the order the artifacts were
/// trained with.
pub const FEATURE_COLUMNS: [&str; 12] = [
    "make",
    "model",
    "trim",
    "body",
    "transmission",
    "state",
    "condition",
    "odometer",
    "color",
    "interior",
    "seller",
    "car_age",
];

/// A raw user selection, as collected by the presentation layer.
///
/// `state` holds the resolved state *code* (e.g. `"ca"`), not the display
/// name; resolution happens against the options catalog before a selection
/// is built. `year` is consumed by feature derivation and does not travel
/// into the record itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSelection {
    pub make: String,
    pub model: String,
    pub trim: String,
    pub body: String,
    pub color: String,
    pub interior: String,
    pub transmission: String,
    pub condition: f64,
    pub odometer: u32,
    pub seller: String,
    pub state: String,
    pub year: i32,
}

/// The immutable 12-field record consumed exactly once by the transform chain.
///
/// `car_age` is derived at prediction time (`today.year - year`) and may be
/// `-1` for next-model-year vehicles; the chain accepts it unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub make: String,
    pub model: String,
    pub trim: String,
    pub body: String,
    pub transmission: String,
    pub state: String,
    pub condition: f64,
    pub odometer: u32,
    pub color: String,
    pub interior: String,
    pub seller: String,
    pub car_age: i32,
}

/// A single column value as seen by the encoder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Categorical(&'a str),
    Numeric(f64),
}

impl VehicleRecord {
    /// Look up a column by its [`FEATURE_COLUMNS`] name.
    ///
    /// Returns `None` for names outside the fixed schema.
    pub fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "make" => Some(FieldValue::Categorical(&self.make)),
            "model" => Some(FieldValue::Categorical(&self.model)),
            "trim" => Some(FieldValue::Categorical(&self.trim)),
            "body" => Some(FieldValue::Categorical(&self.body)),
            "transmission" => Some(FieldValue::Categorical(&self.transmission)),
            "state" => Some(FieldValue::Categorical(&self.state)),
            "condition" => Some(FieldValue::Numeric(self.condition)),
            "odometer" => Some(FieldValue::Numeric(f64::from(self.odometer))),
            "color" => Some(FieldValue::Categorical(&self.color)),
            "interior" => Some(FieldValue::Categorical(&self.interior)),
            "seller" => Some(FieldValue::Categorical(&self.seller)),
            "car_age" => Some(FieldValue::Numeric(f64::from(self.car_age))),
            _ => None,
        }
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

    #[test]
    fn every_feature_column_resolves() {
        let r = record();
        for name in FEATURE_COLUMNS {
            assert!(r.field(name).is_some(), "column `{name}` did not resolve");
        }
    }

    #[test]
    fn numeric_columns_are_numeric() {
        let r = record();
        assert_eq!(r.field("condition"), Some(FieldValue::Numeric(4.0)));
        assert_eq!(r.field("odometer"), Some(FieldValue::Numeric(45_000.0)));
        assert_eq!(r.field("car_age"), Some(FieldValue::Numeric(9.0)));
    }

    #[test]
    fn unknown_column_is_none() {
        assert_eq!(record().field("vin"), None);
    }
}
