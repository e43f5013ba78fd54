//! Feature derivation: turn a raw selection into the record the transform
//! chain consumes.
//!
//! `derive` is a pure function of `(selection, today)`. The only computed
//! field is `car_age`, which must be recomputed at prediction time because
//! it is wall-clock-dependent; everything else is copied verbatim.

use chrono::{Datelike, NaiveDate};

use crate::domain::{RawSelection, VehicleRecord};

/// Oldest accepted model year.
pub const MIN_YEAR: i32 = 1990;
/// Odometer upper bound (miles).
pub const MAX_ODOMETER: u32 = 500_000;
/// Condition rating bounds.
pub const CONDITION_RANGE: (f64, f64) = (1.0, 5.0);

/// Build the 12-field record from a selection and the current date.
///
/// `car_age` may be `-1` when `year == today.year + 1` (a next-model-year
/// vehicle); that value passes through to the chain unchanged.
pub fn derive(input: &RawSelection, today: NaiveDate) -> VehicleRecord {
    VehicleRecord {
        make: input.make.clone(),
        model: input.model.clone(),
        trim: input.trim.clone(),
        body: input.body.clone(),
        transmission: input.transmission.clone(),
        state: input.state.clone(),
        condition: input.condition,
        odometer: input.odometer,
        color: input.color.clone(),
        interior: input.interior.clone(),
        seller: input.seller.clone(),
        car_age: today.year() - input.year,
    }
}

/// Check the numeric widget bounds: condition in [1, 5], odometer in
/// [0, 500_000], year in [1990, today.year + 1].
pub fn validate_ranges(input: &RawSelection, today: NaiveDate) -> Result<(), String> {
    let (lo, hi) = CONDITION_RANGE;
    if !input.condition.is_finite() || input.condition < lo || input.condition > hi {
        return Err(format!(
            "Condition must be between {lo:.1} and {hi:.1} (got {}).",
            input.condition
        ));
    }
    if input.odometer > MAX_ODOMETER {
        return Err(format!(
            "Odometer must be at most {MAX_ODOMETER} miles (got {}).",
            input.odometer
        ));
    }
    let max_year = today.year() + 1;
    if input.year < MIN_YEAR || input.year > max_year {
        return Err(format!(
            "Year must be between {MIN_YEAR} and {max_year} (got {}).",
            input.year
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection() -> RawSelection {
        RawSelection {
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            trim: "LE".to_string(),
            body: "Sedan".to_string(),
            color: "White".to_string(),
            interior: "Black".to_string(),
            transmission: "Automatic".to_string(),
            condition: 4.0,
            odometer: 45_000,
            seller: "Dealer".to_string(),
            state: "ca".to_string(),
            year: 2015,
        }
    }

    fn jan_1_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn derive_computes_car_age_and_copies_fields() {
        let sel = selection();
        let record = derive(&sel, jan_1_2024());

        assert_eq!(record.car_age, 9);
        assert_eq!(record.make, sel.make);
        assert_eq!(record.model, sel.model);
        assert_eq!(record.trim, sel.trim);
        assert_eq!(record.body, sel.body);
        assert_eq!(record.transmission, sel.transmission);
        assert_eq!(record.state, sel.state);
        assert_eq!(record.condition, sel.condition);
        assert_eq!(record.odometer, sel.odometer);
        assert_eq!(record.color, sel.color);
        assert_eq!(record.interior, sel.interior);
        assert_eq!(record.seller, sel.seller);
    }

    #[test]
    fn derive_is_deterministic_for_fixed_today() {
        let sel = selection();
        assert_eq!(derive(&sel, jan_1_2024()), derive(&sel, jan_1_2024()));
    }

    #[test]
    fn next_model_year_gives_negative_age() {
        let mut sel = selection();
        sel.year = 2025;
        assert_eq!(derive(&sel, jan_1_2024()).car_age, -1);
    }

    #[test]
    fn ranges_accept_the_bounds() {
        let today = jan_1_2024();
        let mut sel = selection();
        sel.condition = 1.0;
        sel.odometer = MAX_ODOMETER;
        sel.year = today.year() + 1;
        assert!(validate_ranges(&sel, today).is_ok());
    }

    #[test]
    fn ranges_reject_out_of_bounds() {
        let today = jan_1_2024();

        let mut sel = selection();
        sel.condition = 5.5;
        assert!(validate_ranges(&sel, today).is_err());

        let mut sel = selection();
        sel.odometer = MAX_ODOMETER + 1;
        assert!(validate_ranges(&sel, today).is_err());

        let mut sel = selection();
        sel.year = 1989;
        assert!(validate_ranges(&sel, today).is_err());

        let mut sel = selection();
        sel.year = today.year() + 2;
        assert!(validate_ranges(&sel, today).is_err());
    }
}
