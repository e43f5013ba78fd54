//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the pipeline code stays clean and testable
//! - output changes are localized (important for future snapshot tests)
//!
//! All output here is deterministic: fixed column widths for tables, a
//! fixed-size character grid for the accuracy chart.

use crate::catalog::OptionsCatalog;
use crate::domain::VehicleRecord;
use crate::report::{MODEL_METRICS, WINNER_ACCURACY_PCT};

/// Width of the accuracy bars, in characters, at 100%.
const CHART_WIDTH: usize = 50;

/// Format the valuation summary printed after a successful prediction.
pub fn format_valuation(record: &VehicleRecord, price: f64) -> String {
    let mut out = String::new();

    out.push_str("=== carval - Estimated Market Value ===\n");
    out.push_str(&format!(
        "Vehicle : {} {} {} ({}, {})\n",
        record.make, record.model, record.trim, record.body, record.transmission
    ));
    out.push_str(&format!(
        "Exterior: {} | Interior: {}\n",
        record.color, record.interior
    ));
    out.push_str(&format!(
        "Usage   : {} miles | condition {:.1}/5.0 | age {}y\n",
        fmt_thousands(u64::from(record.odometer)),
        record.condition,
        record.car_age
    ));
    out.push_str(&format!(
        "Listing : state {} | seller {}\n",
        record.state, record.seller
    ));
    out.push('\n');
    out.push_str(&format!("Estimated market value: {}\n", fmt_usd(price)));
    out.push_str(&format!(
        "Model accuracy (holdout): {WINNER_ACCURACY_PCT}%\n"
    ));

    out
}

/// Format the nine-model benchmark table.
pub fn format_metrics_table() -> String {
    let mut out = String::new();

    out.push_str("=== carval - Model Benchmark ===\n\n");
    out.push_str(
        format!(
            "  {:<4} {:<16} {:>10} {:>12} {:<10}\n",
            "rank", "model", "MAE ($)", "accuracy (%)", "status"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!(
            "  {:-<4} {:-<16} {:-<10} {:-<12} {:-<10}\n",
            "", "", "", "", ""
        )
        .trim_end(),
    );
    out.push('\n');

    for m in &MODEL_METRICS {
        let chosen = if m.winner { "*" } else { " " };
        out.push_str(
            format!(
                "{chosen} {:<4} {:<16} {:>10} {:>12.1} {:<10}\n",
                m.rank,
                m.name,
                fmt_thousands(u64::from(m.mae_usd)),
                m.accuracy_pct,
                m.status
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

/// Render the per-model accuracy comparison as horizontal bars.
pub fn format_accuracy_chart() -> String {
    let mut out = String::new();

    out.push_str("Accuracy by model:\n");
    for m in &MODEL_METRICS {
        let bar = "#".repeat(bar_width(m.accuracy_pct));
        out.push_str(&format!("{:<16} {bar} {:.1}%\n", m.name, m.accuracy_pct));
    }

    out
}

/// Format the selectable option sets, narrowing by make and model when given.
///
/// Unknown makes/models are not errors here: the catalog accessors answer
/// with their fallback sets and this just prints what they return.
pub fn format_options(catalog: &OptionsCatalog, make: Option<&str>, model: Option<&str>) -> String {
    let mut out = String::new();

    match (make, model) {
        (None, _) => {
            out.push_str(&format!("Makes: {}\n", catalog.makes.join(", ")));
            out.push_str(&format!("Colors: {}\n", catalog.colors.join(", ")));
            out.push_str(&format!("Interiors: {}\n", catalog.interiors.join(", ")));
            out.push_str(&format!(
                "Transmissions: {}\n",
                catalog.transmissions.join(", ")
            ));
            out.push_str(&format!("States: {}\n", catalog.state_names().join(", ")));
        }
        (Some(make), None) => {
            out.push_str(&format!(
                "Models for {make}: {}\n",
                catalog.models_for(make).join(", ")
            ));
            out.push_str(&format!(
                "Sellers for {make}: {}\n",
                catalog.sellers_for(make).join(", ")
            ));
        }
        (Some(make), Some(model)) => {
            out.push_str(&format!(
                "Trims for {model}: {}\n",
                catalog.trims_for(model).join(", ")
            ));
            out.push_str(&format!(
                "Bodies for {model}: {}\n",
                catalog.bodies_for(model).join(", ")
            ));
            out.push_str(&format!(
                "Sellers for {make}: {}\n",
                catalog.sellers_for(make).join(", ")
            ));
        }
    }

    out
}

fn bar_width(accuracy_pct: f64) -> usize {
    let clamped = accuracy_pct.clamp(0.0, 100.0);
    ((clamped / 100.0) * CHART_WIDTH as f64).round() as usize
}

/// Dollar formatting with thousands separators, rounded to whole dollars.
fn fmt_usd(price: f64) -> String {
    if price < 0.0 {
        // The model can in principle extrapolate below zero; show it rather
        // than substituting a value.
        return format!("-${}", fmt_thousands(price.abs().round() as u64));
    }
    format!("${}", fmt_thousands(price.round() as u64))
}

fn fmt_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
