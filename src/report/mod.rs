//! Reporting: the static benchmark metrics shipped with the trained
//! artifacts, plus formatted terminal output.
//!
//! The benchmark figures are display constants produced by the offline
//! training run. They are not recomputed per request; in particular the
//! winner's 96.2% accuracy shown next to a valuation is independent of the
//! live prediction.

pub mod format;

pub use format::{format_accuracy_chart, format_metrics_table, format_options, format_valuation};

/// One row of the offline model-comparison benchmark.
#[derive(Debug, Clone, Copy)]
pub struct ModelMetric {
    pub rank: u8,
    pub name: &'static str,
    pub mae_usd: u32,
    pub accuracy_pct: f64,
    pub status: &'static str,
    pub winner: bool,
}

/// Accuracy of the deployed model, shown alongside each valuation.
pub const WINNER_ACCURACY_PCT: f64 = 96.2;

/// The nine algorithms benchmarked during training, best first.
pub const MODEL_METRICS: [ModelMetric; 9] = [
    ModelMetric { rank: 1, name: "XGBoost", mae_usd: 1_463, accuracy_pct: 96.2, status: "WINNER", winner: true },
    ModelMetric { rank: 2, name: "Random Forest", mae_usd: 1_220, accuracy_pct: 95.5, status: "Excellent", winner: false },
    ModelMetric { rank: 3, name: "CatBoost", mae_usd: 1_366, accuracy_pct: 95.4, status: "Excellent", winner: false },
    ModelMetric { rank: 4, name: "LightGBM", mae_usd: 1_736, accuracy_pct: 92.3, status: "Very Good", winner: false },
    ModelMetric { rank: 5, name: "Decision Tree", mae_usd: 1_728, accuracy_pct: 90.8, status: "Good", winner: false },
    ModelMetric { rank: 6, name: "KNN", mae_usd: 2_003, accuracy_pct: 88.4, status: "Decent", winner: false },
    ModelMetric { rank: 7, name: "Gradient Boost", mae_usd: 2_220, accuracy_pct: 87.0, status: "Fair", winner: false },
    ModelMetric { rank: 8, name: "Linear Reg", mae_usd: 3_092, accuracy_pct: 76.2, status: "Weak", winner: false },
    ModelMetric { rank: 9, name: "AdaBoost", mae_usd: 7_901, accuracy_pct: 13.4, status: "Poor", winner: false },
];
