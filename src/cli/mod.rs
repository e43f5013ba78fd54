//! Command-line parsing for the vehicle valuation tool.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the pipeline code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "carval",
    version,
    about = "Vehicle resale-price estimator (pre-trained GBT pipeline)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Estimate a vehicle's resale price from its attributes.
    Predict(PredictArgs),
    /// Print the selectable option sets (makes, models, trims, ...).
    Options(OptionsArgs),
    /// Print the offline model benchmark shipped with the artifacts.
    Report,
}

/// Vehicle attributes for a prediction.
///
/// Optional categorical flags default to the first catalog option for the
/// chosen make/model, mirroring the original form's select-box defaults.
#[derive(Debug, Parser, Clone)]
pub struct PredictArgs {
    /// Vehicle make (must be a catalog make).
    #[arg(long)]
    pub make: String,

    /// Vehicle model (must belong to the make).
    #[arg(long)]
    pub model: String,

    /// Trim/package.
    #[arg(long)]
    pub trim: Option<String>,

    /// Body type.
    #[arg(long)]
    pub body: Option<String>,

    /// Exterior color.
    #[arg(long)]
    pub color: Option<String>,

    /// Interior color.
    #[arg(long)]
    pub interior: Option<String>,

    /// Transmission.
    #[arg(long)]
    pub transmission: Option<String>,

    /// Condition rating, 1.0 to 5.0.
    #[arg(long, default_value_t = 4.0)]
    pub condition: f64,

    /// Odometer reading (miles).
    #[arg(long, default_value_t = 45_000)]
    pub odometer: u32,

    /// Seller type.
    #[arg(long)]
    pub seller: Option<String>,

    /// State display name (e.g. "California").
    #[arg(long)]
    pub state: Option<String>,

    /// Model year.
    #[arg(long, default_value_t = 2015)]
    pub year: i32,

    /// Write the valuation to a JSON file.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Artifact directory (default: `files`, or CARVAL_FILES_DIR).
    #[arg(long = "files-dir")]
    pub files_dir: Option<PathBuf>,
}

/// Options for listing the selectable sets.
#[derive(Debug, Parser)]
pub struct OptionsArgs {
    /// Narrow to one make (models and sellers).
    #[arg(long)]
    pub make: Option<String>,

    /// Narrow to one model (trims and bodies); requires --make.
    #[arg(long, requires = "make")]
    pub model: Option<String>,

    /// Artifact directory (default: `files`, or CARVAL_FILES_DIR).
    #[arg(long = "files-dir")]
    pub files_dir: Option<PathBuf>,
}
