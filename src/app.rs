//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves the artifact directory and loads the cached artifacts
//! - completes partial selections against the options catalog
//! - runs the prediction pipeline
//! - prints reports and writes optional exports

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::artifacts::Artifacts;
use crate::catalog::OptionsCatalog;
use crate::cli::{Command, OptionsArgs, PredictArgs};
use crate::domain::RawSelection;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `carval` binary.
pub fn run() -> Result<(), AppError> {
    env_logger::init();

    let cli = crate::cli::Cli::parse();
    match cli.command {
        Command::Predict(args) => handle_predict(args),
        Command::Options(args) => handle_options(args),
        Command::Report => handle_report(),
    }
}

fn handle_predict(args: PredictArgs) -> Result<(), AppError> {
    let artifacts = load_artifacts(&files_dir(&args.files_dir))?;
    let today = chrono::Local::now().date_naive();

    let selection = resolve_selection(&args, &artifacts.options)?;
    let run = pipeline::run_predict(&selection, artifacts, today)?;

    println!("{}", crate::report::format_valuation(&run.record, run.price));

    if let Some(path) = &args.export {
        crate::io::valuation::write_valuation_json(path, &run.record, run.price, today)?;
    }

    Ok(())
}

fn handle_options(args: OptionsArgs) -> Result<(), AppError> {
    let artifacts = load_artifacts(&files_dir(&args.files_dir))?;
    println!(
        "{}",
        crate::report::format_options(
            &artifacts.options,
            args.make.as_deref(),
            args.model.as_deref()
        )
    );
    Ok(())
}

fn handle_report() -> Result<(), AppError> {
    println!("{}", crate::report::format_metrics_table());
    println!("{}", crate::report::format_accuracy_chart());
    Ok(())
}

/// Resolve the artifact directory: flag, then CARVAL_FILES_DIR, then `files`.
fn files_dir(arg: &Option<PathBuf>) -> PathBuf {
    dotenvy::dotenv().ok();
    arg.clone()
        .or_else(|| std::env::var("CARVAL_FILES_DIR").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("files"))
}

fn load_artifacts(dir: &Path) -> Result<&'static Artifacts, AppError> {
    match crate::artifacts::shared(dir) {
        Ok(artifacts) => Ok(artifacts),
        Err(failure) => Err(AppError::new(
            3,
            format!("Model artifacts are unavailable: {failure}"),
        )),
    }
}

/// Complete a partial CLI selection against the catalog.
///
/// Unset optional fields take the first catalog option (the select-box
/// default); the state display name is resolved to its code here so only
/// the code travels into the pipeline.
pub fn resolve_selection(
    args: &PredictArgs,
    options: &OptionsCatalog,
) -> Result<RawSelection, AppError> {
    let trim = pick(&args.trim, options.trims_for(&args.model), "trim")?;
    let body = pick(&args.body, options.bodies_for(&args.model), "body")?;
    let color = pick(&args.color, options.colors.clone(), "color")?;
    let interior = pick(&args.interior, options.interiors.clone(), "interior")?;
    let transmission = pick(
        &args.transmission,
        options.transmissions.clone(),
        "transmission",
    )?;
    let seller = pick(&args.seller, options.sellers_for(&args.make), "seller")?;

    let state_names = options.state_names();
    let state_display = match &args.state {
        Some(name) => name.clone(),
        None => state_names
            .first()
            .map(|s| s.to_string())
            .ok_or_else(|| AppError::new(3, "Options catalog has no states."))?,
    };
    let state = options
        .resolve_state(&state_display)
        .map_err(|e| AppError::new(2, e.to_string()))?
        .to_string();

    Ok(RawSelection {
        make: args.make.clone(),
        model: args.model.clone(),
        trim,
        body,
        color,
        interior,
        transmission,
        condition: args.condition,
        odometer: args.odometer,
        seller,
        state,
        year: args.year,
    })
}

fn pick(
    explicit: &Option<String>,
    allowed: Vec<String>,
    field: &'static str,
) -> Result<String, AppError> {
    match explicit {
        Some(value) => Ok(value.clone()),
        None => allowed
            .into_iter()
            .next()
            .ok_or_else(|| AppError::new(3, format!("Options catalog has no `{field}` options."))),
    }
}
