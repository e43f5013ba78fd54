//! Artifact loading and process-wide caching.
//!
//! Four documents live under a configured base directory, all read once at
//! startup and shared read-only across every request:
//!
//! - `xgb_model.json` — gradient-boosted tree ensemble
//! - `target_encoder.json` — categorical encoding tables
//! - `scaler.json` — per-column standardization parameters
//! - `options.json` — the options catalog
//!
//! A missing file is reported as [`LoadFailure::NotFound`]; any other read
//! or deserialization error as [`LoadFailure::Corrupt`]. Either way no
//! partially constructed `Artifacts` value escapes, and the cached failure
//! short-circuits every later prediction attempt.

use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::de::DeserializeOwned;

use crate::catalog::OptionsCatalog;
use crate::transform::{GbtModel, StandardScaler, TargetEncoder};

pub const MODEL_FILE: &str = "xgb_model.json";
pub const ENCODER_FILE: &str = "target_encoder.json";
pub const SCALER_FILE: &str = "scaler.json";
pub const OPTIONS_FILE: &str = "options.json";

/// Startup failure loading the trained artifacts.
#[derive(Debug, Clone)]
pub enum LoadFailure {
    NotFound { path: PathBuf },
    Corrupt { path: PathBuf, detail: String },
}

impl std::fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadFailure::NotFound { path } => {
                write!(f, "Missing artifact '{}'.", path.display())
            }
            LoadFailure::Corrupt { path, detail } => {
                write!(f, "Artifact '{}' could not be read: {detail}", path.display())
            }
        }
    }
}

impl std::error::Error for LoadFailure {}

/// The trained transform objects plus the options catalog.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub model: GbtModel,
    pub encoder: TargetEncoder,
    pub scaler: StandardScaler,
    pub options: OptionsCatalog,
}

impl Artifacts {
    /// Read all four artifacts from `dir`.
    pub fn load(dir: &Path) -> Result<Self, LoadFailure> {
        let model = read_json(&dir.join(MODEL_FILE))?;
        let encoder = read_json(&dir.join(ENCODER_FILE))?;
        let scaler = read_json(&dir.join(SCALER_FILE))?;
        let options = read_json(&dir.join(OPTIONS_FILE))?;
        Ok(Self {
            model,
            encoder,
            scaler,
            options,
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadFailure> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            LoadFailure::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadFailure::Corrupt {
                path: path.to_path_buf(),
                detail: e.to_string(),
            }
        }
    })?;
    serde_json::from_reader(file).map_err(|e| LoadFailure::Corrupt {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })
}

static SHARED: OnceLock<Result<Artifacts, LoadFailure>> = OnceLock::new();

/// Load-once cache: the first caller reads disk, everyone after gets the
/// same result (success or failure) without further I/O. A race on the very
/// first call can at worst cost a redundant read; the stored result is
/// immutable after initialization.
pub fn shared(dir: &Path) -> &'static Result<Artifacts, LoadFailure> {
    SHARED.get_or_init(|| {
        log::info!("loading artifacts from '{}'", dir.display());
        Artifacts::load(dir)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};
    use std::fs;

    fn fixture_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("carval-{tag}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_fixture_artifacts(dir: &Path) {
        let model = GbtModel {
            base_score: 15_000.0,
            trees: vec![],
        };
        let encoder = TargetEncoder {
            mappings: HashMap::from([(
                "make".to_string(),
                HashMap::from([("Toyota".to_string(), 1.0)]),
            )]),
        };
        let scaler = StandardScaler {
            mean: vec![0.0; 12],
            scale: vec![1.0; 12],
        };
        let options = OptionsCatalog {
            makes: vec!["Toyota".to_string()],
            make_models: BTreeMap::new(),
            model_trims: BTreeMap::new(),
            model_bodies: BTreeMap::new(),
            make_sellers: BTreeMap::new(),
            colors: vec!["White".to_string()],
            interiors: vec!["Black".to_string()],
            transmissions: vec!["Automatic".to_string()],
            states_map: BTreeMap::from([("California".to_string(), "ca".to_string())]),
        };

        fs::write(dir.join(MODEL_FILE), serde_json::to_string(&model).unwrap()).unwrap();
        fs::write(
            dir.join(ENCODER_FILE),
            serde_json::to_string(&encoder).unwrap(),
        )
        .unwrap();
        fs::write(
            dir.join(SCALER_FILE),
            serde_json::to_string(&scaler).unwrap(),
        )
        .unwrap();
        fs::write(
            dir.join(OPTIONS_FILE),
            serde_json::to_string(&options).unwrap(),
        )
        .unwrap();
    }

    #[test]
    fn load_reads_all_four_artifacts() {
        let dir = fixture_dir("load-ok");
        write_fixture_artifacts(&dir);

        let artifacts = Artifacts::load(&dir).unwrap();
        assert_eq!(artifacts.model.base_score, 15_000.0);
        assert_eq!(artifacts.scaler.mean.len(), 12);
        assert_eq!(artifacts.options.makes, vec!["Toyota".to_string()]);
    }

    #[test]
    fn missing_scaler_is_not_found() {
        let dir = fixture_dir("load-missing");
        write_fixture_artifacts(&dir);
        fs::remove_file(dir.join(SCALER_FILE)).unwrap();

        match Artifacts::load(&dir) {
            Err(LoadFailure::NotFound { path }) => {
                assert!(path.ends_with(SCALER_FILE));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn corrupt_model_is_corrupt() {
        let dir = fixture_dir("load-corrupt");
        write_fixture_artifacts(&dir);
        fs::write(dir.join(MODEL_FILE), "not json").unwrap();

        assert!(matches!(
            Artifacts::load(&dir),
            Err(LoadFailure::Corrupt { .. })
        ));
    }

    #[test]
    fn shared_returns_the_same_cached_result() {
        let dir = fixture_dir("load-shared");
        write_fixture_artifacts(&dir);

        let first = shared(&dir);
        let second = shared(&dir);
        assert!(std::ptr::eq(first, second));
        assert!(first.is_ok());
    }
}
