//! Options catalog: the static nested lookup that constrains which field
//! combinations are selectable.
//!
//! The catalog is loaded once from `options.json` and never mutated. Two
//! rules govern the accessors:
//!
//! - **Never error on an unknown make/model.** Absence from a nested map
//!   means "use the default set" (`Standard` trim, `Sedan` body, `Other`
//!   seller), not "fail". The presentation layer may probe freely.
//! - **State names resolve defensively.** Callers are expected to pass
//!   catalog-sourced display names, but `resolve_state` still validates.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::RawSelection;

/// Catalog-level validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A state display name with no entry in `states_map`.
    UnknownState(String),
    /// A categorical field value outside its allowed set.
    UnknownValue { field: &'static str, value: String },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::UnknownState(name) => write!(f, "Unknown state '{name}'."),
            CatalogError::UnknownValue { field, value } => {
                write!(f, "'{value}' is not a valid `{field}` option.")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// The read-only option sets, shaped exactly like `options.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsCatalog {
    pub makes: Vec<String>,
    pub make_models: BTreeMap<String, Vec<String>>,
    pub model_trims: BTreeMap<String, Vec<String>>,
    pub model_bodies: BTreeMap<String, Vec<String>>,
    pub make_sellers: BTreeMap<String, Vec<String>>,
    pub colors: Vec<String>,
    pub interiors: Vec<String>,
    pub transmissions: Vec<String>,
    /// Display name (e.g. "California") to state code (e.g. "ca").
    pub states_map: BTreeMap<String, String>,
}

impl OptionsCatalog {
    /// Models registered for a make (empty when the make is unknown).
    pub fn models_for(&self, make: &str) -> Vec<String> {
        self.make_models.get(make).cloned().unwrap_or_default()
    }

    /// Trims registered for a model, falling back to `["Standard"]`.
    pub fn trims_for(&self, model: &str) -> Vec<String> {
        fallback_list(&self.model_trims, model, "Standard")
    }

    /// Body types registered for a model, falling back to `["Sedan"]`.
    pub fn bodies_for(&self, model: &str) -> Vec<String> {
        fallback_list(&self.model_bodies, model, "Sedan")
    }

    /// Seller types registered for a make, falling back to `["Other"]`.
    pub fn sellers_for(&self, make: &str) -> Vec<String> {
        fallback_list(&self.make_sellers, make, "Other")
    }

    /// All state display names, in deterministic (sorted) order.
    pub fn state_names(&self) -> Vec<&str> {
        self.states_map.keys().map(String::as_str).collect()
    }

    /// Resolve a state display name to its code.
    pub fn resolve_state(&self, display_name: &str) -> Result<&str, CatalogError> {
        self.states_map
            .get(display_name)
            .map(String::as_str)
            .ok_or_else(|| CatalogError::UnknownState(display_name.to_string()))
    }

    /// Validate every categorical field of a selection against its allowed
    /// set. The first violation is reported; numeric ranges are checked
    /// separately at the presentation boundary.
    pub fn validate_selection(&self, sel: &RawSelection) -> Result<(), CatalogError> {
        require_member("make", &sel.make, &self.makes)?;
        require_member("model", &sel.model, &self.models_for(&sel.make))?;
        require_member("trim", &sel.trim, &self.trims_for(&sel.model))?;
        require_member("body", &sel.body, &self.bodies_for(&sel.model))?;
        require_member("color", &sel.color, &self.colors)?;
        require_member("interior", &sel.interior, &self.interiors)?;
        require_member("transmission", &sel.transmission, &self.transmissions)?;
        require_member("seller", &sel.seller, &self.sellers_for(&sel.make))?;

        // The selection carries the resolved code, so membership is checked
        // against the map's values rather than its display-name keys.
        if !self.states_map.values().any(|code| code == &sel.state) {
            return Err(CatalogError::UnknownValue {
                field: "state",
                value: sel.state.clone(),
            });
        }
        Ok(())
    }
}

fn fallback_list(map: &BTreeMap<String, Vec<String>>, key: &str, default: &str) -> Vec<String> {
    match map.get(key) {
        Some(list) => list.clone(),
        None => vec![default.to_string()],
    }
}

fn require_member(field: &'static str, value: &str, allowed: &[String]) -> Result<(), CatalogError> {
    if allowed.iter().any(|v| v == value) {
        Ok(())
    } else {
        Err(CatalogError::UnknownValue {
            field,
            value: value.to_string(),
        })
    }
}
