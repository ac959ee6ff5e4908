// src/store.rs
//! Roster in, mappings out.
//!
//! Input: a JSON array of records with at least a `name` (other fields ignored),
//! or a bare array of strings. Output: pretty JSON objects in roster order.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::aliases::AliasConfig;
use crate::core::sanitize::{asset_filename, normalize_ws};
use crate::error::{Result, ScrapeError};
use crate::file::write_json;
use crate::resolve::{CanonicalEntity, NameNormalizer, Resolution};
use crate::specs::colors::TeamColors;

#[derive(Deserialize)]
#[serde(untagged)]
enum RosterRow {
    Name(String),
    Record { name: String },
}

/// Unique, non-empty names in file order. Unreadable or malformed input is fatal.
pub fn load_roster(path: &Path) -> Result<Vec<String>> {
    let input_err = |reason: String| ScrapeError::Input { path: path.to_path_buf(), reason };

    let text = fs::read_to_string(path).map_err(|e| input_err(e.to_string()))?;
    let rows: Vec<RosterRow> = serde_json::from_str(&text).map_err(|e| input_err(e.to_string()))?;

    let names = rows.into_iter().map(|row| match row {
        RosterRow::Name(n) | RosterRow::Record { name: n } => normalize_ws(&n),
    });
    Ok(dedup_names(names))
}

pub fn dedup_names(names: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|n| !n.is_empty())
        .filter(|n| seen.insert(n.clone()))
        .collect()
}

pub fn entities(names: &[String], normalizer: &NameNormalizer, aliases: &AliasConfig) -> Vec<CanonicalEntity> {
    names
        .iter()
        .map(|n| normalizer.entity(n, aliases.hints_for(n)))
        .collect()
}

pub fn save_mapping(path: &Path, resolution: &Resolution) -> Result<PathBuf> {
    write_json(path, &Value::Object(resolution.mapping()))
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SchoolEntry {
    pub colors: TeamColors,
    pub logo: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SchoolManifest {
    pub schools: Map<String, Value>,
}

impl SchoolManifest {
    /// `logo_name` is the roster spelling the logo job saved under.
    pub fn insert(&mut self, school: &str, logo_name: &str, colors: TeamColors) -> Result<()> {
        let entry = SchoolEntry { colors, logo: asset_filename(logo_name, "png") };
        self.schools.insert(s!(school), serde_json::to_value(entry)?);
        Ok(())
    }
}

pub fn save_manifest(path: &Path, manifest: &SchoolManifest) -> Result<PathBuf> {
    write_json(path, manifest)
}
