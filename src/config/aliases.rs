// src/config/aliases.rs
//! Alias configuration.
//!
//! One value carries every name table a run needs:
//! - `substitutions`: alternate spellings folded onto a canonical name before keys are compared
//!   (e.g. `UConn` → `Connecticut`).
//! - `hints`: per-entity strings looked for inside a candidate's display text, in order.
//! - `fallbacks`: per-entity alternate page plus the looser needle used only on that page.
//!
//! Nothing here is global. Build one with [`AliasConfig::schools`], [`AliasConfig::load`]
//! or by hand, and hand it to the normalizer and fallback resolver.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::consts::LOGO_FALLBACK_BASE;
use crate::error::{Result, ScrapeError};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackSource {
    /// The one page to try for this entity.
    pub url: String,
    /// Case-insensitive substring a record's display text must contain on that page.
    pub needle: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasConfig {
    #[serde(default)]
    pub substitutions: BTreeMap<String, String>,
    #[serde(default)]
    pub hints: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub fallbacks: BTreeMap<String, FallbackSource>,
}

/// (canonical school, logo alt text on the index pages)
const SCHOOL_LOGO_ALTS: &[(&str, &str)] = &[
    ("Arizona", "Arizona Wildcats Logo"),
    ("Arkansas", "Arkansas Razorbacks Logo"),
    ("Auburn", "Auburn Tigers Logo"),
    ("BYU", "BYU Cougars Logo"),
    ("Baylor", "Baylor Bears Logo"),
    ("Colorado St", "Colorado State Rams Logo"),
    ("Connecticut", "UConn Huskies Logo"),
    ("Creighton", "Creighton Bluejays Logo"),
    ("Duke", "Duke Blue Devils Logo"),
    ("Florida", "Florida Gators Logo"),
    ("Georgetown", "Georgetown Hoyas Logo"),
    ("Georgia", "Georgia Bulldogs Logo"),
    ("Houston", "Houston Cougars Logo"),
    ("Illinois", "Illinois Fighting Illini Logo"),
    ("Kentucky", "Kentucky Wildcats Logo"),
    ("Marquette", "Marquette Golden Eagles Logo"),
    ("Maryland", "Maryland Terrapins Logo"),
    ("Michigan", "Michigan Wolverines Logo"),
    ("Michigan St", "Michigan State Spartans Logo"),
    ("North Carolina", "North Carolina Tar Heels Logo"),
    ("Oklahoma", "Oklahoma Sooners Logo"),
    ("Rutgers", "Rutgers Scarlet Knights Logo"),
    ("Saint Joseph's", "Saint Joseph’s Hawks Logo"),
    ("San Diego St", "San Diego State Aztecs Logo"),
    ("South Carolina", "South Carolina Gamecocks Logo"),
    ("Stanford", "Stanford Cardinal Logo"),
    ("Tennessee", "Tennessee Volunteers Logo"),
    ("Texas", "Texas Longhorns Logo"),
    ("Texas Tech", "Texas Tech Red Raiders Logo"),
    ("UAB", "UAB Blazers Logo"),
    ("Villanova", "Villanova Wildcats Logo"),
    ("Wake Forest", "Wake Forest Demon Deacons Logo"),
    ("Washington St", "Washington State Cougars Logo"),
];

/// (entity, page slug, needle)
const SCHOOL_FALLBACKS: &[(&str, &str, &str)] = &[
    ("Connecticut", "uconn-logo/", "UConn"),
    ("North Carolina", "north-carolina-tar-heels-logo/", "North Carolina"),
    ("Saint Joseph's", "saint-josephs-hawks-logo/", "Saint Joseph"),
];

/// Full school names as the color site spells them.
const SCHOOL_FULL_NAMES: &[&str] = &[
    "Arizona", "Arkansas", "Auburn", "BYU", "Baylor", "Colorado State", "Connecticut",
    "Creighton", "Duke", "Florida", "Georgetown", "Georgia", "Houston", "Illinois",
    "Kentucky", "Marquette", "Maryland", "Michigan", "Michigan State", "North Carolina",
    "Oklahoma", "Rutgers", "Saint Joseph's", "San Diego State", "South Carolina",
    "Stanford", "Tennessee", "Texas", "Texas Tech", "UAB", "Villanova", "Wake Forest",
    "Washington State",
];

/// (alternate spelling, canonical school)
const SCHOOL_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("UConn", "Connecticut"),
    ("Colorado State", "Colorado St"),
    ("Michigan State", "Michigan St"),
    ("San Diego State", "San Diego St"),
    ("Washington State", "Washington St"),
    ("St. Joseph's", "Saint Joseph's"),
    ("Brigham Young", "BYU"),
    ("Alabama-Birmingham", "UAB"),
];

impl AliasConfig {
    /// The built-in school tables used by the logo and colors jobs.
    pub fn schools() -> Self {
        let hints = SCHOOL_LOGO_ALTS
            .iter()
            .map(|(school, alt)| (s!(*school), vec![s!(*alt)]))
            .collect();

        let fallbacks = SCHOOL_FALLBACKS
            .iter()
            .map(|(school, slug, needle)| {
                let source = FallbackSource {
                    url: join!(LOGO_FALLBACK_BASE, slug),
                    needle: s!(*needle),
                };
                (s!(*school), source)
            })
            .collect();

        let substitutions = SCHOOL_SUBSTITUTIONS
            .iter()
            .map(|(raw, canonical)| (s!(*raw), s!(*canonical)))
            .collect();

        Self { substitutions, hints, fallbacks }
    }

    /// Canonical roster implied by the built-in tables, in table order.
    pub fn school_names() -> Vec<String> {
        SCHOOL_LOGO_ALTS.iter().map(|(school, _)| s!(*school)).collect()
    }

    /// Same roster with "State" spelled out; used where sites key pages on full names.
    pub fn school_full_names() -> Vec<String> {
        SCHOOL_FULL_NAMES.iter().map(|school| s!(*school)).collect()
    }

    /// Read a JSON file with the same shape as this struct. Missing tables default to empty.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| ScrapeError::Config(format!("{}: {e}", path.display())))?;
        serde_json::from_str(&text)
            .map_err(|e| ScrapeError::Config(format!("{}: {e}", path.display())))
    }

    pub fn hints_for(&self, name: &str) -> &[String] {
        self.hints.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn fallback_for(&self, name: &str) -> Option<&FallbackSource> {
        self.fallbacks.get(name)
    }
}
