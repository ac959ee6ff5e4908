// src/scrape/mod.rs
//! Job runners: wire a source spec, the resolution pipeline and the output files.
//! Each `collect_*` is the whole job for one attribute.
mod colors;
mod logos;
mod positions;

pub use colors::collect_colors;
pub use logos::collect_logos;
pub use positions::collect_positions;

use std::path::PathBuf;

use crate::config::{AliasConfig, JobKind, RunOptions, consts::DEFAULT_BIOS};
use crate::error::Result;
use crate::store;

/// The alias tables for this run: the file named in the options, or the job's built-ins.
pub fn load_aliases(opts: &RunOptions) -> Result<AliasConfig> {
    match &opts.aliases {
        Some(path) => AliasConfig::load(path),
        None => Ok(match opts.job {
            JobKind::Logos | JobKind::Colors => AliasConfig::schools(),
            JobKind::Positions => AliasConfig::default(),
        }),
    }
}

/// Canonical names for this run. Read before any network activity; failure aborts.
pub fn load_roster(opts: &RunOptions) -> Result<Vec<String>> {
    match (&opts.input, opts.job) {
        (Some(path), _) => store::load_roster(path),
        (None, JobKind::Logos) => Ok(AliasConfig::school_names()),
        (None, JobKind::Colors) => Ok(AliasConfig::school_full_names()),
        (None, JobKind::Positions) => store::load_roster(&PathBuf::from(DEFAULT_BIOS)),
    }
}
