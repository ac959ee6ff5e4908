// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobKind {
    Logos,
    Positions,
    Colors,
}

impl JobKind {
    pub fn label(&self) -> &'static str {
        match self {
            JobKind::Logos => "logos",
            JobKind::Positions => "positions",
            JobKind::Colors => "colors",
        }
    }

    pub fn default_out(&self) -> PathBuf {
        match self {
            JobKind::Logos => PathBuf::from(DEFAULT_LOGO_MAP),
            JobKind::Positions => PathBuf::from(DEFAULT_POSITIONS_OUT),
            JobKind::Colors => PathBuf::from(DEFAULT_COLORS_OUT),
        }
    }
}

/// Delays the source asks of us. Zero everywhere is only sane against fixtures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Politeness {
    /// Wait after every page fetch before reading records (dynamic render settling).
    pub settle: Duration,
    /// Minimum spacing between two consecutive fetches of the same session.
    pub spacing: Duration,
    pub timeout: Duration,
}

impl Default for Politeness {
    fn default() -> Self {
        Self {
            settle: Duration::from_millis(SETTLE_MS),
            spacing: Duration::from_millis(PROFILE_SPACING_MS),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Politeness {
    pub fn none() -> Self {
        Self { settle: Duration::ZERO, spacing: Duration::ZERO, timeout: Duration::from_secs(1) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub job: JobKind,
    /// Canonical roster; `None` means the built-in school list.
    pub input: Option<PathBuf>,
    pub out: PathBuf,
    pub asset_dir: PathBuf,
    /// JSON alias configuration replacing the built-in tables.
    pub aliases: Option<PathBuf>,
    pub politeness: Politeness,
}

impl RunOptions {
    pub fn new(job: JobKind) -> Self {
        Self {
            job,
            input: None,
            out: job.default_out(),
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            aliases: None,
            politeness: Politeness::default(),
        }
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self::new(JobKind::Logos)
    }
}
