// src/resolve/types.rs
use std::fmt;

use image::RgbaImage;

/// A named thing we are trying to resolve (school or player).
/// Built once from the roster, never mutated during a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalEntity {
    pub name: String,
    pub key: String,
    /// Tried in order against a record's display text.
    pub hints: Vec<String>,
}

/// Identifier of one page of the external index (e.g. the letter `f`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShardId(pub String);

impl fmt::Display for ShardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShardId {
    fn from(s: &str) -> Self {
        ShardId(s!(s))
    }
}

/// One scraped entry. Lives only for the shard that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateRecord {
    /// Raw label: an image alt, a link text.
    pub display_text: String,
    /// URL or inline `data:` payload.
    pub locator: String,
    pub source: ShardId,
}

impl CandidateRecord {
    pub fn new(display_text: impl Into<String>, locator: impl Into<String>, source: ShardId) -> Self {
        Self { display_text: display_text.into(), locator: locator.into(), source }
    }
}

/// Why a record was accepted for an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchBasis {
    /// Normalized display text equals the entity key.
    Exact,
    /// One of the entity's hints occurs in the display text.
    Alias,
    /// Entity-specific needle on the entity's fallback page.
    FallbackPage,
}

impl MatchBasis {
    pub fn label(&self) -> &'static str {
        match self {
            MatchBasis::Exact => "exact",
            MatchBasis::Alias => "alias",
            MatchBasis::FallbackPage => "fallback-page",
        }
    }
}

/// What an extractor hands back.
#[derive(Clone, Debug, PartialEq)]
pub enum Asset {
    /// Decoded, normalized pixels; persisted as PNG.
    Image(RgbaImage),
    Text(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct MatchResult {
    pub basis: Option<MatchBasis>,
    pub asset: Option<Asset>,
}

impl MatchResult {
    pub fn none() -> Self {
        Self { basis: None, asset: None }
    }

    pub fn on(basis: MatchBasis) -> Self {
        Self { basis: Some(basis), asset: None }
    }

    pub fn matched(&self) -> bool {
        self.basis.is_some()
    }

    pub fn with_asset(mut self, asset: Asset) -> Self {
        self.asset = Some(asset);
        self
    }
}
