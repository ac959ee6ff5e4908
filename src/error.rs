// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

/// Everything that can go wrong while resolving a roster.
///
/// Only `Input`, `Config` and output-side `Io`/`Json` errors leave `scrape::collect_*`.
/// Fetch and decode failures are absorbed by the pipeline step that issued them.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request to {url} failed: {reason}")]
    Fetch { url: String, reason: String },

    #[error("{url} answered {status}")]
    Status { url: String, status: u16 },

    #[error("{url} rendered an empty page")]
    EmptyRender { url: String },

    #[error("could not decode payload: {0}")]
    Decode(String),

    #[error("{url} has no `{field}` field")]
    MissingField { url: String, field: String },

    #[error("could not save {}: {source}", path.display())]
    Persist { path: PathBuf, source: io::Error },

    #[error("cannot read canonical input {}: {reason}", path.display())]
    Input { path: PathBuf, reason: String },

    #[error("bad alias configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ScrapeError {
    /// Network-side failures: the source gave us nothing usable.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::Fetch { .. } | Self::Status { .. } | Self::EmptyRender { .. })
    }

    /// Payload-side failures: we got bytes but could not make sense of them.
    pub fn is_decode_failure(&self) -> bool {
        matches!(self, Self::Decode(_) | Self::MissingField { .. })
    }
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;
