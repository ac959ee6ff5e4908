// src/resolve/mod.rs
//! # Entity resolution
//!
//! Given a canonical roster and a noisy external index, find each entity's record,
//! pull its asset, and fall back to per-entity pages for what the index walk missed.
//!
//! - `normalize` – comparable name keys, alias substitution.
//! - `walker`    – sharded index pages → candidate records.
//! - `matcher`   – record ↔ entity decision (exact key, then hints).
//! - `extract`   – inline/remote images, profile text fields.
//! - `fallback`  – one registered page per entity, entity-specific needle.
//! - `pipeline`  – the state machine tying it together.
//!
//! Nothing in here touches the filesystem except through an [`AssetSink`].

pub mod extract;
pub mod fallback;
pub mod matcher;
pub mod normalize;
pub mod pipeline;
pub mod types;
pub mod walker;

pub use extract::{AssetExtractor, ImageExtractor, ProfileFieldExtractor};
pub use fallback::{FallbackOutcome, FallbackResolver};
pub use matcher::RecordMatcher;
pub use normalize::NameNormalizer;
pub use pipeline::{AssetSink, Outcome, Phase, Resolution, ResolutionPipeline, ResolutionState};
pub use types::{Asset, CandidateRecord, CanonicalEntity, MatchBasis, MatchResult, ShardId};
pub use walker::{IndexSpec, IndexWalker, SourceIndexWalker};
