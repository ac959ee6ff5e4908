// src/resolve/pipeline.rs
//! Resolution pipeline: `Init → PrimaryScan → FallbackScan → Finalized`.
//!
//! ```text
//! roster ─► ResolutionState ─► primary_scan ─► fallback_scan ─► finalize ─► Resolution
//!                               (shard walk)     (per entity)     (Unknowns)
//! ```
//!
//! Strictly sequential. The state value is moved into each phase and handed back
//! updated, so no phase mutates anything the caller can still see.
//!
//! Cost of the primary scan is O(shards × records × unresolved). Fine for tens of
//! entities; past a few hundred, index entity keys up front instead of scanning the pool.

use std::collections::HashMap;
use std::fmt;

use serde_json::{Map, Value};

use crate::config::consts::UNKNOWN;
use crate::error::Result;
use crate::progress::{NullProgress, Progress};
use crate::resolve::extract::AssetExtractor;
use crate::resolve::fallback::{FallbackOutcome, FallbackResolver};
use crate::resolve::matcher::RecordMatcher;
use crate::resolve::types::{Asset, CandidateRecord, CanonicalEntity, MatchBasis, MatchResult};
use crate::resolve::walker::SourceIndexWalker;

/// Where extracted assets go; returns the value recorded in the mapping
/// (a file name for images, the text itself for text).
pub trait AssetSink {
    fn persist(&self, entity: &CanonicalEntity, asset: Asset) -> Result<String>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Init,
    PrimaryScan,
    FallbackScan,
    Finalized,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Resolved { value: String, basis: MatchBasis },
    Unresolved,
}

impl Outcome {
    pub fn value(&self) -> &str {
        match self {
            Outcome::Resolved { value, .. } => value,
            Outcome::Unresolved => UNKNOWN,
        }
    }
}

/// Run-scoped bookkeeping. Every entity is in exactly one of `unresolved` or `results`.
#[derive(Clone, Debug)]
pub struct ResolutionState {
    phase: Phase,
    entities: Vec<CanonicalEntity>,
    unresolved: Vec<String>,
    results: HashMap<String, Outcome>,
}

impl ResolutionState {
    /// Later duplicates of a name are dropped; names are the unique key.
    pub fn new(entities: Vec<CanonicalEntity>) -> Self {
        let mut seen = std::collections::HashSet::new();
        let entities: Vec<CanonicalEntity> = entities
            .into_iter()
            .filter(|e| seen.insert(e.name.clone()))
            .collect();
        let unresolved = entities.iter().map(|e| e.name.clone()).collect();
        Self { phase: Phase::Init, entities, unresolved, results: HashMap::new() }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn entities(&self) -> &[CanonicalEntity] {
        &self.entities
    }

    pub fn is_unresolved(&self, name: &str) -> bool {
        self.unresolved.iter().any(|n| n == name)
    }

    pub fn unresolved_names(&self) -> &[String] {
        &self.unresolved
    }

    /// Still-open entities in roster order.
    pub fn unresolved_entities(&self) -> Vec<CanonicalEntity> {
        self.entities
            .iter()
            .filter(|e| self.is_unresolved(&e.name))
            .cloned()
            .collect()
    }

    pub fn result(&self, name: &str) -> Option<&Outcome> {
        self.results.get(name)
    }

    /// Move `name` from unresolved to results. Refuses a second write for the same key.
    pub fn commit(&mut self, name: &str, outcome: Outcome) -> bool {
        let Some(pos) = self.unresolved.iter().position(|n| n == name) else {
            return false;
        };
        if self.results.contains_key(name) {
            return false;
        }
        self.unresolved.remove(pos);
        self.results.insert(s!(name), outcome);
        debug_assert!(self.is_disjoint());
        true
    }

    pub fn is_disjoint(&self) -> bool {
        self.unresolved.iter().all(|n| !self.results.contains_key(n))
    }

    fn enter(&mut self, phase: Phase) {
        logd!("phase {:?} → {:?}", self.phase, phase);
        self.phase = phase;
    }
}

/// Final mapping plus the numbers people ask for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// One entry per roster entity, roster order.
    pub entries: Vec<(String, Outcome)>,
}

impl Resolution {
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn matched(&self) -> usize {
        self.entries.iter().filter(|(_, o)| matches!(o, Outcome::Resolved { .. })).count()
    }

    pub fn get(&self, name: &str) -> Option<&Outcome> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, o)| o)
    }

    /// Sorted, for stable reports.
    pub fn unresolved(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .entries
            .iter()
            .filter(|(_, o)| *o == Outcome::Unresolved)
            .map(|(n, _)| n.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// `name → value | "Unknown"`, roster order.
    pub fn mapping(&self) -> Map<String, Value> {
        self.entries
            .iter()
            .map(|(n, o)| (n.clone(), Value::String(s!(o.value()))))
            .collect()
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Resolved {}/{}", self.matched(), self.total())?;
        let missing = self.unresolved();
        if !missing.is_empty() {
            writeln!(f, "Not found:")?;
            for name in missing {
                writeln!(f, " - {name}")?;
            }
        }
        Ok(())
    }
}

pub struct ResolutionPipeline<'a> {
    walker: &'a dyn SourceIndexWalker,
    matcher: RecordMatcher<'a>,
    extractor: &'a dyn AssetExtractor,
    fallback: Option<FallbackResolver<'a>>,
    sink: &'a dyn AssetSink,
}

impl<'a> ResolutionPipeline<'a> {
    pub fn new(
        walker: &'a dyn SourceIndexWalker,
        matcher: RecordMatcher<'a>,
        extractor: &'a dyn AssetExtractor,
        sink: &'a dyn AssetSink,
    ) -> Self {
        Self { walker, matcher, extractor, fallback: None, sink }
    }

    pub fn with_fallback(mut self, fallback: FallbackResolver<'a>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Whole run. Never fails: the worst case is every entity `Unknown`.
    pub fn run(&self, entities: Vec<CanonicalEntity>, progress: Option<&mut dyn Progress>) -> Resolution {
        let mut null = NullProgress;
        let progress: &mut dyn Progress = match progress {
            Some(p) => p,
            None => &mut null,
        };

        let state = ResolutionState::new(entities);
        logf!("resolving {} entities", state.entities().len());

        let state = self.primary_scan(state, progress);
        let state = self.fallback_scan(state, progress);
        let resolution = Self::finalize(state);

        progress.finish();
        resolution
    }

    pub fn primary_scan(&self, mut state: ResolutionState, progress: &mut dyn Progress) -> ResolutionState {
        state.enter(Phase::PrimaryScan);
        let shards = self.walker.shards();
        progress.begin("primary", shards.len());

        for shard in shards {
            if state.unresolved_names().is_empty() {
                logd!("everything resolved; skipping remaining shards");
                break;
            }

            // A record goes to at most one entity; a matched entity leaves the pool
            // for the rest of this shard even if its extraction fails.
            let mut pool = state.unresolved_entities();
            for record in self.walker.fetch_shard(&shard) {
                if pool.is_empty() { break; }
                let Some((i, result)) = self.matcher.pick(&pool, &record) else { continue };
                let entity = pool.remove(i);
                self.extract_and_commit(&mut state, &entity, &record, result, progress);
            }
            progress.step_done(&shard.0);
        }
        state
    }

    pub fn fallback_scan(&self, mut state: ResolutionState, progress: &mut dyn Progress) -> ResolutionState {
        state.enter(Phase::FallbackScan);
        let Some(fallback) = &self.fallback else { return state };

        let candidates: Vec<CanonicalEntity> = state
            .unresolved_entities()
            .into_iter()
            .filter(|e| fallback.has_source(e))
            .collect();
        progress.begin("fallback", candidates.len());

        for entity in candidates {
            progress.log(&format!("Fallback for {}", entity.name));
            match fallback.resolve_fallback(&entity) {
                FallbackOutcome::Matched { record, result } => {
                    self.extract_and_commit(&mut state, &entity, &record, result, progress);
                }
                FallbackOutcome::NoMatch => logw!("fallback for {}: no matching record", entity.name),
                FallbackOutcome::NoSource => {}
            }
            progress.step_done(&entity.name);
        }
        state
    }

    pub fn finalize(mut state: ResolutionState) -> Resolution {
        state.enter(Phase::Finalized);
        for name in state.unresolved_names().to_vec() {
            logd!("{name}: unresolved");
        }
        let entries = state
            .entities
            .iter()
            .map(|e| {
                let outcome = state.results.get(&e.name).cloned().unwrap_or(Outcome::Unresolved);
                (e.name.clone(), outcome)
            })
            .collect();
        Resolution { entries }
    }

    /// Pulls the asset for a matched record, attaches it to the match and persists it.
    /// Any failure leaves the entity unresolved.
    fn extract_and_commit(
        &self,
        state: &mut ResolutionState,
        entity: &CanonicalEntity,
        record: &CandidateRecord,
        result: MatchResult,
        progress: &mut dyn Progress,
    ) -> bool {
        let Some(basis) = result.basis else { return false };
        logd!("{} ~ \"{}\" ({})", entity.name, record.display_text, basis.label());

        let result = match self.extractor.extract(record) {
            Ok(asset) => result.with_asset(asset),
            Err(e) => {
                logw!("{}: matched \"{}\" but extraction failed: {e}", entity.name, record.display_text);
                progress.failed(&entity.name, &e.to_string());
                return false;
            }
        };
        let Some(asset) = result.asset else { return false };

        match self.sink.persist(entity, asset) {
            Ok(value) => {
                logf!("✓ {} → {value} ({})", entity.name, basis.label());
                progress.resolved(&entity.name, &value);
                state.commit(&entity.name, Outcome::Resolved { value, basis })
            }
            Err(e) => {
                logw!("{}: asset not saved: {e}", entity.name);
                progress.failed(&entity.name, &e.to_string());
                false
            }
        }
    }
}
