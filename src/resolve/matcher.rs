// src/resolve/matcher.rs
use crate::resolve::normalize::NameNormalizer;
use crate::resolve::types::{CandidateRecord, CanonicalEntity, MatchBasis, MatchResult};

/// Decides whether a record is an entity. No scoring: a rule either holds or it doesn't.
pub struct RecordMatcher<'a> {
    normalizer: &'a NameNormalizer,
}

impl<'a> RecordMatcher<'a> {
    pub fn new(normalizer: &'a NameNormalizer) -> Self {
        Self { normalizer }
    }

    /// Exact key equality first, then hint containment (case-insensitive).
    pub fn match_record(&self, entity: &CanonicalEntity, record: &CandidateRecord) -> MatchResult {
        let key = self.normalizer.normalize(&record.display_text);
        judge(entity, &key, &record.display_text.to_lowercase())
    }

    /// The first entity in `pool` this record matches, as an index into `pool`.
    ///
    /// Entities are tried in pool order and the first that matches by either rule
    /// takes the record. Ties are not ranked: first match wins.
    pub fn pick(&self, pool: &[CanonicalEntity], record: &CandidateRecord) -> Option<(usize, MatchResult)> {
        let key = self.normalizer.normalize(&record.display_text);
        let lowered = record.display_text.to_lowercase();
        pool.iter().enumerate().find_map(|(i, e)| {
            let result = judge(e, &key, &lowered);
            result.matched().then_some((i, result))
        })
    }
}

fn judge(entity: &CanonicalEntity, record_key: &str, lowered_display: &str) -> MatchResult {
    if is_exact(entity, record_key) {
        MatchResult::on(MatchBasis::Exact)
    } else if has_hint(entity, lowered_display) {
        MatchResult::on(MatchBasis::Alias)
    } else {
        MatchResult::none()
    }
}

fn is_exact(entity: &CanonicalEntity, record_key: &str) -> bool {
    !entity.key.is_empty() && entity.key == record_key
}

fn has_hint(entity: &CanonicalEntity, lowered_display: &str) -> bool {
    entity
        .hints
        .iter()
        .map(|h| h.trim().to_lowercase())
        .any(|h| !h.is_empty() && lowered_display.contains(&h))
}
