// src/resolve/fallback.rs
//! Second chance for entities the index walk missed.
//!
//! Only entities listed in the alias configuration's fallback table are tried, each
//! on its own page with its own needle. The needle is looser than the primary hints,
//! which is why it is never applied to any other entity or page.

use crate::config::aliases::AliasConfig;
use crate::core::net::Fetch;
use crate::resolve::types::{CandidateRecord, CanonicalEntity, MatchBasis, MatchResult, ShardId};
use crate::resolve::walker::ParseFn;

#[derive(Debug)]
pub enum FallbackOutcome {
    /// No alternate source registered: nothing to try.
    NoSource,
    /// Page fetched (or failed), nothing on it matched the needle.
    NoMatch,
    Matched { record: CandidateRecord, result: MatchResult },
}

pub struct FallbackResolver<'a> {
    aliases: &'a AliasConfig,
    fetch: &'a dyn Fetch,
    parse: ParseFn,
}

impl<'a> FallbackResolver<'a> {
    pub fn new(aliases: &'a AliasConfig, fetch: &'a dyn Fetch, parse: ParseFn) -> Self {
        Self { aliases, fetch, parse }
    }

    pub fn has_source(&self, entity: &CanonicalEntity) -> bool {
        self.aliases.fallback_for(&entity.name).is_some()
    }

    pub fn resolve_fallback(&self, entity: &CanonicalEntity) -> FallbackOutcome {
        let Some(source) = self.aliases.fallback_for(&entity.name) else {
            return FallbackOutcome::NoSource;
        };
        let needle = source.needle.trim().to_lowercase();
        if needle.is_empty() {
            logw!("fallback for {} has an empty needle; skipping", entity.name);
            return FallbackOutcome::NoMatch;
        }

        let doc = match self.fetch.get_text(&source.url) {
            Ok(doc) => doc,
            Err(e) => {
                logw!("fallback page for {}: {e}", entity.name);
                return FallbackOutcome::NoMatch;
            }
        };

        let shard = ShardId(source.url.clone());
        let hit = (self.parse)(&doc, &shard)
            .into_iter()
            .find(|r| r.display_text.to_lowercase().contains(&needle));

        match hit {
            Some(record) => FallbackOutcome::Matched {
                record,
                result: MatchResult::on(MatchBasis::FallbackPage),
            },
            None => FallbackOutcome::NoMatch,
        }
    }
}
