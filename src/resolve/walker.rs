// src/resolve/walker.rs
//! Sharded index walking.
//!
//! An [`IndexSpec`] says where each shard lives and how to read records out of it;
//! [`IndexWalker`] runs it against a [`Fetch`]. Shards are fetched only when asked for,
//! one at a time, and a shard that fails to load is simply empty.

use crate::core::net::Fetch;
use crate::resolve::types::{CandidateRecord, ShardId};

pub trait SourceIndexWalker {
    /// Fixed visiting order.
    fn shards(&self) -> Vec<ShardId>;

    /// Records of one shard. Never fails: fetch problems yield an empty list.
    /// Calling it again for the same shard re-fetches it.
    fn fetch_shard(&self, shard: &ShardId) -> Vec<CandidateRecord>;
}

/// Turns one fetched page into records.
pub type ParseFn = fn(doc: &str, shard: &ShardId) -> Vec<CandidateRecord>;

/// Generic sharded index: a URL template with `{shard}` plus a page parser.
#[derive(Clone)]
pub struct IndexSpec {
    pub name: &'static str,
    pub url_tmpl: String,
    pub shards: Vec<ShardId>,
    pub parse: ParseFn,
}

impl IndexSpec {
    pub fn build_url(&self, shard: &ShardId) -> String {
        self.url_tmpl.replace("{shard}", &shard.0)
    }

    /// One shard per lower-case letter.
    pub fn alphabet() -> Vec<ShardId> {
        crate::config::consts::ALPHABET
            .chars()
            .map(|c| ShardId(c.to_string()))
            .collect()
    }
}

pub struct IndexWalker<'a> {
    spec: IndexSpec,
    fetch: &'a dyn Fetch,
}

impl<'a> IndexWalker<'a> {
    pub fn new(spec: IndexSpec, fetch: &'a dyn Fetch) -> Self {
        Self { spec, fetch }
    }
}

impl SourceIndexWalker for IndexWalker<'_> {
    fn shards(&self) -> Vec<ShardId> {
        self.spec.shards.clone()
    }

    fn fetch_shard(&self, shard: &ShardId) -> Vec<CandidateRecord> {
        let url = self.spec.build_url(shard);
        match self.fetch.get_text(&url) {
            Ok(doc) => {
                let records = (self.spec.parse)(&doc, shard);
                logd!("{} shard {shard}: {} records", self.spec.name, records.len());
                records
            }
            Err(e) => {
                logw!("{} shard {shard}: {e}; treating as empty", self.spec.name);
                Vec::new()
            }
        }
    }
}
