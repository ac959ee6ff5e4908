// src/specs/logos.rs
//! Logo index: one page per letter, each logo an `<img alt="<School> <Mascot> Logo">`.
//! Fallback pages are single-logo pages read with the same parser.

use crate::config::consts::LOGO_INDEX_URL;
use crate::core::html;
use crate::resolve::types::{CandidateRecord, ShardId};
use crate::resolve::walker::IndexSpec;

pub fn index() -> IndexSpec {
    IndexSpec {
        name: "logos",
        url_tmpl: s!(LOGO_INDEX_URL),
        shards: IndexSpec::alphabet(),
        parse: parse_page,
    }
}

/// `(alt, src)` of every described image. Inline `data:` sources are kept as-is.
pub fn parse_page(doc: &str, shard: &ShardId) -> Vec<CandidateRecord> {
    html::image_records(doc)
        .into_iter()
        .map(|(alt, src)| CandidateRecord::new(alt, src, shard.clone()))
        .collect()
}
