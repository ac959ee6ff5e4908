// src/specs/positions.rs
//! Player index and profile pages.
//!
//! Index (`/cbb/players/f-index.html`): one `<p><a href="/cbb/players/x-1.html">Name</a> ...</p>`
//! per player. Profile: `div#meta` holds `<strong>Position:</strong> Forward ▪ ...`.

use crate::config::consts::{PLAYER_INDEX_URL, PLAYER_SITE};
use crate::core::html;
use crate::resolve::types::{CandidateRecord, ShardId};
use crate::resolve::walker::IndexSpec;

pub const META_CONTAINER: &str = "div#meta";

pub fn index() -> IndexSpec {
    IndexSpec {
        name: "players",
        url_tmpl: s!(PLAYER_INDEX_URL),
        shards: IndexSpec::alphabet(),
        parse: parse_index,
    }
}

pub fn parse_index(doc: &str, shard: &ShardId) -> Vec<CandidateRecord> {
    html::paragraph_links(doc)
        .into_iter()
        .map(|(name, href)| CandidateRecord::new(name, absolute(&href), shard.clone()))
        .collect()
}

fn absolute(href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        s!(href)
    } else if href.starts_with('/') {
        join!(PLAYER_SITE, href)
    } else {
        join!(PLAYER_SITE, "/", href)
    }
}
