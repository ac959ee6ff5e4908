// src/resolve/normalize.rs
//! Name keys.
//!
//! `normalize` is pure and total: NFKC fold, lower-case, apostrophes/periods/quotes
//! dropped, dash variants unified, whitespace runs collapsed, then one alias
//! substitution. Two spellings of the same entity must land on the same key.

use std::collections::HashMap;

use unicode_normalization::UnicodeNormalization;

use crate::config::aliases::AliasConfig;
use crate::resolve::types::CanonicalEntity;

#[derive(Clone, Debug, Default)]
pub struct NameNormalizer {
    /// folded alternate spelling → canonical name (as written in the roster)
    substitutions: HashMap<String, String>,
}

impl NameNormalizer {
    pub fn new(aliases: &AliasConfig) -> Self {
        let substitutions = aliases
            .substitutions
            .iter()
            .map(|(raw, canonical)| (fold(raw), canonical.clone()))
            .filter(|(raw, _)| !raw.is_empty())
            .collect();
        Self { substitutions }
    }

    pub fn normalize(&self, raw: &str) -> String {
        let folded = fold(raw);
        match self.substitutions.get(&folded) {
            Some(canonical) => fold(canonical),
            None => folded,
        }
    }

    /// The roster spelling `raw` stands for, when it is a known alternate.
    pub fn canonical_name<'a>(&'a self, raw: &'a str) -> &'a str {
        self.substitutions.get(&fold(raw)).map(String::as_str).unwrap_or(raw)
    }

    pub fn entity(&self, name: &str, hints: &[String]) -> CanonicalEntity {
        CanonicalEntity {
            name: s!(name),
            key: self.normalize(name),
            hints: hints.to_vec(),
        }
    }
}

fn fold(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;

    for ch in raw.nfkc().flat_map(char::to_lowercase) {
        let mapped = match ch {
            '\'' | '’' | '‘' | '`' | '´' | 'ʼ' | '.' | '"' | '“' | '”' | ',' => None,
            '-' | '‐' | '‑' | '‒' | '–' | '—' | '―' => Some('-'),
            c if c.is_whitespace() => Some(' '),
            c => Some(c),
        };
        match mapped {
            None => {}
            Some(' ') => pending_space = !out.is_empty(),
            Some(c) => {
                if pending_space { out.push(' '); pending_space = false; }
                out.push(c);
            }
        }
    }
    out
}
