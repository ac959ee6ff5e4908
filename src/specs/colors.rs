// src/specs/colors.rs
//! Team color page: the first two `#RRGGBB` codes in the page text are the
//! primary and secondary colors.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::consts::{COLORS_URL, DEFAULT_PRIMARY, DEFAULT_SECONDARY};
use crate::core::{html, sanitize::slug};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TeamColors {
    pub primary: String,
    pub secondary: String,
}

impl Default for TeamColors {
    fn default() -> Self {
        Self { primary: s!(DEFAULT_PRIMARY), secondary: s!(DEFAULT_SECONDARY) }
    }
}

static HEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9A-Fa-f]{6}").expect("hex color pattern"));

pub fn page_url(school: &str) -> String {
    COLORS_URL.replace("{slug}", &slug(school))
}

/// Missing codes fall back to the defaults one by one.
pub fn parse_page(doc: &str) -> TeamColors {
    let text = html::page_text(doc);
    let mut codes = HEX.find_iter(&text).map(|m| m.as_str().to_string());
    let fallback = TeamColors::default();
    TeamColors {
        primary: codes.next().unwrap_or(fallback.primary),
        secondary: codes.next().unwrap_or(fallback.secondary),
    }
}
