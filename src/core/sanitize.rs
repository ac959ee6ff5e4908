// src/core/sanitize.rs
use crate::config::consts::ASSET_SEP;

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// File stem for an entity's asset: whitespace runs become `_`, path separators vanish.
/// `"Saint Joseph's"` → `"Saint_Joseph's"`.
pub fn asset_stem(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_sep = false;
    for ch in name.trim().chars() {
        if ch.is_whitespace() {
            if !last_sep { out.push(ASSET_SEP); last_sep = true; }
        } else if ch == '/' || ch == '\\' || ch == ':' || ch.is_control() {
            continue;
        } else { out.push(ch); last_sep = false; }
    }
    out
}

pub fn asset_filename(name: &str, ext: &str) -> String {
    join!(&asset_stem(name), ".", ext)
}

/// URL slug: lower-case, spaces to dashes, apostrophes (straight or curly) dropped.
pub fn slug(name: &str) -> String {
    normalize_ws(name)
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '\'' | '’' | '‘'))
        .map(|c| if c == ' ' { '-' } else { c })
        .collect()
}

/// Trim a scraped field value: quotes out, stop at the first bullet separator.
pub fn clean_field(s: &str) -> String {
    let cut = s.split(['▪', '•', '|']).next().unwrap_or("");
    let cut = cut.trim().trim_start_matches(':');
    normalize_ws(&cut.replace('"', ""))
}
