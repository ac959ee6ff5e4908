// src/resolve/extract.rs
//! Asset extraction for a matched record.
//!
//! Images come either inline (`data:image/...;base64,...`, no network) or from a URL.
//! Whatever the source format, the result is decoded to RGBA8 so every saved logo
//! has the same encoding. Text fields are read off a profile page.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::RgbaImage;

use crate::core::{html, net::Fetch, sanitize::clean_field};
use crate::error::{Result, ScrapeError};
use crate::resolve::types::{Asset, CandidateRecord};

pub trait AssetExtractor {
    /// A failure leaves the entity unresolved; it is never fatal to the run.
    fn extract(&self, record: &CandidateRecord) -> Result<Asset>;
}

pub struct ImageExtractor<'a> {
    fetch: &'a dyn Fetch,
}

impl<'a> ImageExtractor<'a> {
    pub fn new(fetch: &'a dyn Fetch) -> Self {
        Self { fetch }
    }
}

impl AssetExtractor for ImageExtractor<'_> {
    fn extract(&self, record: &CandidateRecord) -> Result<Asset> {
        let locator = record.locator.trim();
        let bytes = if locator.starts_with("data:") {
            decode_data_uri(locator)?
        } else {
            self.fetch.get_bytes(&absolute_url(locator))?
        };
        decode_image(&bytes).map(Asset::Image)
    }
}

/// Payload of a base64 `data:` URI. Percent-encoded payloads (inline SVG) are refused.
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>> {
    let (header, payload) = uri
        .split_once(',')
        .ok_or_else(|| ScrapeError::Decode(s!("data URI without payload")))?;
    if !header.ends_with(";base64") {
        return Err(ScrapeError::Decode(format!("unsupported data URI `{header}`")));
    }
    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| ScrapeError::Decode(format!("base64: {e}")))
}

pub fn decode_image(bytes: &[u8]) -> Result<RgbaImage> {
    image::load_from_memory(bytes)
        .map(|img| img.to_rgba8())
        .map_err(|e| ScrapeError::Decode(format!("image: {e}")))
}

fn absolute_url(locator: &str) -> String {
    if locator.starts_with("//") { join!("https:", locator) } else { s!(locator) }
}

/// Reads one labelled field (e.g. "Position") from the page the record links to.
pub struct ProfileFieldExtractor<'a> {
    fetch: &'a dyn Fetch,
    container: &'static str,
    label: &'static str,
}

impl<'a> ProfileFieldExtractor<'a> {
    pub fn new(fetch: &'a dyn Fetch, container: &'static str, label: &'static str) -> Self {
        Self { fetch, container, label }
    }
}

impl AssetExtractor for ProfileFieldExtractor<'_> {
    fn extract(&self, record: &CandidateRecord) -> Result<Asset> {
        let page = self.fetch.get_text(&record.locator)?;
        let missing = || ScrapeError::MissingField { url: record.locator.clone(), field: s!(self.label) };

        let raw = html::labelled_field(&page, self.container, self.label).ok_or_else(missing)?;
        let value = clean_field(&raw);
        if value.is_empty() {
            return Err(missing());
        }
        Ok(Asset::Text(value))
    }
}
