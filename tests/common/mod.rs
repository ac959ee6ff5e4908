// tests/common/mod.rs
//
// Offline fixtures shared by the integration tests.
//
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Cursor;
use std::time::Instant;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, Rgba, RgbaImage};

use hoops_scrape::core::Fetch;
use hoops_scrape::resolve::{CandidateRecord, ShardId, SourceIndexWalker};
use hoops_scrape::{Result, ScrapeError};

/// Serves canned pages and bytes by URL; anything else is a 404.
#[derive(Default)]
pub struct FixtureFetch {
    pages: HashMap<String, String>,
    bytes: HashMap<String, Vec<u8>>,
    pub calls: RefCell<Vec<String>>,
    /// When each call arrived, same order as `calls`.
    pub stamps: RefCell<Vec<Instant>>,
}

impl FixtureFetch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }

    pub fn bytes(mut self, url: &str, body: Vec<u8>) -> Self {
        self.bytes.insert(url.to_string(), body);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn record(&self, url: &str) {
        self.calls.borrow_mut().push(url.to_string());
        self.stamps.borrow_mut().push(Instant::now());
    }
}

impl Fetch for FixtureFetch {
    fn get_text(&self, url: &str) -> Result<String> {
        self.record(url);
        self.pages
            .get(url)
            .cloned()
            .ok_or(ScrapeError::Status { url: url.to_string(), status: 404 })
    }

    fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        self.record(url);
        self.bytes
            .get(url)
            .cloned()
            .ok_or(ScrapeError::Status { url: url.to_string(), status: 404 })
    }
}

/// Shards served from memory, in the order given.
pub struct StaticWalker {
    pub shards: Vec<(ShardId, Vec<CandidateRecord>)>,
}

impl StaticWalker {
    pub fn new(shards: Vec<(&str, Vec<(&str, &str)>)>) -> Self {
        let shards = shards
            .into_iter()
            .map(|(id, recs)| {
                let id = ShardId::from(id);
                let recs = recs
                    .into_iter()
                    .map(|(text, loc)| CandidateRecord::new(text, loc, id.clone()))
                    .collect();
                (id, recs)
            })
            .collect();
        Self { shards }
    }
}

impl SourceIndexWalker for StaticWalker {
    fn shards(&self) -> Vec<ShardId> {
        self.shards.iter().map(|(id, _)| id.clone()).collect()
    }

    fn fetch_shard(&self, shard: &ShardId) -> Vec<CandidateRecord> {
        self.shards
            .iter()
            .find(|(id, _)| id == shard)
            .map(|(_, recs)| recs.clone())
            .unwrap_or_default()
    }
}

pub fn png_bytes(rgba: [u8; 4]) -> Vec<u8> {
    let img = RgbaImage::from_pixel(2, 2, Rgba(rgba));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).unwrap();
    out.into_inner()
}

pub fn png_data_uri(rgba: [u8; 4]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png_bytes(rgba)))
}

/// Valid base64, but not an image.
pub fn corrupt_data_uri() -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(b"definitely not a png"))
}

pub fn logo_page(imgs: &[(&str, &str)]) -> String {
    let mut html = String::from("<html><body><div class=\"grid\">");
    for (alt, src) in imgs {
        html.push_str(&format!("<figure><img alt=\"{alt}\" src=\"{src}\"></figure>"));
    }
    html.push_str("</div></body></html>");
    html
}
