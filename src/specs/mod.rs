// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific knowledge for each external source. A spec encodes *where the
//! records live in the HTML* and *how to read them*, and nothing else.
//!
//! ## What lives here
//! - **Index specs** (`IndexSpec`): URL template, shard list, record parser.
//! - **Pure HTML parsing** of captured pages into `CandidateRecord`s or field values,
//!   via the `core::html` readers.
//!
//! ## What does **not** live here
//! - Matching, fallbacks, state: that is `resolve`.
//! - Persistence and output files: `file` / `store`.
//! - Pacing: every spec is handed an already polite `Fetch`.
//!
//! ## Typical call chain
//! ```text
//! cli → scrape::collect_* → resolve::ResolutionPipeline
//!                              ↘ IndexWalker(specs::<source>::index())
//! ```
//!
//! ## Testing notes
//! - Parsers are pure `&str → records`, testable offline against saved HTML.
//!
//! In short: **`specs` knows how to read the pages.**
pub mod colors;
pub mod logos;
pub mod positions;
