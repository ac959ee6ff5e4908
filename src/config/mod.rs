// src/config/mod.rs
pub mod aliases;
pub mod consts;
pub mod options;

pub use aliases::{AliasConfig, FallbackSource};
pub use options::{JobKind, Politeness, RunOptions};
