// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use image::ImageFormat;
use serde::Serialize;

use crate::core::sanitize::asset_filename;
use crate::error::{Result, ScrapeError};
use crate::resolve::{Asset, AssetSink, CanonicalEntity};

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::Persist {
            path: dir.to_path_buf(),
            source: std::io::Error::other("path exists but is not a directory"),
        });
    }
    if !dir.exists() {
        fs::create_dir_all(dir)
            .map_err(|source| ScrapeError::Persist { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory(parent),
        _ => Ok(()),
    }
}

/// Pretty JSON with a trailing newline. Same value in, same bytes out.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<PathBuf> {
    ensure_parent(path)?;
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    fs::write(path, text).map_err(|source| ScrapeError::Persist { path: path.to_path_buf(), source })?;
    Ok(path.to_path_buf())
}

/// Saves images as `<dir>/<Name_With_Underscores>.png`; text passes straight through.
/// The directory is created on first save.
pub struct AssetDir {
    dir: PathBuf,
}

impl AssetDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(asset_filename(name, "png"))
    }
}

impl AssetSink for AssetDir {
    fn persist(&self, entity: &CanonicalEntity, asset: Asset) -> Result<String> {
        match asset {
            Asset::Text(text) => Ok(text),
            Asset::Image(img) => {
                ensure_directory(&self.dir)?;
                let path = self.path_for(&entity.name);
                img.save_with_format(&path, ImageFormat::Png).map_err(|e| ScrapeError::Persist {
                    path: path.clone(),
                    source: std::io::Error::other(e.to_string()),
                })?;
                Ok(asset_filename(&entity.name, "png"))
            }
        }
    }
}
