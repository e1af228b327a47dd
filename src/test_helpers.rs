//! Shared test utilities for the gopher-catalog test suite.
//!
//! Provides in-memory stores, synthetic image bytes and a throwaway
//! repository, so every stage can be exercised without the embedded assets.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let repo = fake_repo();
//! let catalog = populated(vec![Folder::new(
//!     "gophers",
//!     "Gophers",
//!     MemoryStore::with_files(vec![("a.png", png_bytes(300, 200))]),
//! )]);
//! ```

use crate::catalog::{Catalog, Folder};
use crate::store::{AssetStore, StoreError};
use image::{ImageEncoder, RgbImage, RgbaImage};
use std::cell::Cell;
use std::io::{Cursor, Read};
use tempfile::TempDir;

// =========================================================================
// Stores
// =========================================================================

/// In-memory store that lists entries in insertion order.
#[derive(Default)]
pub struct MemoryStore {
    entries: Vec<(String, Vec<u8>)>,
    /// Listed but not openable.
    phantoms: Vec<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries with the given names and empty contents.
    pub fn with_names(names: &[&str]) -> Self {
        Self {
            entries: names.iter().map(|n| (n.to_string(), Vec::new())).collect(),
            phantoms: Vec::new(),
        }
    }

    pub fn with_files(files: Vec<(&str, Vec<u8>)>) -> Self {
        Self {
            entries: files
                .into_iter()
                .map(|(n, bytes)| (n.to_string(), bytes))
                .collect(),
            phantoms: Vec::new(),
        }
    }

    /// List `name` after the real entries without making it openable.
    pub fn list_extra(&mut self, name: &str) {
        self.phantoms.push(name.to_string());
    }
}

impl AssetStore for MemoryStore {
    fn list_entries(&self) -> Result<Vec<String>, StoreError> {
        Ok(self
            .entries
            .iter()
            .map(|(n, _)| n.clone())
            .chain(self.phantoms.iter().cloned())
            .collect())
    }

    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>, StoreError> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, bytes)| Box::new(Cursor::new(bytes.as_slice())) as Box<dyn Read + '_>)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }
}

/// Store whose listing always fails.
pub struct FailingStore;

impl AssetStore for FailingStore {
    fn list_entries(&self) -> Result<Vec<String>, StoreError> {
        Err(StoreError::List("simulated listing failure".to_string()))
    }

    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>, StoreError> {
        Err(StoreError::NotFound(name.to_string()))
    }
}

/// Store whose first listing fails and later listings succeed.
pub struct FlakyStore {
    names: Vec<String>,
    failed: Cell<bool>,
}

impl FlakyStore {
    pub fn new(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|n| n.to_string()).collect(),
            failed: Cell::new(false),
        }
    }
}

impl AssetStore for FlakyStore {
    fn list_entries(&self) -> Result<Vec<String>, StoreError> {
        if !self.failed.replace(true) {
            return Err(StoreError::List("simulated transient failure".to_string()));
        }
        Ok(self.names.clone())
    }

    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>, StoreError> {
        Err(StoreError::NotFound(name.to_string()))
    }
}

// =========================================================================
// Catalogs
// =========================================================================

/// Build and populate a catalog. Panics on duplicate keys or listing errors.
pub fn populated(folders: Vec<Folder>) -> Catalog {
    let mut catalog = Catalog::new(folders).unwrap();
    catalog.populate().unwrap();
    catalog
}

// =========================================================================
// Image fixtures
// =========================================================================

/// A gradient RGBA PNG of the given size.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    });
    let mut buf = Vec::new();
    image::codecs::png::PngEncoder::new(&mut buf)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgba8)
        .unwrap();
    buf
}

/// A gradient RGB JPEG of the given size.
pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let mut buf = Vec::new();
    image::codecs::jpeg::JpegEncoder::new(&mut buf)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
    buf
}

// =========================================================================
// Repository
// =========================================================================

/// Temporary directory with an empty `.git` directory in it.
pub fn fake_repo() -> TempDir {
    let tmp = TempDir::new().unwrap();
    std::fs::create_dir(tmp.path().join(crate::root::GIT_MARKER)).unwrap();
    tmp
}
