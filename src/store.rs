//! Read-only asset stores.
//!
//! A store is a flat, named collection of byte blobs. The catalog only ever
//! needs two things from it: the names at its root, in the store's own order,
//! and a way to read one of them back. [`AssetStore`] is exactly that surface,
//! so the embedded production stores and the in-memory fakes used by tests
//! are interchangeable.
//!
//! The production implementation is [`EmbeddedStore`], backed by a directory
//! compiled into the binary with `include_dir!`.

use include_dir::{Dir, DirEntry};
use std::io::{Cursor, Read};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("listing failed: {0}")]
    List(String),
    #[error("no such entry: {0}")]
    NotFound(String),
    #[error("{0} is a directory")]
    IsDirectory(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A read-only byte store addressed by entry name.
pub trait AssetStore {
    /// Names of every entry at the root of the store, in enumeration order.
    ///
    /// Subdirectories are listed too; nothing is filtered.
    fn list_entries(&self) -> Result<Vec<String>, StoreError>;

    /// Open an entry for reading.
    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>, StoreError>;
}

/// Store backed by a directory embedded at compile time.
pub struct EmbeddedStore {
    dir: &'static Dir<'static>,
}

impl EmbeddedStore {
    pub fn new(dir: &'static Dir<'static>) -> Self {
        Self { dir }
    }
}

fn entry_name(entry: &DirEntry<'_>) -> Option<String> {
    entry
        .path()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

impl AssetStore for EmbeddedStore {
    fn list_entries(&self) -> Result<Vec<String>, StoreError> {
        self.dir
            .entries()
            .iter()
            .map(|entry| {
                entry_name(entry).ok_or_else(|| {
                    StoreError::List(format!("unnamed entry {}", entry.path().display()))
                })
            })
            .collect()
    }

    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>, StoreError> {
        let entry = self
            .dir
            .entries()
            .iter()
            .find(|entry| entry_name(entry).as_deref() == Some(name))
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;

        match entry {
            DirEntry::File(file) => Ok(Box::new(Cursor::new(file.contents()))),
            DirEntry::Dir(_) => Err(StoreError::IsDirectory(name.to_string())),
        }
    }
}
