//! The asset catalog: an ordered list of named folders and their files.
//!
//! A [`Catalog`] is built once with every folder's file list empty, then
//! [`populated`](Catalog::populate) exactly once by listing each folder's
//! store. From then on it is only read: the thumbnail and README stages take
//! `&Catalog`.
//!
//! ## Bundled folders
//!
//! ```text
//! assets/
//! ├── gophers/      → "Gophers"
//! ├── dukes/        → "Dukes"
//! ├── misc/         → "Miscellaneous"
//! └── uncolored/    → "Uncolored"
//! ```
//!
//! File order is whatever the store enumerates. Nothing is sorted or filtered,
//! so a stray non-image file in an asset folder shows up in the catalog too.

use crate::store::{AssetStore, EmbeddedStore, StoreError};
use include_dir::{Dir, include_dir};
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

static GOPHERS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets/gophers");
static DUKES: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets/dukes");
static MISC: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets/misc");
static UNCOLORED: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets/uncolored");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to list folder '{key}': {source}")]
    List {
        key: String,
        #[source]
        source: StoreError,
    },
    #[error("Duplicate folder key: {0}")]
    DuplicateKey(String),
    #[error("Catalog has already been populated")]
    AlreadyPopulated,
}

/// One named asset group backed by a store.
#[derive(Serialize)]
pub struct Folder {
    /// Short identifier, used as an output path segment.
    pub key: String,
    /// Human-readable label for rendered output.
    pub display_name: String,
    #[serde(skip)]
    store: Box<dyn AssetStore>,
    /// Entry names, empty until the catalog is populated.
    pub files: Vec<String>,
}

impl Folder {
    pub fn new(
        key: impl Into<String>,
        display_name: impl Into<String>,
        store: impl AssetStore + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            store: Box::new(store),
            files: Vec::new(),
        }
    }

    pub fn store(&self) -> &dyn AssetStore {
        self.store.as_ref()
    }
}

impl std::fmt::Debug for Folder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Folder")
            .field("key", &self.key)
            .field("display_name", &self.display_name)
            .field("files", &self.files)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of folders with unique keys.
#[derive(Debug, Serialize)]
pub struct Catalog {
    folders: Vec<Folder>,
    #[serde(skip)]
    populated: bool,
}

impl Catalog {
    /// Create an unpopulated catalog. Rejects duplicate keys.
    pub fn new(folders: Vec<Folder>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for folder in &folders {
            if !seen.insert(folder.key.as_str()) {
                return Err(CatalogError::DuplicateKey(folder.key.clone()));
            }
        }
        Ok(Self {
            folders,
            populated: false,
        })
    }

    /// Fill every folder's file list from its store.
    ///
    /// Every store is listed before any folder is touched, so the first
    /// listing failure leaves all file lists empty and the catalog can be
    /// populated again.
    pub fn populate(&mut self) -> Result<(), CatalogError> {
        if self.populated {
            return Err(CatalogError::AlreadyPopulated);
        }

        let mut listings = Vec::with_capacity(self.folders.len());
        for folder in &self.folders {
            let entries = folder
                .store
                .list_entries()
                .map_err(|source| CatalogError::List {
                    key: folder.key.clone(),
                    source,
                })?;
            tracing::debug!(folder = %folder.key, count = entries.len(), "listed store");
            listings.push(entries);
        }

        for (folder, entries) in self.folders.iter_mut().zip(listings) {
            folder.files = entries;
        }
        self.populated = true;
        Ok(())
    }

    pub fn is_populated(&self) -> bool {
        self.populated
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    /// Total number of files across all folders.
    pub fn file_count(&self) -> usize {
        self.folders.iter().map(|f| f.files.len()).sum()
    }
}

/// The four folders compiled into the binary, unpopulated.
pub fn bundled() -> Catalog {
    Catalog {
        folders: vec![
            Folder::new("gophers", "Gophers", EmbeddedStore::new(&GOPHERS)),
            Folder::new("dukes", "Dukes", EmbeddedStore::new(&DUKES)),
            Folder::new("misc", "Miscellaneous", EmbeddedStore::new(&MISC)),
            Folder::new("uncolored", "Uncolored", EmbeddedStore::new(&UNCOLORED)),
        ],
        populated: false,
    }
}
