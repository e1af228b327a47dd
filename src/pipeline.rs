//! The linear run: locate → catalog → [thumbnails] → [README].
//!
//! Each stage returns a `Result`; the first error ends the run and is handed
//! back to the caller unchanged. Nothing here logs-and-exits, so the whole
//! pipeline can be driven from tests against a temporary repository and
//! in-memory stores.

use crate::catalog::{Catalog, CatalogError};
use crate::imaging::ThumbnailSpec;
use crate::readme::{self, ReadmeError};
use crate::root::RootError;
use crate::thumbnails::{self, GeneratedThumbnail, ThumbnailError};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Root(#[from] RootError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Thumbnail(#[from] ThumbnailError),
    #[error(transparent)]
    Readme(#[from] ReadmeError),
    #[error("Failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Which output stages to run after the catalog is populated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stages {
    pub thumbnails: bool,
    pub readme: bool,
    pub thumbnail_spec: ThumbnailSpec,
}

impl Stages {
    /// Render the README only. This is what a bare invocation does.
    pub fn readme() -> Self {
        Self {
            thumbnails: false,
            readme: true,
            thumbnail_spec: ThumbnailSpec::default(),
        }
    }

    pub fn thumbnails() -> Self {
        Self {
            thumbnails: true,
            readme: false,
            thumbnail_spec: ThumbnailSpec::default(),
        }
    }

    /// Thumbnails first, then the README that links to them.
    pub fn build() -> Self {
        Self {
            thumbnails: true,
            readme: true,
            thumbnail_spec: ThumbnailSpec::default(),
        }
    }

    /// Populate the catalog and write nothing.
    pub fn list() -> Self {
        Self {
            thumbnails: false,
            readme: false,
            thumbnail_spec: ThumbnailSpec::default(),
        }
    }
}

/// What a run produced.
#[derive(Debug)]
pub struct RunReport {
    pub root: PathBuf,
    pub catalog: Catalog,
    pub thumbnails: Vec<GeneratedThumbnail>,
    pub readme: Option<PathBuf>,
}

/// Run the pipeline against an already located root.
pub fn run(root: &Path, mut catalog: Catalog, stages: &Stages) -> Result<RunReport, PipelineError> {
    tracing::info!(root = %root.display(), "populating catalog");
    catalog.populate()?;
    tracing::info!(
        folders = catalog.folders().len(),
        files = catalog.file_count(),
        "catalog populated"
    );

    let thumbnails = if stages.thumbnails {
        thumbnails::generate(root, &catalog, &stages.thumbnail_spec)?
    } else {
        Vec::new()
    };

    let readme = if stages.readme {
        Some(readme::write(root, &catalog)?)
    } else {
        None
    };

    Ok(RunReport {
        root: root.to_path_buf(),
        catalog,
        thumbnails,
        readme,
    })
}
