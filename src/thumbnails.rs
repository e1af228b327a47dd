//! Thumbnail generation.
//!
//! For every file of every folder in a populated catalog: read it from the
//! folder's store, decode it, downscale it to fit the [`ThumbnailSpec`] box and
//! write it as PNG under the repository root.
//!
//! ## Output Structure
//!
//! ```text
//! <root>/thumbnails/
//! ├── gophers/
//! │   ├── gopher-front.png     # always PNG bytes, source file name kept
//! │   └── ...
//! └── dukes/
//!     └── ...
//! ```
//!
//! Per-folder directories are created as needed. The first failure of any
//! kind aborts the stage; thumbnails written before it stay on disk.

use crate::catalog::{Catalog, Folder};
use crate::fsutil;
use crate::imaging::{self, ImagingError, ThumbnailSpec};
use crate::store::StoreError;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory under the repository root that receives thumbnails.
pub const THUMBNAIL_DIR: &str = "thumbnails";

#[derive(Error, Debug)]
pub enum ThumbnailError {
    #[error("Failed to open {key}/{file}: {source}")]
    Open {
        key: String,
        file: String,
        #[source]
        source: StoreError,
    },
    #[error("Failed to decode {key}/{file}: {source}")]
    Decode {
        key: String,
        file: String,
        #[source]
        source: ImagingError,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: ImagingError,
    },
}

/// A thumbnail that was written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedThumbnail {
    pub key: String,
    pub file: String,
    pub path: PathBuf,
    pub source_dimensions: (u32, u32),
    pub dimensions: (u32, u32),
}

/// Output path for one thumbnail: `<root>/thumbnails/<key>/<file>`.
pub fn thumbnail_path(root: &Path, key: &str, file: &str) -> PathBuf {
    root.join(THUMBNAIL_DIR).join(key).join(file)
}

/// Generate thumbnails for every file in the catalog, in catalog order.
pub fn generate(
    root: &Path,
    catalog: &Catalog,
    spec: &ThumbnailSpec,
) -> Result<Vec<GeneratedThumbnail>, ThumbnailError> {
    tracing::info!(
        files = catalog.file_count(),
        max_width = spec.max_width,
        max_height = spec.max_height,
        "generating thumbnails"
    );

    let mut generated = Vec::with_capacity(catalog.file_count());
    for folder in catalog.folders() {
        let dir = root.join(THUMBNAIL_DIR).join(&folder.key);
        std::fs::create_dir_all(&dir).map_err(|source| ThumbnailError::Write {
            path: dir.clone(),
            source,
        })?;

        for file in &folder.files {
            generated.push(generate_one(root, folder, file, spec)?);
        }
    }
    Ok(generated)
}

fn generate_one(
    root: &Path,
    folder: &Folder,
    file: &str,
    spec: &ThumbnailSpec,
) -> Result<GeneratedThumbnail, ThumbnailError> {
    let open_err = |source| ThumbnailError::Open {
        key: folder.key.clone(),
        file: file.to_string(),
        source,
    };

    let mut bytes = Vec::new();
    folder
        .store()
        .open(file)
        .map_err(open_err)?
        .read_to_end(&mut bytes)
        .map_err(|e| open_err(StoreError::Io(e)))?;

    let img = imaging::decode(&bytes).map_err(|source| ThumbnailError::Decode {
        key: folder.key.clone(),
        file: file.to_string(),
        source,
    })?;
    let thumb = imaging::thumbnail(&img, spec);

    let path = thumbnail_path(root, &folder.key, file);
    let write_err = |source| ThumbnailError::Write {
        path: path.clone(),
        source,
    };
    let mut writer = BufWriter::new(fsutil::create_truncated(&path).map_err(write_err)?);
    imaging::write_png(&thumb, &mut writer).map_err(|source| ThumbnailError::Encode {
        path: path.clone(),
        source,
    })?;
    writer.flush().map_err(write_err)?;

    tracing::debug!(
        folder = %folder.key,
        file,
        width = thumb.width(),
        height = thumb.height(),
        "wrote thumbnail"
    );

    Ok(GeneratedThumbnail {
        key: folder.key.clone(),
        file: file.to_string(),
        path,
        source_dimensions: (img.width(), img.height()),
        dimensions: (thumb.width(), thumb.height()),
    })
}
