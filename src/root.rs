//! Repository root discovery.
//!
//! Every output path is relative to the root of the git checkout the program
//! is run from. The root is the nearest directory, starting at the working
//! directory and walking up, that has a `.git` **directory** as a direct child.
//! A `.git` file (as used by worktrees and submodules) does not count.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Marker that identifies a repository root.
pub const GIT_MARKER: &str = ".git";

#[derive(Error, Debug)]
pub enum RootError {
    #[error("Could not determine the working directory: {0}")]
    CurrentDir(#[source] std::io::Error),
    #[error("Could not find git repository's root above {}", .0.display())]
    NotFound(PathBuf),
}

/// Locate the repository root above the current working directory.
pub fn locate_root() -> Result<PathBuf, RootError> {
    let cwd = std::env::current_dir().map_err(RootError::CurrentDir)?;
    locate_root_from(&cwd)
}

/// Locate the repository root at or above `start`.
pub fn locate_root_from(start: &Path) -> Result<PathBuf, RootError> {
    let mut current = start;
    loop {
        if current.join(GIT_MARKER).is_dir() {
            tracing::debug!(root = %current.display(), "found repository root");
            return Ok(current.to_path_buf());
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return Err(RootError::NotFound(start.to_path_buf())),
        }
    }
}
