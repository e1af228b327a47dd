//! Output file creation shared by the thumbnail and README stages.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

/// Permission bits for generated files on Unix.
pub const OUTPUT_MODE: u32 = 0o755;

/// Open `path` for writing, creating it or truncating an existing file.
///
/// On Unix a newly created file gets [`OUTPUT_MODE`] (before umask). The
/// handle is closed when dropped.
pub fn create_truncated(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(OUTPUT_MODE);
    }
    options.open(path)
}
