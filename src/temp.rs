//! Staging directories for downloads and archive extraction.
//!
//! Staging dirs are never created under the current working directory, even when
//! TMPDIR is relative (e.g. TMPDIR=tmp), so an extracted bundle can't land in the
//! bundle being installed.

use std::env;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::error::{Result, io_error};

/// Returns an absolute directory path suitable for creating temporary directories.
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        #[cfg(windows)]
        {
            env::var("TEMP")
                .or_else(|_| env::var("TMP"))
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
        }
        #[cfg(not(windows))]
        {
            PathBuf::from("/tmp")
        }
    }
}

/// Create a staging directory that is removed when dropped.
pub fn staging_dir() -> Result<TempDir> {
    tempfile::Builder::new()
        .prefix("featurekit-")
        .tempdir_in(temp_dir_base())
        .map_err(|e| io_error(format!("Failed to create staging directory: {e}")))
}
