//! Primitive file discovery
//!
//! Only the top level of a directory is scanned; subdirectories (and anything in
//! them) are never candidates.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, file_read_failed};
use crate::primitive::PRIMITIVE_EXTENSION;

/// Whether a file name carries the primitive descriptor extension
pub fn is_primitive_file_name(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == PRIMITIVE_EXTENSION)
        && !name.starts_with('.')
}

/// List the primitive files directly inside `directory`, sorted by file name.
pub fn list_primitive_files(directory: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let io = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("filesystem loop"));
            file_read_failed(directory, &io)
        })?;

        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name().to_str().is_some_and(is_primitive_file_name) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
