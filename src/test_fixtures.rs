//! Test fixtures shared by unit tests.
//!
//! Provides temp directories, descriptor texts for a small bundle of custom
//! primitives, and archive builders so installer tests can exercise every
//! source representation without touching the network.
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, write_bundle};
//!
//! let temp = create_temp_dir();
//! let bundle = write_bundle(temp.path());
//! ```

#![allow(clippy::expect_used)]

use std::ffi::OsString;
use std::fs::File;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use tempfile::TempDir;

pub const CUSTOM_MAX: &str = "\
kind: aggregation
class: CustomMax
input_types: [numeric]
return_type: numeric
description: Maximum non-null value of a numeric column.
stack_on_self: false
";

pub const CUSTOM_MEAN: &str = "\
kind: aggregation
class: CustomMean
input_types: [numeric]
return_type: numeric
description: Mean of a numeric column, ignoring nulls.
";

pub const CUSTOM_SUM: &str = "\
# helper definitions are allowed next to the primitive
kind: helper
class: Accumulator
---
kind: aggregation
class: CustomSum
input_types: [numeric]
return_type: numeric
";

pub const MULTIPLE_PRIMITIVES: &str = "\
kind: aggregation
class: CustomMax
input_types: [numeric]
return_type: numeric
---
kind: transform
class: CustomAbsolute
input_types: [numeric]
return_type: numeric
";

pub const NO_PRIMITIVES: &str = "\
kind: helper
class: NotAPrimitive
---
description: a document without a kind
";

/// File names of the sample bundle, in sorted order
pub const BUNDLE_FILES: [&str; 3] = ["custom_max.yaml", "custom_mean.yaml", "custom_sum.yaml"];

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(crate::temp::temp_dir_base()).expect("Failed to create temp directory")
}

/// Write a file, creating parent directories.
pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

/// Write the three sample primitives into `dir/primitives_to_install` and return that dir.
pub fn write_bundle(dir: &Path) -> PathBuf {
    let bundle = dir.join("primitives_to_install");
    for (name, content) in BUNDLE_FILES
        .iter()
        .zip([CUSTOM_MAX, CUSTOM_MEAN, CUSTOM_SUM])
    {
        write_file(&bundle.join(name), content);
    }
    bundle
}

/// Pack every file of `bundle` into a `.tar.gz` under a top-level directory named after it.
pub fn build_tar_gz(bundle: &Path, archive: &Path) -> PathBuf {
    let prefix = bundle
        .file_name()
        .expect("bundle directory has a name")
        .to_os_string();
    let file = File::create(archive).expect("Failed to create archive");
    let mut builder = tar::Builder::new(GzEncoder::new(file, Compression::default()));
    for entry in std::fs::read_dir(bundle).expect("Failed to read bundle") {
        let path = entry.expect("Failed to read entry").path();
        let name = Path::new(&prefix).join(path.file_name().expect("file name"));
        builder
            .append_path_with_name(&path, name)
            .expect("Failed to append to archive");
    }
    builder
        .into_inner()
        .expect("Failed to finish tar")
        .finish()
        .expect("Failed to finish gzip");
    archive.to_path_buf()
}

/// Pack every file of `bundle` flat into a `.zip`.
pub fn build_zip(bundle: &Path, archive: &Path) -> PathBuf {
    use std::io::Write;

    let file = File::create(archive).expect("Failed to create archive");
    let mut writer = zip::ZipWriter::new(file);
    for entry in std::fs::read_dir(bundle).expect("Failed to read bundle") {
        let path = entry.expect("Failed to read entry").path();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .expect("utf-8 file name")
            .to_string();
        writer
            .start_file(name, zip::write::SimpleFileOptions::default())
            .expect("Failed to start zip entry");
        writer
            .write_all(&std::fs::read(&path).expect("Failed to read file"))
            .expect("Failed to write zip entry");
    }
    writer.finish().expect("Failed to finish zip");
    archive.to_path_buf()
}

/// Sets environment variables and restores the previous values on drop.
///
/// Tests using it must be `#[serial]`.
pub struct EnvGuard {
    vars: Vec<(&'static str, Option<OsString>)>,
}

impl EnvGuard {
    pub fn set(pairs: &[(&'static str, Option<&Path>)]) -> Self {
        let vars = pairs
            .iter()
            .map(|(key, _)| (*key, std::env::var_os(key)))
            .collect();
        for (key, value) in pairs {
            // SAFETY: env-mutating tests are serialized with #[serial]
            unsafe {
                match value {
                    Some(v) => std::env::set_var(key, v),
                    None => std::env::remove_var(key),
                }
            }
        }
        Self { vars }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.vars {
            // SAFETY: env-mutating tests are serialized with #[serial]
            unsafe {
                match value {
                    Some(v) => std::env::set_var(key, v),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}
