//! Primitive source handling
//!
//! This module parses the source argument of an install into one of:
//! - Local directory paths: `./primitives`, `/abs/primitives`, `file:///abs/primitives`
//! - Local archives: `./primitives.tar.gz`, `./primitives.tgz`, `./primitives.zip`
//! - Remote archives: `s3://bucket/key.tar.gz`, `https://host/path/primitives.tar.gz`
//!
//! ## Module Organization
//!
//! - `remote.rs`: remote archive URLs and the S3 to HTTPS mapping

pub mod remote;

use std::fmt;
use std::path::{Path, PathBuf};

pub use remote::RemoteArchive;

use crate::error::{Result, invalid_source, source_not_found, unsupported_archive};
use crate::fetch::ArchiveFormat;

/// Where primitive files come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimitiveSource {
    /// Directory containing primitive files
    Dir { path: PathBuf },
    /// Local archive of primitive files
    Archive { path: PathBuf, format: ArchiveFormat },
    /// Archive downloaded over S3 or HTTPS
    Remote(RemoteArchive),
}

impl PrimitiveSource {
    /// Parse a source string.
    ///
    /// Local paths must exist: directories are used as-is, files must carry a known
    /// archive extension. URLs must use the `s3://` or `https://` scheme.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        if input.is_empty() {
            return Err(invalid_source(input, "source is empty"));
        }

        if let Some(path) = input.strip_prefix("file://") {
            return Self::parse_local(Path::new(path));
        }

        if let Some((scheme, _)) = input.split_once("://") {
            if remote::is_supported_scheme(scheme) {
                return RemoteArchive::parse(input).map(Self::Remote);
            }
            return Err(invalid_source(
                input,
                format!("unsupported URL scheme '{scheme}'"),
            ));
        }

        Self::parse_local(Path::new(input))
    }

    fn parse_local(path: &Path) -> Result<Self> {
        if path.is_dir() {
            return Ok(Self::Dir {
                path: path.to_path_buf(),
            });
        }

        if path.is_file() {
            let format = ArchiveFormat::detect(&path.to_string_lossy())
                .ok_or_else(|| unsupported_archive(path.display().to_string()))?;
            return Ok(Self::Archive {
                path: path.to_path_buf(),
                format,
            });
        }

        Err(source_not_found(path.display().to_string()))
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

impl fmt::Display for PrimitiveSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dir { path } | Self::Archive { path, .. } => write!(f, "{}", path.display()),
            Self::Remote(remote) => f.write_str(&remote.original),
        }
    }
}
