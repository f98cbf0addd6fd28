//! Materializing primitive sources as local directories
//!
//! This module handles:
//! - Downloading remote archives (behind the [`Fetcher`] trait)
//! - Extracting local or downloaded archives into a staging directory
//! - Handing back the local directory that holds the primitive files

pub mod archive;

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub use archive::ArchiveFormat;

use crate::error::{Result, fetch_failed, file_write_failed};
use crate::progress::TransferProgress;
use crate::source::PrimitiveSource;

/// Downloads a URL to a local file
pub trait Fetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<()>;
}

/// Blocking HTTPS fetcher
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent(concat!("featurekit/", env!("CARGO_PKG_VERSION")))
            .build();
        Self { agent }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<()> {
        tracing::debug!(url, dest = %dest.display(), "downloading");

        let response = self.agent.get(url).call().map_err(|e| match e {
            ureq::Error::Status(code, _) => fetch_failed(url, format!("HTTP {code}")),
            ureq::Error::Transport(transport) => fetch_failed(url, transport.to_string()),
        })?;

        let total = response
            .header("Content-Length")
            .and_then(|len| len.parse::<u64>().ok());
        let progress = TransferProgress::new(total, url);

        let file = File::create(dest).map_err(|e| file_write_failed(dest, &e))?;
        let mut writer = BufWriter::new(file);
        let mut reader = progress.wrap_read(response.into_reader());

        match std::io::copy(&mut reader, &mut writer) {
            Ok(bytes) => {
                progress.finish();
                tracing::debug!(url, bytes, "download complete");
                Ok(())
            }
            Err(e) => {
                progress.abandon();
                Err(fetch_failed(url, e.to_string()))
            }
        }
    }
}

/// A source resolved to a local directory
///
/// Keeps the staging directory alive for as long as the files are needed.
#[derive(Debug)]
pub struct Materialized {
    pub dir: PathBuf,
    _staging: Option<TempDir>,
}

/// Resolve `source` to a local directory of primitive files
pub fn materialize(source: &PrimitiveSource, fetcher: &dyn Fetcher) -> Result<Materialized> {
    match source {
        PrimitiveSource::Dir { path } => Ok(Materialized {
            dir: path.clone(),
            _staging: None,
        }),
        PrimitiveSource::Archive { path, format } => {
            let staging = crate::temp::staging_dir()?;
            let extracted = staging.path().join("extracted");
            std::fs::create_dir_all(&extracted).map_err(|e| file_write_failed(&extracted, &e))?;
            archive::extract(path, *format, &extracted)?;
            Ok(Materialized {
                dir: archive::bundle_root(&extracted)?,
                _staging: Some(staging),
            })
        }
        PrimitiveSource::Remote(remote) => {
            let staging = crate::temp::staging_dir()?;
            let downloaded = staging.path().join(&remote.file_name);
            fetcher.fetch(&remote.url, &downloaded)?;

            let extracted = staging.path().join("extracted");
            std::fs::create_dir_all(&extracted).map_err(|e| file_write_failed(&extracted, &e))?;
            archive::extract(&downloaded, remote.format, &extracted)?;
            Ok(Materialized {
                dir: archive::bundle_root(&extracted)?,
                _staging: Some(staging),
            })
        }
    }
}
