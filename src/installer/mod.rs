//! Primitive installation
//!
//! This module handles:
//! - Discovering primitive files in a bundle directory
//! - Validating every file before anything is copied
//! - Copying validated files into the installation directory ([`PrimitiveStore`])
//! - Removing installed primitives

pub mod confirm;
pub mod discovery;
pub mod store;


use std::collections::{HashMap, HashSet};
use std::path::Path;

pub use confirm::{ConfirmFn, confirm_install};
pub use discovery::list_primitive_files;
pub use store::{DirStore, MemoryStore, PrimitiveStore};

use crate::config::InstallerConfig;
use crate::error::{Result, duplicate_primitive, file_read_failed, primitive_not_installed};
use crate::fetch::{Fetcher, HttpFetcher, materialize};
use crate::hash::hash_bytes;
use crate::primitive::descriptor::single_primitive;
use crate::primitive::{PrimitiveDefinition, normalize_name, parse_primitives};
use crate::progress::InstallProgress;
use crate::source::PrimitiveSource;

/// A primitive file that passed validation and is ready to copy
#[derive(Debug, Clone)]
pub struct ValidatedPrimitive {
    pub file_name: String,
    /// Normalized primitive name
    pub name: String,
    pub definition: PrimitiveDefinition,
    contents: String,
}

/// What happened to one file during install
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallAction {
    /// New file in the installation directory
    Added,
    /// Existing file replaced with different content
    Updated,
    /// Existing file already had identical content
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledFile {
    pub file_name: String,
    pub name: String,
    pub action: InstallAction,
    /// Previously installed files that defined the same primitive and were removed
    pub replaced: Vec<String>,
}

/// Outcome of an install
#[derive(Debug, Clone, Default)]
pub struct InstallReport {
    pub source: String,
    pub destination: String,
    pub files: Vec<InstalledFile>,
    /// The user declined the confirmation prompt
    pub cancelled: bool,
}

impl InstallReport {
    pub fn count(&self, action: InstallAction) -> usize {
        self.files.iter().filter(|f| f.action == action).count()
    }

    pub fn names(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct InstallOptions {
    /// Ask for confirmation before copying
    pub prompt: bool,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self { prompt: true }
    }
}

/// A primitive loaded from the installation directory
#[derive(Debug, Clone)]
pub struct InstalledPrimitive {
    pub file_name: String,
    pub name: String,
    pub definition: PrimitiveDefinition,
}

/// An installed file that failed to load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub file_name: String,
    pub reason: String,
}

/// Contents of a store split into loadable primitives and broken files
#[derive(Debug, Clone, Default)]
pub struct StoreScan {
    pub primitives: Vec<InstalledPrimitive>,
    pub skipped: Vec<SkippedFile>,
}

/// Load every primitive file in `store`, setting aside the ones that fail validation
pub fn scan_store<S: PrimitiveStore + ?Sized>(store: &S) -> Result<StoreScan> {
    let mut scan = StoreScan::default();
    let location = store.location();

    for file_name in store.file_names()? {
        let origin = format!("{location}/{file_name}");
        let loaded = store
            .read(&file_name)
            .and_then(|content| parse_primitives(&content, &origin))
            .and_then(|primitives| single_primitive(primitives, &origin));

        match loaded {
            Ok((name, definition)) => scan.primitives.push(InstalledPrimitive {
                file_name,
                name,
                definition,
            }),
            Err(e) => {
                tracing::warn!(file = %origin, error = %e, "skipping invalid primitive file");
                scan.skipped.push(SkippedFile {
                    file_name,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(scan)
}

/// Load and validate every primitive file in `dir`.
///
/// Fails on the first invalid file, or when two files define the same primitive name.
pub fn validate_bundle(dir: &Path) -> Result<Vec<ValidatedPrimitive>> {
    let mut validated = Vec::new();
    let mut seen: HashMap<String, String> = HashMap::new();

    for path in list_primitive_files(dir)? {
        let contents = std::fs::read_to_string(&path).map_err(|e| file_read_failed(&path, &e))?;
        let origin = path.display().to_string();
        let (name, definition) = single_primitive(parse_primitives(&contents, &origin)?, &origin)?;
        tracing::debug!(path = %origin, %name, "validated primitive");
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(String::from)
            .unwrap_or_default();

        if let Some(first) = seen.get(&name) {
            return Err(duplicate_primitive(&name, first, &file_name));
        }
        seen.insert(name.clone(), file_name.clone());

        validated.push(ValidatedPrimitive {
            file_name,
            name,
            definition,
            contents,
        });
    }

    Ok(validated)
}

/// Installs primitive bundles into a store
pub struct Installer<F = HttpFetcher, S = DirStore> {
    fetcher: F,
    store: S,
    confirm: ConfirmFn,
}

impl Installer {
    /// Installer for the configured installation directory, fetching over HTTPS
    pub fn from_config(config: &InstallerConfig) -> Result<Self> {
        Ok(Self::new(
            HttpFetcher::new(),
            DirStore::open(&config.installation_dir)?,
        ))
    }
}

impl<F: Fetcher, S: PrimitiveStore> Installer<F, S> {
    pub fn new(fetcher: F, store: S) -> Self {
        Self {
            fetcher,
            store,
            confirm: confirm_install,
        }
    }

    /// Replace the interactive confirmation
    #[must_use]
    pub fn with_confirm(mut self, confirm: ConfirmFn) -> Self {
        self.confirm = confirm;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Install every primitive of `source` into the store.
    ///
    /// The bundle is validated as a whole first; if any file is invalid, or the
    /// prompt is declined, the store is left untouched.
    pub fn install(&mut self, source: &str, options: InstallOptions) -> Result<InstallReport> {
        let parsed = PrimitiveSource::parse(source)?;
        tracing::debug!(source = %parsed, "resolved primitive source");

        let materialized = materialize(&parsed, &self.fetcher)?;
        let validated = validate_bundle(&materialized.dir)?;

        let mut report = InstallReport {
            source: source.to_string(),
            destination: self.store.location(),
            ..InstallReport::default()
        };

        if validated.is_empty() {
            tracing::info!(source, "no primitive files found");
            return Ok(report);
        }

        if options.prompt && !(self.confirm)(&validated, &report.destination)? {
            tracing::info!(source, "install cancelled");
            report.cancelled = true;
            return Ok(report);
        }

        let superseded = self.superseded_files(&validated)?;

        let progress = InstallProgress::new(validated.len() as u64);
        for primitive in validated {
            let replaced = superseded.get(&primitive.name).cloned().unwrap_or_default();
            let action = match self.copy(&primitive, &replaced) {
                Ok(action) => action,
                Err(e) => {
                    progress.abandon();
                    return Err(e);
                }
            };
            progress.update_file(&primitive.file_name);
            tracing::info!(
                name = %primitive.name,
                file = %primitive.file_name,
                ?action,
                ?replaced,
                "installed primitive"
            );

            report.files.push(InstalledFile {
                file_name: primitive.file_name,
                name: primitive.name,
                action,
                replaced,
            });
        }
        progress.finish();

        Ok(report)
    }

    /// Installed files that define an incoming primitive under another file name.
    ///
    /// Files the bundle itself overwrites are not listed.
    fn superseded_files(
        &self,
        validated: &[ValidatedPrimitive],
    ) -> Result<HashMap<String, Vec<String>>> {
        let incoming: HashSet<&str> = validated.iter().map(|p| p.file_name.as_str()).collect();
        let mut superseded: HashMap<String, Vec<String>> = HashMap::new();

        for installed in scan_store(&self.store)?.primitives {
            if incoming.contains(installed.file_name.as_str()) {
                continue;
            }
            if validated.iter().any(|p| p.name == installed.name) {
                superseded
                    .entry(installed.name)
                    .or_default()
                    .push(installed.file_name);
            }
        }

        Ok(superseded)
    }

    fn copy(
        &mut self,
        primitive: &ValidatedPrimitive,
        replaced: &[String],
    ) -> Result<InstallAction> {
        let incoming = hash_bytes(primitive.contents.as_bytes());

        let mut action = match self.store.content_hash(&primitive.file_name)? {
            None => InstallAction::Added,
            Some(existing) if existing == incoming => InstallAction::Unchanged,
            Some(_) => InstallAction::Updated,
        };

        if action != InstallAction::Unchanged {
            self.store.write(&primitive.file_name, &primitive.contents)?;
        }

        for stale in replaced {
            self.store.remove(stale)?;
            tracing::debug!(name = %primitive.name, file = %stale, "removed superseded primitive file");
            action = InstallAction::Updated;
        }

        Ok(action)
    }

    /// Primitives currently installed; invalid files are left out
    pub fn installed(&self) -> Result<Vec<InstalledPrimitive>> {
        Ok(scan_store(&self.store)?.primitives)
    }

    /// Remove every installed file defining `name`, returning their file names
    pub fn uninstall(&mut self, name: &str) -> Result<Vec<String>> {
        let wanted = normalize_name(name);
        let files: Vec<String> = self
            .installed()?
            .into_iter()
            .filter(|primitive| primitive.name == wanted)
            .map(|primitive| primitive.file_name)
            .collect();

        if files.is_empty() {
            return Err(primitive_not_installed(name));
        }

        for file_name in &files {
            self.store.remove(file_name)?;
            tracing::info!(name = %wanted, file = %file_name, "uninstalled primitive");
        }
        Ok(files)
    }
}

/// Install primitives from `source` into the configured installation directory.
///
/// `source` may be a directory, a `.tar.gz`/`.tgz`/`.zip` archive, or an `s3://` or
/// `https://` URL of such an archive. With `prompt`, the user confirms before any file
/// is copied.
pub fn install_primitives(source: &str, prompt: bool) -> Result<InstallReport> {
    let config = InstallerConfig::from_env()?;
    Installer::from_config(&config)?.install(source, InstallOptions { prompt })
}
