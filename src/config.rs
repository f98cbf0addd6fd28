//! Installation directory and library root resolution
//!
//! The installation directory is an explicit value carried by [`InstallerConfig`].
//! The environment-derived default uses the platform's data directory (XDG on Linux,
//! Application Support on macOS) with a `featurekit` subdirectory, and can be
//! overridden with `FEATUREKIT_HOME` (library root) and `FEATUREKIT_INSTALL_DIR`
//! (installation directory).

use std::path::{Path, PathBuf};

use crate::error::{FeatureKitError, Result};

/// Environment variable overriding the library root
pub const HOME_ENV: &str = "FEATUREKIT_HOME";

/// Environment variable overriding the primitive installation directory
pub const INSTALL_DIR_ENV: &str = "FEATUREKIT_INSTALL_DIR";

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "FEATUREKIT_LOG";

/// Default library directory name under the user's data directory
const LIBRARY_DIR: &str = "featurekit";

/// Installation subdirectory within the library root
pub const PRIMITIVES_DIR: &str = "primitives";

/// Where the library lives and where installed primitives go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerConfig {
    /// Root of the library's own data
    pub library_root: PathBuf,
    /// Directory the registry loads user-installed primitives from
    pub installation_dir: PathBuf,
}

impl InstallerConfig {
    /// Config rooted at `library_root` with the default installation subdirectory
    pub fn with_root(library_root: impl Into<PathBuf>) -> Self {
        let library_root = library_root.into();
        let installation_dir = library_root.join(PRIMITIVES_DIR);
        Self {
            library_root,
            installation_dir,
        }
    }

    /// Replace the installation directory
    #[must_use]
    pub fn with_installation_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.installation_dir = dir.into();
        self
    }

    /// Resolve the config from the environment
    pub fn from_env() -> Result<Self> {
        let config = Self::with_root(default_library_root()?);

        match std::env::var_os(INSTALL_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Ok(config.with_installation_dir(dir)),
            _ => Ok(config),
        }
    }

    /// Create the installation directory if needed and return it
    pub fn ensure_installation_dir(&self) -> Result<&Path> {
        std::fs::create_dir_all(&self.installation_dir)
            .map_err(|e| crate::error::file_write_failed(&self.installation_dir, &e))?;
        Ok(&self.installation_dir)
    }
}

fn default_library_root() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        if !home.is_empty() {
            return Ok(PathBuf::from(home));
        }
    }

    let base = dirs::data_dir().ok_or_else(|| FeatureKitError::ConfigInvalid {
        message: "Could not determine data directory".to_string(),
    })?;

    Ok(base.join(LIBRARY_DIR))
}

/// Get the primitive installation directory, creating it if needed
pub fn installation_dir() -> Result<PathBuf> {
    let config = InstallerConfig::from_env()?;
    config.ensure_installation_dir()?;
    Ok(config.installation_dir)
}

/// Get the root path of the library's data
pub fn library_root() -> Result<PathBuf> {
    Ok(InstallerConfig::from_env()?.library_root)
}
