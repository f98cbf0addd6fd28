//! Command helper utilities

use std::path::PathBuf;

use crate::config::InstallerConfig;
use crate::error::Result;

/// Resolve the installer config from the environment and the `--install-dir` flag
///
/// The flag wins over `FEATUREKIT_INSTALL_DIR`, which wins over the default
/// `<library root>/primitives`.
pub fn resolve_config(install_dir: Option<PathBuf>) -> Result<InstallerConfig> {
    let config = InstallerConfig::from_env()?;
    Ok(match install_dir {
        Some(dir) => config.with_installation_dir(dir),
        None => config,
    })
}
