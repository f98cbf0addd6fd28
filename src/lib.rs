//! featurekit - primitive installer
//!
//! Installs bundles of user-defined feature primitives (aggregations and transforms)
//! from a local directory, a local archive, or an archive on S3 or HTTPS into the
//! library's installation directory, and exposes the resulting primitive registry.
//!
//! ```no_run
//! let report = featurekit::install_primitives("s3://bucket/primitives.tar.gz", false)?;
//! println!("installed {:?}", report.names());
//! # Ok::<(), featurekit::error::FeatureKitError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fetch;
pub mod hash;
pub mod installer;
pub mod primitive;
pub mod progress;
pub mod registry;
pub mod source;
pub mod temp;

#[cfg(test)]
mod test_fixtures;

pub use config::{InstallerConfig, installation_dir, library_root};
pub use error::{FeatureKitError, Result};
pub use installer::{
    InstallAction, InstallOptions, InstallReport, Installer, install_primitives,
    list_primitive_files,
};
pub use primitive::{PrimitiveDefinition, PrimitiveKind, load_primitive_from_file};
pub use registry::PrimitiveRegistry;
