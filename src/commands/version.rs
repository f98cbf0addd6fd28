//! Version command implementation
//!
//! Prints the package version together with what this build accepts: descriptor
//! format, primitive kinds, source schemes and the environment it reads.

use std::fmt::Write as _;

use crate::config::{HOME_ENV, INSTALL_DIR_ENV, LOG_ENV};
use crate::error::Result;
use crate::primitive::builtin::builtin_primitives;
use crate::primitive::{PRIMITIVE_EXTENSION, PrimitiveKind};
use crate::source::remote::SUPPORTED_SCHEMES;

/// Run version command
pub fn run() -> Result<()> {
    print!("{}", render());
    Ok(())
}

fn render() -> String {
    let kinds = [PrimitiveKind::Aggregation, PrimitiveKind::Transform]
        .map(PrimitiveKind::as_str)
        .join(", ");
    let schemes: Vec<String> = SUPPORTED_SCHEMES.iter().map(|s| format!("{s}://")).collect();

    let mut out = String::new();
    let _ = writeln!(out, "featurekit {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(out);
    let _ = writeln!(out, "Primitives:");
    let _ = writeln!(out, "  Descriptor files: *.{PRIMITIVE_EXTENSION}");
    let _ = writeln!(out, "  Kinds: {kinds}");
    let _ = writeln!(out, "  Built-in: {}", builtin_primitives().len());
    let _ = writeln!(out, "  Sources: directory, .tar.gz, .tgz, .zip, {}", schemes.join(", "));
    let _ = writeln!(out);
    let _ = writeln!(out, "Environment:");
    for var in [HOME_ENV, INSTALL_DIR_ENV, LOG_ENV] {
        let value = std::env::var(var).unwrap_or_else(|_| "(unset)".to_string());
        let _ = writeln!(out, "  {var}={value}");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Build info:");
    let _ = writeln!(out, "  Profile: {}", build_profile());

    out
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
