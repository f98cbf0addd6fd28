//! Info command implementation
//!
//! Prints where the library lives, where primitives are installed, and how many
//! primitives are available.

use console::Style;

use crate::config::InstallerConfig;
use crate::error::Result;
use crate::installer::DirStore;
use crate::registry::PrimitiveRegistry;

/// Run info command
pub fn run(config: &InstallerConfig) -> Result<()> {
    let store = DirStore::open(&config.installation_dir)?;
    let registry = PrimitiveRegistry::load(&store)?;

    let installed = registry.iter().filter(|p| p.is_installed()).count();
    let builtin = registry.len() - installed;
    let label = Style::new().bold();

    println!("featurekit {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!(
        "  {} {}",
        label.apply_to("Library root:          "),
        config.library_root.display()
    );
    println!(
        "  {} {}",
        label.apply_to("Installation directory:"),
        config.installation_dir.display()
    );
    println!("  {} {builtin}", label.apply_to("Built-in primitives:   "));
    println!("  {} {installed}", label.apply_to("Installed primitives:  "));

    if !registry.skipped().is_empty() {
        println!(
            "  {} {}",
            label.apply_to("Invalid files:         "),
            Style::new().yellow().apply_to(registry.skipped().len())
        );
    }

    Ok(())
}
