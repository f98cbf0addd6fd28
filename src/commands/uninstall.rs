//! Uninstall command implementation

use console::Style;
use inquire::Confirm;

use crate::cli::UninstallArgs;
use crate::config::InstallerConfig;
use crate::error::{Result, primitive_not_installed};
use crate::installer::{InstalledPrimitive, Installer};
use crate::primitive::normalize_name;

/// Run uninstall command
pub fn run(config: &InstallerConfig, args: UninstallArgs) -> Result<()> {
    let mut installer = Installer::from_config(config)?;
    let installed = installer.installed()?;

    let mut targets: Vec<&InstalledPrimitive> = Vec::new();
    for name in &args.names {
        let wanted = normalize_name(name);
        let found = installed
            .iter()
            .find(|primitive| primitive.name == wanted)
            .ok_or_else(|| primitive_not_installed(name))?;
        if !targets.iter().any(|t| t.name == found.name) {
            targets.push(found);
        }
    }

    if !args.yes && !confirm_uninstall(&targets)? {
        println!("Uninstall cancelled.");
        return Ok(());
    }

    for target in targets {
        let file_names = installer.uninstall(&target.name)?;
        println!(
            "Removed {} {}",
            Style::new().bold().apply_to(&target.name),
            Style::new()
                .dim()
                .apply_to(format!("({})", file_names.join(", ")))
        );
    }

    Ok(())
}

/// Confirm uninstallation with user, showing what would be removed
fn confirm_uninstall(targets: &[&InstalledPrimitive]) -> Result<bool> {
    println!("\nThe following primitive(s) will be uninstalled:");
    for target in targets {
        println!("  - {} ({})", target.name, target.file_name);
    }
    println!();

    Ok(Confirm::new("Proceed with uninstall?")
        .with_default(true)
        .with_help_message("Press Enter to confirm, or 'n' to cancel")
        .prompt()?)
}
