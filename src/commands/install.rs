//! Install command implementation
//!
//! Installs a primitive bundle from a directory, a local archive, or an `s3://` or
//! `https://` URL. The bundle is validated as a whole before anything is copied.

use console::Style;

use crate::cli::InstallArgs;
use crate::config::InstallerConfig;
use crate::error::Result;
use crate::installer::{InstallAction, InstallOptions, InstallReport, Installer};

/// Run install command
pub fn run(config: &InstallerConfig, args: InstallArgs) -> Result<()> {
    let mut installer = Installer::from_config(config)?;
    let report = installer.install(&args.source, InstallOptions { prompt: !args.yes })?;
    print_report(&report);
    Ok(())
}

fn print_report(report: &InstallReport) {
    if report.cancelled {
        println!("Install cancelled.");
        return;
    }
    if report.is_empty() {
        println!("Nothing to install.");
        return;
    }

    println!(
        "Installed {} primitive(s) into {}",
        report.files.len(),
        report.destination
    );
    for file in &report.files {
        let (marker, style) = match file.action {
            InstallAction::Added => ("+", Style::new().green()),
            InstallAction::Updated => ("~", Style::new().yellow()),
            InstallAction::Unchanged => ("=", Style::new().dim()),
        };
        println!(
            "  {} {} {}",
            style.apply_to(marker),
            Style::new().bold().apply_to(&file.name),
            Style::new().dim().apply_to(format!("({})", file.file_name))
        );
        for stale in &file.replaced {
            println!("      replaces {}", Style::new().dim().apply_to(stale));
        }
    }

    let unchanged = report.count(InstallAction::Unchanged);
    if unchanged > 0 {
        println!("{unchanged} already up to date.");
    }
}
