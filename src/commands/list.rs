//! List-primitives command implementation
//!
//! Lists built-in and installed primitives by normalized name, as a table or JSON.

use console::Style;

use crate::cli::{ListArgs, OutputFormat};
use crate::config::InstallerConfig;
use crate::error::Result;
use crate::installer::DirStore;
use crate::registry::{PrimitiveOrigin, PrimitiveRegistry, RegisteredPrimitive};

/// Run list-primitives command
pub fn run(config: &InstallerConfig, args: ListArgs) -> Result<()> {
    let store = DirStore::open(&config.installation_dir)?;
    let registry = PrimitiveRegistry::load(&store)?;

    for skipped in registry.skipped() {
        eprintln!(
            "{} skipping {}: {}",
            Style::new().yellow().bold().apply_to("warning:"),
            skipped.file_name,
            skipped.reason
        );
    }

    let primitives: Vec<&RegisteredPrimitive> = registry
        .iter()
        .filter(|p| !args.installed || p.is_installed())
        .collect();

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&primitives)?),
        OutputFormat::Table => print_table(&primitives),
    }

    Ok(())
}

fn print_table(primitives: &[&RegisteredPrimitive]) {
    if primitives.is_empty() {
        println!("No primitives installed.");
        return;
    }

    let width = primitives.iter().map(|p| p.name.len()).max().unwrap_or(0);

    for primitive in primitives {
        let definition = &primitive.definition;
        let inputs: Vec<&str> = definition.input_types.iter().map(|t| t.as_str()).collect();
        let signature = format!("{} -> {}", inputs.join(", "), definition.return_type);

        let origin = match &primitive.origin {
            PrimitiveOrigin::Builtin => String::new(),
            PrimitiveOrigin::Installed(file) => format!("  [installed: {file}]"),
        };

        println!(
            "  {:<width$}  {:<11}  {}{}",
            Style::new().bold().apply_to(&primitive.name),
            definition.kind.as_str(),
            Style::new().dim().apply_to(signature),
            Style::new().cyan().apply_to(origin),
        );
    }
}
