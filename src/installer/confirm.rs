//! Confirmation dialog for install
//!
//! Shows what would be copied and where before anything is written.

use console::style;
use inquire::Confirm;

use super::ValidatedPrimitive;
use crate::error::Result;

/// Signature of the confirmation step, swappable for non-interactive callers
pub type ConfirmFn = fn(&[ValidatedPrimitive], &str) -> Result<bool>;

/// Ask the user whether to install `primitives` into `destination`
pub fn confirm_install(primitives: &[ValidatedPrimitive], destination: &str) -> Result<bool> {
    println!("\nThe following primitive(s) will be installed:");
    for primitive in primitives {
        println!(
            "  - {} {}",
            style(&primitive.name).cyan().bold(),
            style(format!("({}, {})", primitive.definition.kind, primitive.file_name)).dim()
        );
    }
    println!("\nDestination: {destination}");
    println!();

    Ok(Confirm::new("Install these primitives?")
        .with_default(true)
        .with_help_message("Press Enter to confirm, or 'n' to cancel")
        .prompt()?)
}
