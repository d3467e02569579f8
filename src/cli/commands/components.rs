//! Components command handlers
//!
//! Implements `components list` and `components show`.

use std::fmt::Write as _;

use crate::cli::args::{ComponentsListArgs, ComponentsShowArgs, OutputFormat};
use crate::component::registry::{self, ComponentKind};
use crate::error::PageweaveError;

/// List available components.
///
/// Displays components grouped by kind (human) or as a JSON array.
///
/// # Errors
///
/// Returns a JSON error if output serialization fails.
pub fn list(args: &ComponentsListArgs) -> Result<(), PageweaveError> {
    let results = registry::list_components(args.kind);

    match args.format {
        OutputFormat::Json => {
            let json_entries: Vec<serde_json::Value> = results
                .iter()
                .map(|c| {
                    serde_json::json!({
                        "name": c.name,
                        "description": c.description,
                        "kind": c.kind.to_string(),
                        "configurable": c.configurable,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&json_entries)?);
        }
        OutputFormat::Human => {
            if results.is_empty() {
                println!("No components match the given filters.");
                return Ok(());
            }

            let total = results.len();
            println!("Components ({total} available)\n");

            // Group by kind in display order
            for kind in ComponentKind::all() {
                let in_kind: Vec<_> = results.iter().filter(|c| c.kind == *kind).collect();
                if in_kind.is_empty() {
                    continue;
                }

                println!("  {}", kind.label());
                for c in in_kind {
                    let opts = if c.configurable { "[options]" } else { "" };
                    println!("    {:<18}{:<64}{opts}", c.name, c.description);
                }
                println!();
            }

            println!("Details: pageweave components show <name>");
        }
    }

    Ok(())
}

/// Display details for a single component.
///
/// # Errors
///
/// Returns a usage error if the component name is not found.
pub fn show(args: &ComponentsShowArgs) -> Result<(), PageweaveError> {
    let info = registry::find_component(&args.name).ok_or_else(|| {
        let mut message = format!("Unknown component '{}'", args.name);

        if let Some(suggestion) = registry::suggest_component(&args.name) {
            let _ = write!(message, "\n\nDid you mean '{suggestion}'?");
        }

        message.push_str("\n\nAvailable components:");
        for name in registry::list_component_names() {
            let _ = write!(message, "\n  {name}");
        }

        message.push_str("\n\nUse 'pageweave components list' for full details.");
        PageweaveError::Usage(message)
    })?;

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "name": info.name,
                "description": info.description,
                "kind": info.kind.to_string(),
                "configurable": info.configurable,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => {
            println!("{}", info.name);
            println!("  kind:         {}", info.kind);
            println!("  configurable: {}", info.configurable);
            println!("  {}", info.description);
        }
    }

    Ok(())
}
