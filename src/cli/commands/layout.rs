//! Layout command handlers
//!
//! Implements `layout show`.

use crate::cli::args::{LayoutShowArgs, OutputFormat};
use crate::component::Component;
use crate::error::PageweaveError;
use crate::layout::Region;

/// Display the component ordering of a page layout.
///
/// # Errors
///
/// Returns a JSON error if output serialization fails.
pub fn show(args: &LayoutShowArgs) -> Result<(), PageweaveError> {
    let layout = args.archetype.layout();

    match args.format {
        OutputFormat::Json => {
            let mut regions = serde_json::Map::new();
            for region in Region::all() {
                let labels: Vec<String> = layout
                    .region(*region)
                    .iter()
                    .map(|c| c.label())
                    .collect();
                regions.insert(region.as_str().to_string(), serde_json::json!(labels));
            }
            let json = serde_json::json!({
                "archetype": args.archetype.to_string(),
                "regions": regions,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => {
            println!("{} page layout\n", args.archetype);
            for region in Region::all() {
                println!("  {}", region.as_str());
                for component in layout.region(*region) {
                    println!("    {}", component.label());
                }
                println!();
            }
        }
    }

    Ok(())
}
