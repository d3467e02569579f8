//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod components;
pub mod layout;
pub mod render;

use crate::cli::args::{Cli, Commands, ComponentsSubcommand, LayoutSubcommand, RenderSubcommand};
use crate::error::PageweaveError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), PageweaveError> {
    match cli.command {
        Commands::Components(cmd) => match cmd.subcommand {
            ComponentsSubcommand::List(args) => components::list(&args),
            ComponentsSubcommand::Show(args) => components::show(&args),
        },
        Commands::Layout(cmd) => match cmd.subcommand {
            LayoutSubcommand::Show(args) => layout::show(&args),
        },
        Commands::Render(cmd) => match cmd.subcommand {
            RenderSubcommand::Cast(args) => render::cast(&args),
            RenderSubcommand::Page(args) => render::page(&args),
        },
    }
}
