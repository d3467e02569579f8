//! CLI argument definitions
//!
//! All Clap derive structs for `pageweave` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::component::{ComponentKind, DisplayClass};
use crate::layout::PageArchetype;
use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Page layout assembly and component inspection.
#[derive(Parser, Debug)]
#[command(name = "pageweave", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "PAGEWEAVE_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true)]
    pub log_format: LogFormat,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect the component catalog.
    Components(ComponentsCommand),

    /// Inspect page layout records.
    Layout(LayoutCommand),

    /// Render components or full page regions.
    Render(RenderCommand),
}

// ============================================================================
// Components Command
// ============================================================================

/// Component catalog commands.
#[derive(Args, Debug)]
pub struct ComponentsCommand {
    /// Components subcommand.
    #[command(subcommand)]
    pub subcommand: ComponentsSubcommand,
}

/// Components subcommands.
#[derive(Subcommand, Debug)]
pub enum ComponentsSubcommand {
    /// List available components.
    List(ComponentsListArgs),

    /// Display details for a single component.
    Show(ComponentsShowArgs),
}

/// Arguments for `components list`.
#[derive(Args, Debug)]
pub struct ComponentsListArgs {
    /// Filter by component kind.
    #[arg(long)]
    pub kind: Option<ComponentKind>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `components show`.
#[derive(Args, Debug)]
pub struct ComponentsShowArgs {
    /// Component name (e.g. "AsciinemaCast").
    pub name: String,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// Layout Command
// ============================================================================

/// Layout record commands.
#[derive(Args, Debug)]
pub struct LayoutCommand {
    /// Layout subcommand.
    #[command(subcommand)]
    pub subcommand: LayoutSubcommand,
}

/// Layout subcommands.
#[derive(Subcommand, Debug)]
pub enum LayoutSubcommand {
    /// Display the component ordering of a page layout.
    Show(LayoutShowArgs),
}

/// Arguments for `layout show`.
#[derive(Args, Debug)]
pub struct LayoutShowArgs {
    /// Page archetype whose layout to display.
    #[arg(default_value = "content")]
    pub archetype: PageArchetype,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// Render Command
// ============================================================================

/// Render commands.
#[derive(Args, Debug)]
pub struct RenderCommand {
    /// Render subcommand.
    #[command(subcommand)]
    pub subcommand: RenderSubcommand,
}

/// Render subcommands.
#[derive(Subcommand, Debug)]
pub enum RenderSubcommand {
    /// Render the asciinema cast embed component.
    Cast(RenderCastArgs),

    /// Render the regions of a full page.
    Page(RenderPageArgs),
}

/// Arguments for `render cast`.
#[derive(Args, Debug)]
#[command(group = clap::ArgGroup::new("source").required(true).multiple(false))]
pub struct RenderCastArgs {
    /// Path to a YAML options record.
    #[arg(short, long, group = "source", env = "PAGEWEAVE_CAST_OPTIONS")]
    pub options: Option<PathBuf>,

    /// Recording path (inline alternative to --options).
    #[arg(long, group = "source")]
    pub cast_path: Option<String>,

    /// Container element id override.
    #[arg(long, requires = "cast_path")]
    pub cast_id: Option<String>,

    /// Scope the container to one viewport class.
    #[arg(long)]
    pub display_class: Option<DisplayClass>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `render page`.
#[derive(Args, Debug)]
pub struct RenderPageArgs {
    /// Page archetype to render.
    #[arg(default_value = "content")]
    pub archetype: PageArchetype,

    /// Site title used by chrome components.
    #[arg(long, default_value = "Untitled Site")]
    pub site_title: String,

    /// Title of the page being rendered.
    #[arg(long, default_value = "")]
    pub page_title: String,

    /// Slug of the page being rendered.
    #[arg(long, default_value = "index")]
    pub slug: String,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

// ============================================================================
// Tests
// ============================================================================
