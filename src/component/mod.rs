//! Page component contract and shared rendering helpers.
//!
//! Components are **factories' products**: they capture configuration at
//! construction time and produce markup at render time.
//!
//! ```text
//! Assembly:  options record  →  Arc<dyn Component>    (no markup yet)
//! Render:    component.render(ctx)  →  String         (markup now)
//! ```
//!
//! Each component emits one container element; interactive components
//! additionally expose a post-render script via [`Component::after_dom`],
//! executed by the consuming pipeline once the element is attached.

use std::fmt;

pub mod asciinema;
pub mod chrome;
pub mod explorer;
pub mod graph;
pub mod registry;
pub mod wrappers;

pub use asciinema::{AsciinemaCast, CAST_MARKER_CLASS, CastOptions, DEFAULT_CAST_ID};
pub use chrome::{
    ArticleTitle, Backlinks, Breadcrumbs, ContentMeta, Darkmode, Footer, FooterLink,
    FooterOptions, Head, PageTitle, Search, Spacer, TableOfContents, TagList,
};
pub use explorer::{Explorer, ExplorerOptions, FolderClickBehavior};
pub use graph::{D3Config, Graph, GraphOptions};
pub use registry::{
    ComponentInfo, ComponentKind, find_component, list_component_names, list_components,
    suggest_component,
};
pub use wrappers::{DesktopOnly, MobileOnly};

// ============================================================================
// Core Trait
// ============================================================================

/// A renderable page component.
///
/// Instances are immutable after construction and carry no shared mutable
/// state, so they can be referenced from several layout records at once.
pub trait Component: Send + Sync + fmt::Debug {
    /// Component name for the registry, logging, and layout display.
    fn name(&self) -> &'static str;

    /// Renders the component's markup for one page.
    fn render(&self, ctx: &PageContext) -> String;

    /// Script to execute once after the rendered element is attached.
    ///
    /// Fire-and-forget: failures inside the script propagate to whatever
    /// executes post-render hooks, not to this component.
    fn after_dom(&self) -> Option<String> {
        None
    }

    /// Display label for layout listings.
    ///
    /// Wrappers override this to include the wrapped component.
    fn label(&self) -> String {
        self.name().to_string()
    }
}

// ============================================================================
// Render Context
// ============================================================================

/// Viewport scoping for a component's container element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DisplayClass {
    /// Visible only on narrow viewports.
    MobileOnly,
    /// Visible only on wide viewports.
    DesktopOnly,
}

impl DisplayClass {
    /// Returns the literal class attribute value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MobileOnly => "mobile-only",
            Self::DesktopOnly => "desktop-only",
        }
    }
}

impl fmt::Display for DisplayClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Page-wide render context passed to every component.
#[derive(Debug, Clone)]
pub struct PageContext {
    /// Site-level title, used by chrome components.
    pub site_title: String,

    /// Title of the page being rendered.
    pub page_title: String,

    /// Slug of the page being rendered (e.g. `notes/rust/ownership`).
    pub slug: String,

    /// Display class applied to rendered containers, if any.
    pub display_class: Option<DisplayClass>,
}

impl Default for PageContext {
    fn default() -> Self {
        Self {
            site_title: "Untitled Site".to_string(),
            page_title: String::new(),
            slug: "index".to_string(),
            display_class: None,
        }
    }
}

impl PageContext {
    /// Returns a copy of this context with the display class replaced.
    ///
    /// Used by wrapper components to scope their inner component's
    /// container to one viewport class.
    #[must_use]
    pub fn with_display_class(&self, display: DisplayClass) -> Self {
        Self {
            display_class: Some(display),
            ..self.clone()
        }
    }
}

// ============================================================================
// Markup Helpers
// ============================================================================

/// Combines an optional display class with fixed marker classes into a
/// single class attribute value, skipping empty entries.
#[must_use]
pub fn class_names(display: Option<DisplayClass>, classes: &[&str]) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(classes.len() + 1);
    if let Some(display) = display {
        parts.push(display.as_str());
    }
    parts.extend(classes.iter().copied().filter(|c| !c.is_empty()));
    parts.join(" ")
}

/// Escapes text for use in HTML content or a double-quoted attribute.
#[must_use]
pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_names_without_display_class() {
        assert_eq!(class_names(None, &["asciinema-cast"]), "asciinema-cast");
    }

    #[test]
    fn class_names_with_display_class() {
        assert_eq!(
            class_names(Some(DisplayClass::MobileOnly), &["spacer"]),
            "mobile-only spacer"
        );
    }

    #[test]
    fn class_names_skips_empty_entries() {
        assert_eq!(
            class_names(Some(DisplayClass::DesktopOnly), &["", "explorer"]),
            "desktop-only explorer"
        );
    }

    #[test]
    fn display_class_literals() {
        assert_eq!(DisplayClass::MobileOnly.to_string(), "mobile-only");
        assert_eq!(DisplayClass::DesktopOnly.to_string(), "desktop-only");
    }

    #[test]
    fn with_display_class_overrides() {
        let ctx = PageContext::default();
        assert!(ctx.display_class.is_none());

        let scoped = ctx.with_display_class(DisplayClass::DesktopOnly);
        assert_eq!(scoped.display_class, Some(DisplayClass::DesktopOnly));
        assert_eq!(scoped.site_title, ctx.site_title);
    }

    #[test]
    fn escape_html_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">&</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;"
        );
    }
}
