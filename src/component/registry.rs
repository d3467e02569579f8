//! Component registry: metadata, lookup, and typo suggestions.
//!
//! A static catalog of every component the crate ships, used by the CLI
//! for listing and by error paths for did-you-mean suggestions.

use std::fmt;

// ============================================================================
// Types
// ============================================================================

/// Metadata for one shipped component.
#[derive(Debug, Clone, Copy)]
pub struct ComponentInfo {
    /// Component name as used in layout declarations.
    pub name: &'static str,

    /// Short human-readable description.
    pub description: &'static str,

    /// Placement category.
    pub kind: ComponentKind,

    /// Whether the factory takes an options record.
    pub configurable: bool,
}

/// Placement category for organizing components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ComponentKind {
    /// Shared page chrome (head, footer, sidebars).
    Chrome,
    /// Content-adjacent components rendered before the page body.
    Body,
    /// Third-party embeds with post-render hooks.
    Embed,
    /// Viewport-scoping wrappers around another component.
    Wrapper,
}

impl ComponentKind {
    /// Returns the human-readable title-case label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Chrome => "Chrome",
            Self::Body => "Body",
            Self::Embed => "Embed",
            Self::Wrapper => "Wrapper",
        }
    }

    /// Returns all kind variants in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Chrome, Self::Body, Self::Embed, Self::Wrapper]
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chrome => write!(f, "chrome"),
            Self::Body => write!(f, "body"),
            Self::Embed => write!(f, "embed"),
            Self::Wrapper => write!(f, "wrapper"),
        }
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Catalog of all shipped components.
static COMPONENTS: &[ComponentInfo] = &[
    // ── Chrome ──────────────────────────────────────────────
    ComponentInfo {
        name: "Head",
        description: "Document head with charset, viewport, and page title",
        kind: ComponentKind::Chrome,
        configurable: false,
    },
    ComponentInfo {
        name: "Footer",
        description: "Page footer with an ordered list of external links",
        kind: ComponentKind::Chrome,
        configurable: true,
    },
    ComponentInfo {
        name: "PageTitle",
        description: "Site title linking back to the index page",
        kind: ComponentKind::Chrome,
        configurable: false,
    },
    ComponentInfo {
        name: "Spacer",
        description: "Empty flexible spacer",
        kind: ComponentKind::Chrome,
        configurable: false,
    },
    ComponentInfo {
        name: "Search",
        description: "Search input container wired up by the pipeline",
        kind: ComponentKind::Chrome,
        configurable: false,
    },
    ComponentInfo {
        name: "Darkmode",
        description: "Dark mode toggle button",
        kind: ComponentKind::Chrome,
        configurable: false,
    },
    ComponentInfo {
        name: "Explorer",
        description: "Site tree navigation with configurable folder behavior",
        kind: ComponentKind::Chrome,
        configurable: true,
    },
    ComponentInfo {
        name: "Graph",
        description: "Local and global link-graph containers with embedded config",
        kind: ComponentKind::Chrome,
        configurable: true,
    },
    ComponentInfo {
        name: "TableOfContents",
        description: "Heading outline container for the current page",
        kind: ComponentKind::Chrome,
        configurable: false,
    },
    ComponentInfo {
        name: "Backlinks",
        description: "Container for pages linking to the current one",
        kind: ComponentKind::Chrome,
        configurable: false,
    },
    // ── Body ────────────────────────────────────────────────
    ComponentInfo {
        name: "Breadcrumbs",
        description: "Ancestor trail derived from the page slug",
        kind: ComponentKind::Body,
        configurable: false,
    },
    ComponentInfo {
        name: "ArticleTitle",
        description: "Page title heading",
        kind: ComponentKind::Body,
        configurable: false,
    },
    ComponentInfo {
        name: "ContentMeta",
        description: "Container for page metadata such as dates and reading time",
        kind: ComponentKind::Body,
        configurable: false,
    },
    ComponentInfo {
        name: "TagList",
        description: "Container for the page's tag links",
        kind: ComponentKind::Body,
        configurable: false,
    },
    // ── Embed ───────────────────────────────────────────────
    ComponentInfo {
        name: "AsciinemaCast",
        description: "Terminal recording player attached via a post-render hook",
        kind: ComponentKind::Embed,
        configurable: true,
    },
    // ── Wrapper ─────────────────────────────────────────────
    ComponentInfo {
        name: "MobileOnly",
        description: "Scopes the wrapped component to narrow viewports",
        kind: ComponentKind::Wrapper,
        configurable: false,
    },
    ComponentInfo {
        name: "DesktopOnly",
        description: "Scopes the wrapped component to wide viewports",
        kind: ComponentKind::Wrapper,
        configurable: false,
    },
];

// ============================================================================
// Public API
// ============================================================================

/// Look up a component by exact name.
#[must_use]
pub fn find_component(name: &str) -> Option<&'static ComponentInfo> {
    COMPONENTS.iter().find(|c| c.name == name)
}

/// List all components, optionally filtered by kind.
#[must_use]
pub fn list_components(kind: Option<ComponentKind>) -> Vec<&'static ComponentInfo> {
    COMPONENTS
        .iter()
        .filter(|c| kind.is_none_or(|k| c.kind == k))
        .collect()
}

/// Suggest a similar component name for typo correction.
///
/// Returns the closest match if its Damerau-Levenshtein distance is ≤ 3.
#[must_use]
pub fn suggest_component(input: &str) -> Option<&'static str> {
    COMPONENTS
        .iter()
        .map(|c| (c.name, strsim::damerau_levenshtein(input, c.name)))
        .filter(|(_, dist)| *dist <= 3)
        .min_by_key(|(_, dist)| *dist)
        .map(|(name, _)| name)
}

/// Returns all component names in catalog order.
#[must_use]
pub fn list_component_names() -> Vec<&'static str> {
    COMPONENTS.iter().map(|c| c.name).collect()
}

// ============================================================================
// Tests
// ============================================================================
