//! Page layout assembly.
//!
//! Layout records group component instances into page archetypes. They are
//! built once, lazily, as process-wide constants and are read-only for the
//! rest of the process; consumers select the archetype-appropriate record
//! and render its regions in declared order. Ordering within a region is
//! significant: it determines visual stacking.

use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::component::{
    ArticleTitle, Backlinks, Breadcrumbs, Component, ContentMeta, D3Config, Darkmode,
    DesktopOnly, Explorer, ExplorerOptions, FolderClickBehavior, Footer, FooterLink,
    FooterOptions, Graph, GraphOptions, Head, MobileOnly, PageTitle, Search, Spacer,
    TableOfContents, TagList,
};

// ============================================================================
// Types
// ============================================================================

/// Components shared across all pages.
pub struct SharedLayout {
    /// Document head component.
    pub head: Arc<dyn Component>,

    /// Ordered components rendered at the top of every page.
    pub header: Vec<Arc<dyn Component>>,

    /// Footer component.
    pub footer: Arc<dyn Component>,
}

/// Ordered component sequences for one page archetype.
pub struct PageLayout {
    /// Components rendered above the page body.
    pub before_body: Vec<Arc<dyn Component>>,

    /// Left sidebar components.
    pub left: Vec<Arc<dyn Component>>,

    /// Right sidebar components.
    pub right: Vec<Arc<dyn Component>>,
}

impl PageLayout {
    /// Returns the components of one region in declared order.
    #[must_use]
    pub fn region(&self, region: Region) -> &[Arc<dyn Component>] {
        match region {
            Region::BeforeBody => &self.before_body,
            Region::Left => &self.left,
            Region::Right => &self.right,
        }
    }
}

/// Named region of a page layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Above the page body.
    BeforeBody,
    /// Left sidebar.
    Left,
    /// Right sidebar.
    Right,
}

impl Region {
    /// Returns the region key as declared in layout configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BeforeBody => "beforeBody",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Returns all regions in declared order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::BeforeBody, Self::Left, Self::Right]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Page archetype selecting which layout record applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PageArchetype {
    /// A page displaying a single piece of content.
    Content,
    /// A page displaying a list of pages (tags, folders).
    List,
}

impl PageArchetype {
    /// Returns the layout record for this archetype.
    #[must_use]
    pub fn layout(self) -> &'static PageLayout {
        match self {
            Self::Content => content_page_layout(),
            Self::List => list_page_layout(),
        }
    }
}

impl fmt::Display for PageArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Content => write!(f, "content"),
            Self::List => write!(f, "list"),
        }
    }
}

// ============================================================================
// Default Layouts
// ============================================================================

/// Graph instance shared by both page archetypes.
static GRAPH: LazyLock<Arc<Graph>> = LazyLock::new(|| {
    let view = D3Config {
        opacity_scale: 4.75,
        focus_on_hover: true,
        font_size: 0.8,
        repel_force: 2.0,
        ..D3Config::default()
    };
    Arc::new(Graph::new(GraphOptions {
        local_graph: view.clone(),
        global_graph: view,
    }))
});

/// Explorer instance shared by both page archetypes.
static EXPLORER: LazyLock<Arc<Explorer>> = LazyLock::new(|| {
    Arc::new(Explorer::new(ExplorerOptions {
        title: "Knowledge".to_string(),
        folder_click_behavior: FolderClickBehavior::Link,
    }))
});

static SHARED_LAYOUT: LazyLock<SharedLayout> = LazyLock::new(|| SharedLayout {
    head: Arc::new(Head),
    header: Vec::new(),
    footer: Arc::new(Footer::new(FooterOptions {
        links: vec![FooterLink {
            label: "GitHub".to_string(),
            href: "https://github.com/pageweave/pageweave".to_string(),
        }],
    })),
});

fn left_sidebar() -> Vec<Arc<dyn Component>> {
    vec![
        Arc::new(PageTitle),
        Arc::new(MobileOnly::new(Arc::new(Spacer))),
        Arc::new(Search),
        Arc::new(Darkmode),
        Arc::new(DesktopOnly::new(
            Arc::clone(&*EXPLORER) as Arc<dyn Component>
        )),
    ]
}

fn right_sidebar() -> Vec<Arc<dyn Component>> {
    vec![
        Arc::clone(&*GRAPH) as Arc<dyn Component>,
        Arc::new(DesktopOnly::new(Arc::new(TableOfContents))),
        Arc::new(Backlinks),
    ]
}

/// Layout for pages that display a single piece of content.
static CONTENT_PAGE_LAYOUT: LazyLock<PageLayout> = LazyLock::new(|| PageLayout {
    before_body: vec![
        Arc::new(Breadcrumbs),
        Arc::new(ArticleTitle),
        Arc::new(ContentMeta),
        Arc::new(TagList),
    ],
    left: left_sidebar(),
    right: right_sidebar(),
});

/// Layout for pages that display lists of pages (tags, folders).
static LIST_PAGE_LAYOUT: LazyLock<PageLayout> = LazyLock::new(|| PageLayout {
    before_body: vec![
        Arc::new(Breadcrumbs),
        Arc::new(ArticleTitle),
        Arc::new(ContentMeta),
    ],
    left: left_sidebar(),
    right: right_sidebar(),
});

// ============================================================================
// Public API
// ============================================================================

/// Components shared across all pages.
#[must_use]
pub fn shared_layout() -> &'static SharedLayout {
    &SHARED_LAYOUT
}

/// The single-content page layout.
#[must_use]
pub fn content_page_layout() -> &'static PageLayout {
    &CONTENT_PAGE_LAYOUT
}

/// The list page layout.
#[must_use]
pub fn list_page_layout() -> &'static PageLayout {
    &LIST_PAGE_LAYOUT
}

// ============================================================================
// Tests
// ============================================================================
