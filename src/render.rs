//! Region rendering and post-render script collection.
//!
//! The renderer walks a layout record region by region, in declared order,
//! and gathers each component's post-render script exactly once. Scripts
//! are returned rather than executed: running them after the corresponding
//! element is attached is the consuming pipeline's job, and the only
//! ordering guarantee required is "after own element exists".

use std::sync::Arc;

use serde::Serialize;

use crate::component::{Component, PageContext};
use crate::layout::{self, PageArchetype, Region};

/// Rendered markup for one page, region by region.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedPage {
    /// Document head markup.
    pub head: String,

    /// Shared header region markup.
    pub header: String,

    /// Markup rendered above the page body.
    pub before_body: String,

    /// Left sidebar markup.
    pub left: String,

    /// Right sidebar markup.
    pub right: String,

    /// Footer markup.
    pub footer: String,

    /// Post-render scripts in render order, one entry per hook-bearing
    /// component.
    pub scripts: Vec<String>,
}

/// Renders a component sequence into markup, preserving declared order.
#[must_use]
pub fn render_region(components: &[Arc<dyn Component>], ctx: &PageContext) -> String {
    components
        .iter()
        .map(|c| c.render(ctx))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collects post-render scripts from a component sequence in declared order.
#[must_use]
pub fn collect_scripts(components: &[Arc<dyn Component>]) -> Vec<String> {
    components.iter().filter_map(|c| c.after_dom()).collect()
}

/// Renders the shared chrome plus the archetype's three regions.
#[must_use]
pub fn render_page(archetype: PageArchetype, ctx: &PageContext) -> RenderedPage {
    tracing::debug!(archetype = %archetype, slug = %ctx.slug, "rendering page regions");

    let shared = layout::shared_layout();
    let page = archetype.layout();

    let mut scripts = Vec::new();
    scripts.extend(shared.head.after_dom());
    scripts.extend(collect_scripts(&shared.header));
    for region in Region::all() {
        scripts.extend(collect_scripts(page.region(*region)));
    }
    scripts.extend(shared.footer.after_dom());

    RenderedPage {
        head: shared.head.render(ctx),
        header: render_region(&shared.header, ctx),
        before_body: render_region(page.region(Region::BeforeBody), ctx),
        left: render_region(page.region(Region::Left), ctx),
        right: render_region(page.region(Region::Right), ctx),
        footer: shared.footer.render(ctx),
        scripts,
    }
}

// ============================================================================
// Tests
// ============================================================================
