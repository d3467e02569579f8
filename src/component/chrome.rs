//! Shared page chrome and body components.
//!
//! Each component here emits a single container element with a stable
//! marker class. Content that originates outside the layout (search index,
//! backlink graph, tag data) is injected into these containers by the
//! consuming pipeline; the components only establish the structure.

use serde::{Deserialize, Serialize};

use crate::component::{Component, PageContext, class_names, escape_html};

// ============================================================================
// Head / Footer
// ============================================================================

/// Document head: charset, viewport, and the page title.
#[derive(Debug, Default, Clone, Copy)]
pub struct Head;

impl Component for Head {
    fn name(&self) -> &'static str {
        "Head"
    }

    fn render(&self, ctx: &PageContext) -> String {
        let title = if ctx.page_title.is_empty() || ctx.page_title == ctx.site_title {
            escape_html(&ctx.site_title)
        } else {
            format!(
                "{} | {}",
                escape_html(&ctx.page_title),
                escape_html(&ctx.site_title)
            )
        };

        format!(
            "<head>\n  <meta charset=\"utf-8\">\n  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n  <title>{title}</title>\n</head>"
        )
    }
}

/// A single external link in the footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    /// Link text.
    pub label: String,
    /// Link target.
    pub href: String,
}

/// Options record for [`Footer`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FooterOptions {
    /// External links rendered in declared order.
    #[serde(default)]
    pub links: Vec<FooterLink>,
}

/// Page footer with an ordered list of external links.
#[derive(Debug, Clone)]
pub struct Footer {
    links: Vec<FooterLink>,
}

impl Footer {
    /// Builds the footer from its options record.
    #[must_use]
    pub fn new(opts: FooterOptions) -> Self {
        Self { links: opts.links }
    }
}

impl Component for Footer {
    fn name(&self) -> &'static str {
        "Footer"
    }

    fn render(&self, ctx: &PageContext) -> String {
        let items: String = self
            .links
            .iter()
            .map(|link| {
                format!(
                    r#"<li><a href="{}">{}</a></li>"#,
                    escape_html(&link.href),
                    escape_html(&link.label)
                )
            })
            .collect();

        format!(
            r#"<footer class="{}"><ul>{items}</ul></footer>"#,
            class_names(ctx.display_class, &["footer"]),
        )
    }
}

// ============================================================================
// Sidebar Chrome
// ============================================================================

/// Site title linking back to the index page.
#[derive(Debug, Default, Clone, Copy)]
pub struct PageTitle;

impl Component for PageTitle {
    fn name(&self) -> &'static str {
        "PageTitle"
    }

    fn render(&self, ctx: &PageContext) -> String {
        format!(
            r#"<h1 class="{}"><a href="/">{}</a></h1>"#,
            class_names(ctx.display_class, &["page-title"]),
            escape_html(&ctx.site_title),
        )
    }
}

/// Empty flexible spacer.
#[derive(Debug, Default, Clone, Copy)]
pub struct Spacer;

impl Component for Spacer {
    fn name(&self) -> &'static str {
        "Spacer"
    }

    fn render(&self, ctx: &PageContext) -> String {
        format!(
            r#"<div class="{}"></div>"#,
            class_names(ctx.display_class, &["spacer"]),
        )
    }
}

/// Search container; the index and handlers come from the pipeline.
#[derive(Debug, Default, Clone, Copy)]
pub struct Search;

impl Component for Search {
    fn name(&self) -> &'static str {
        "Search"
    }

    fn render(&self, ctx: &PageContext) -> String {
        format!(
            "<div class=\"{}\" id=\"search\">\n  <input type=\"text\" id=\"search-bar\" placeholder=\"Search\">\n</div>",
            class_names(ctx.display_class, &["search"]),
        )
    }
}

/// Dark mode toggle button.
#[derive(Debug, Default, Clone, Copy)]
pub struct Darkmode;

impl Component for Darkmode {
    fn name(&self) -> &'static str {
        "Darkmode"
    }

    fn render(&self, ctx: &PageContext) -> String {
        format!(
            r#"<button class="{}" id="darkmode-toggle" aria-label="Toggle dark mode"></button>"#,
            class_names(ctx.display_class, &["darkmode"]),
        )
    }
}

// ============================================================================
// Body Components
// ============================================================================

/// Ancestor trail derived from the page slug.
#[derive(Debug, Default, Clone, Copy)]
pub struct Breadcrumbs;

impl Component for Breadcrumbs {
    fn name(&self) -> &'static str {
        "Breadcrumbs"
    }

    fn render(&self, ctx: &PageContext) -> String {
        let mut crumbs = vec![r#"<a href="/">Home</a>"#.to_string()];

        let segments: Vec<&str> = ctx
            .slug
            .split('/')
            .filter(|s| !s.is_empty() && *s != "index")
            .collect();

        let mut path = String::new();
        for (i, segment) in segments.iter().enumerate() {
            path.push('/');
            path.push_str(segment);

            if i + 1 == segments.len() {
                // Current page: plain text, no self-link.
                crumbs.push(escape_html(segment));
            } else {
                crumbs.push(format!(
                    r#"<a href="{}">{}</a>"#,
                    escape_html(&path),
                    escape_html(segment)
                ));
            }
        }

        format!(
            r#"<nav class="{}">{}</nav>"#,
            class_names(ctx.display_class, &["breadcrumbs"]),
            crumbs.join(" / "),
        )
    }
}

/// Page title heading; empty when the page has no title.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArticleTitle;

impl Component for ArticleTitle {
    fn name(&self) -> &'static str {
        "ArticleTitle"
    }

    fn render(&self, ctx: &PageContext) -> String {
        if ctx.page_title.is_empty() {
            return String::new();
        }
        format!(
            r#"<h1 class="{}">{}</h1>"#,
            class_names(ctx.display_class, &["article-title"]),
            escape_html(&ctx.page_title),
        )
    }
}

/// Container for page metadata (dates, reading time) filled by the pipeline.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContentMeta;

impl Component for ContentMeta {
    fn name(&self) -> &'static str {
        "ContentMeta"
    }

    fn render(&self, ctx: &PageContext) -> String {
        format!(
            r#"<p class="{}"></p>"#,
            class_names(ctx.display_class, &["content-meta"]),
        )
    }
}

/// Container for the page's tag links.
#[derive(Debug, Default, Clone, Copy)]
pub struct TagList;

impl Component for TagList {
    fn name(&self) -> &'static str {
        "TagList"
    }

    fn render(&self, ctx: &PageContext) -> String {
        format!(
            r#"<ul class="{}"></ul>"#,
            class_names(ctx.display_class, &["tags"]),
        )
    }
}

// ============================================================================
// Right Sidebar
// ============================================================================

/// Container for pages linking to the current one.
#[derive(Debug, Default, Clone, Copy)]
pub struct Backlinks;

impl Component for Backlinks {
    fn name(&self) -> &'static str {
        "Backlinks"
    }

    fn render(&self, ctx: &PageContext) -> String {
        format!(
            "<div class=\"{}\">\n  <h3>Backlinks</h3>\n  <ul class=\"backlinks-list\"></ul>\n</div>",
            class_names(ctx.display_class, &["backlinks"]),
        )
    }
}

/// Container for the heading outline of the current page.
#[derive(Debug, Default, Clone, Copy)]
pub struct TableOfContents;

impl Component for TableOfContents {
    fn name(&self) -> &'static str {
        "TableOfContents"
    }

    fn render(&self, ctx: &PageContext) -> String {
        format!(
            "<div class=\"{}\" id=\"toc\">\n  <h3>Table of Contents</h3>\n  <ul class=\"toc-list\"></ul>\n</div>",
            class_names(ctx.display_class, &["toc"]),
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
