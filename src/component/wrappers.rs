//! Viewport-scoping wrapper components.
//!
//! Wrappers hold another component and render it with the matching
//! display class injected into the context. Post-render hooks pass
//! through untouched so wrapping never changes hook behavior.

use std::sync::Arc;

use crate::component::{Component, DisplayClass, PageContext};

/// Renders the inner component scoped to narrow viewports.
#[derive(Debug)]
pub struct MobileOnly {
    inner: Arc<dyn Component>,
}

impl MobileOnly {
    /// Wraps a component.
    #[must_use]
    pub fn new(inner: Arc<dyn Component>) -> Self {
        Self { inner }
    }
}

impl Component for MobileOnly {
    fn name(&self) -> &'static str {
        "MobileOnly"
    }

    fn render(&self, ctx: &PageContext) -> String {
        self.inner
            .render(&ctx.with_display_class(DisplayClass::MobileOnly))
    }

    fn after_dom(&self) -> Option<String> {
        self.inner.after_dom()
    }

    fn label(&self) -> String {
        format!("MobileOnly({})", self.inner.label())
    }
}

/// Renders the inner component scoped to wide viewports.
#[derive(Debug)]
pub struct DesktopOnly {
    inner: Arc<dyn Component>,
}

impl DesktopOnly {
    /// Wraps a component.
    #[must_use]
    pub fn new(inner: Arc<dyn Component>) -> Self {
        Self { inner }
    }
}

impl Component for DesktopOnly {
    fn name(&self) -> &'static str {
        "DesktopOnly"
    }

    fn render(&self, ctx: &PageContext) -> String {
        self.inner
            .render(&ctx.with_display_class(DisplayClass::DesktopOnly))
    }

    fn after_dom(&self) -> Option<String> {
        self.inner.after_dom()
    }

    fn label(&self) -> String {
        format!("DesktopOnly({})", self.inner.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::asciinema::{AsciinemaCast, CastOptions};
    use crate::component::chrome::Spacer;

    #[test]
    fn mobile_only_injects_display_class() {
        let wrapped = MobileOnly::new(Arc::new(Spacer));
        let markup = wrapped.render(&PageContext::default());
        assert_eq!(markup, r#"<div class="mobile-only spacer"></div>"#);
    }

    #[test]
    fn desktop_only_injects_display_class() {
        let wrapped = DesktopOnly::new(Arc::new(Spacer));
        let markup = wrapped.render(&PageContext::default());
        assert_eq!(markup, r#"<div class="desktop-only spacer"></div>"#);
    }

    #[test]
    fn wrapper_overrides_existing_display_class() {
        let wrapped = DesktopOnly::new(Arc::new(Spacer));
        let ctx = PageContext::default().with_display_class(DisplayClass::MobileOnly);
        assert_eq!(
            wrapped.render(&ctx),
            r#"<div class="desktop-only spacer"></div>"#
        );
    }

    #[test]
    fn after_dom_passes_through() {
        let cast = AsciinemaCast::new(Some(CastOptions {
            cast_path: "/demo.cast".to_string(),
            cast_id: None,
        }))
        .unwrap();
        let expected = cast.after_dom();

        let wrapped = MobileOnly::new(Arc::new(cast));
        assert_eq!(wrapped.after_dom(), expected);
    }

    #[test]
    fn labels_nest() {
        let wrapped = DesktopOnly::new(Arc::new(MobileOnly::new(Arc::new(Spacer))));
        assert_eq!(wrapped.label(), "DesktopOnly(MobileOnly(Spacer))");
    }
}
