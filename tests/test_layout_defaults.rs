//! Declared ordering of the default layout records.

use pageweave::component::Component;
use pageweave::layout::{
    PageArchetype, Region, content_page_layout, list_page_layout, shared_layout,
};

fn region_labels(archetype: PageArchetype, region: Region) -> Vec<String> {
    archetype
        .layout()
        .region(region)
        .iter()
        .map(|c| c.label())
        .collect()
}

#[test]
fn content_left_region_enumerates_in_order() {
    assert_eq!(
        region_labels(PageArchetype::Content, Region::Left),
        [
            "PageTitle",
            "MobileOnly(Spacer)",
            "Search",
            "Darkmode",
            "DesktopOnly(Explorer)",
        ]
    );
}

#[test]
fn content_before_body_enumerates_in_order() {
    assert_eq!(
        region_labels(PageArchetype::Content, Region::BeforeBody),
        ["Breadcrumbs", "ArticleTitle", "ContentMeta", "TagList"]
    );
}

#[test]
fn content_right_region_enumerates_in_order() {
    assert_eq!(
        region_labels(PageArchetype::Content, Region::Right),
        ["Graph", "DesktopOnly(TableOfContents)", "Backlinks"]
    );
}

#[test]
fn list_layout_differs_only_in_before_body() {
    assert_eq!(
        region_labels(PageArchetype::List, Region::BeforeBody),
        ["Breadcrumbs", "ArticleTitle", "ContentMeta"]
    );
    assert_eq!(
        region_labels(PageArchetype::List, Region::Left),
        region_labels(PageArchetype::Content, Region::Left)
    );
    assert_eq!(
        region_labels(PageArchetype::List, Region::Right),
        region_labels(PageArchetype::Content, Region::Right)
    );
}

#[test]
fn both_layouts_reference_one_graph_instance() {
    let content_graph = &content_page_layout().right[0];
    let list_graph = &list_page_layout().right[0];
    assert!(std::ptr::eq(
        std::sync::Arc::as_ptr(content_graph).cast::<()>(),
        std::sync::Arc::as_ptr(list_graph).cast::<()>(),
    ));
}

#[test]
fn shared_chrome_has_empty_header() {
    let shared = shared_layout();
    assert!(shared.header.is_empty());
    assert_eq!(shared.head.name(), "Head");
    assert_eq!(shared.footer.name(), "Footer");
}
