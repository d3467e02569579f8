//! File explorer sidebar component.

use serde::{Deserialize, Serialize};

use crate::component::{Component, PageContext, class_names, escape_html};

/// What clicking a folder row does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FolderClickBehavior {
    /// Expand or collapse the folder in place.
    #[default]
    Collapse,
    /// Navigate to the folder's index page.
    Link,
}

impl FolderClickBehavior {
    /// Returns the `data-behavior` attribute value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Collapse => "collapse",
            Self::Link => "link",
        }
    }
}

/// Options record for [`Explorer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerOptions {
    /// Heading above the tree.
    #[serde(default = "default_title")]
    pub title: String,

    /// Folder row click behavior.
    #[serde(default)]
    pub folder_click_behavior: FolderClickBehavior,
}

fn default_title() -> String {
    "Explorer".to_string()
}

impl Default for ExplorerOptions {
    fn default() -> Self {
        Self {
            title: default_title(),
            folder_click_behavior: FolderClickBehavior::default(),
        }
    }
}

/// Site tree navigation; the tree itself is populated by the pipeline.
#[derive(Debug, Clone)]
pub struct Explorer {
    title: String,
    behavior: FolderClickBehavior,
}

impl Explorer {
    /// Builds the explorer from its options record.
    #[must_use]
    pub fn new(opts: ExplorerOptions) -> Self {
        Self {
            title: opts.title,
            behavior: opts.folder_click_behavior,
        }
    }
}

impl Component for Explorer {
    fn name(&self) -> &'static str {
        "Explorer"
    }

    fn render(&self, ctx: &PageContext) -> String {
        format!(
            "<div class=\"{}\" data-behavior=\"{}\">\n  <h2 class=\"explorer-title\">{}</h2>\n  <div class=\"explorer-content\" id=\"explorer-content\"></div>\n</div>",
            class_names(ctx.display_class, &["explorer"]),
            self.behavior.as_str(),
            escape_html(&self.title),
        )
    }
}
