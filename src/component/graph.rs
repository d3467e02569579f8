//! Interactive link-graph component.
//!
//! The graph simulation runs client-side in an external script; this
//! component only emits the containers and embeds the simulation
//! parameters as JSON in a `data-cfg` attribute.

use serde::{Deserialize, Serialize};

use crate::component::{Component, PageContext, class_names, escape_html};

/// Simulation parameters for one graph view.
///
/// Serializes camelCase so the embedded JSON matches what the client-side
/// graph script expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct D3Config {
    /// Whether nodes can be dragged.
    pub drag: bool,
    /// Whether the view can be zoomed.
    pub zoom: bool,
    /// Neighbor depth shown around the current page (-1 for everything).
    pub depth: i32,
    /// Initial zoom scale.
    pub scale: f64,
    /// Node repel force.
    pub repel_force: f64,
    /// Pull toward the view center.
    pub center_force: f64,
    /// Resting link length.
    pub link_distance: f64,
    /// Label font size in em.
    pub font_size: f64,
    /// How quickly labels fade in when zooming.
    pub opacity_scale: f64,
    /// Whether hovering a node highlights its neighborhood.
    pub focus_on_hover: bool,
}

impl Default for D3Config {
    fn default() -> Self {
        Self {
            drag: true,
            zoom: true,
            depth: 1,
            scale: 1.1,
            repel_force: 0.5,
            center_force: 0.3,
            link_distance: 30.0,
            font_size: 0.6,
            opacity_scale: 1.0,
            focus_on_hover: false,
        }
    }
}

/// Options record for [`Graph`]: one config per view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GraphOptions {
    /// Config for the in-sidebar local graph.
    pub local_graph: D3Config,
    /// Config for the full-screen global graph.
    pub global_graph: D3Config,
}

/// Local and global link-graph containers.
#[derive(Debug, Clone)]
pub struct Graph {
    local: D3Config,
    global: D3Config,
}

impl Graph {
    /// Builds the graph component from its options record.
    #[must_use]
    pub fn new(opts: GraphOptions) -> Self {
        Self {
            local: opts.local_graph,
            global: opts.global_graph,
        }
    }
}

/// Serializes a config for embedding in a `data-cfg` attribute.
fn cfg_attr(cfg: &D3Config) -> String {
    serde_json::to_string(cfg).map_or_else(
        |e| {
            tracing::warn!(error = %e, "failed to serialize graph config");
            "{}".to_string()
        },
        |json| escape_html(&json),
    )
}

impl Component for Graph {
    fn name(&self) -> &'static str {
        "Graph"
    }

    fn render(&self, ctx: &PageContext) -> String {
        format!(
            "<div class=\"{}\">\n  <h3>Graph View</h3>\n  <div class=\"graph-outer\" id=\"graph-container\" data-cfg=\"{}\"></div>\n  <div class=\"global-graph-outer\" id=\"global-graph-container\" data-cfg=\"{}\"></div>\n</div>",
            class_names(ctx.display_class, &["graph"]),
            cfg_attr(&self.local),
            cfg_attr(&self.global),
        )
    }
}
