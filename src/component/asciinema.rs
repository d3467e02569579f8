//! Asciinema player embed component.
//!
//! The factory captures a recording path and a target element id at
//! construction and emits the player bootstrap call as a post-render hook.
//! The player library itself is an external capability expected to be
//! loaded on the page at render time.

use serde::{Deserialize, Serialize};

use crate::component::{Component, PageContext, class_names};
use crate::error::{ComponentError, PageweaveError};

/// Element id used when [`CastOptions::cast_id`] is omitted.
pub const DEFAULT_CAST_ID: &str = "asciicast-cast";

/// Marker class present on every rendered cast container.
pub const CAST_MARKER_CLASS: &str = "asciinema-cast";

// ============================================================================
// Options Record
// ============================================================================

/// Options record for [`AsciinemaCast`].
///
/// Constructed once and captured by the component instance it configures.
/// Field names follow the camelCase wire shape (`castPath` / `castId`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CastOptions {
    /// Path to the `.cast` recording served alongside the page.
    pub cast_path: String,

    /// Container element id. Defaults to [`DEFAULT_CAST_ID`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cast_id: Option<String>,
}

impl CastOptions {
    /// Parses an options record from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns a YAML error if the document does not match the record shape
    /// or contains unknown fields.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, PageweaveError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads an options record from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a YAML error if
    /// it does not parse.
    pub fn from_yaml_file(path: &std::path::Path) -> Result<Self, PageweaveError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&raw)
    }
}

// ============================================================================
// Component
// ============================================================================

/// Embeds a third-party asciinema player attached to a rendered container.
///
/// The default element id is not unique-safe: embedding two casts on one
/// page requires explicit distinct `cast_id` values, which the factory does
/// not enforce.
#[derive(Debug, Clone)]
pub struct AsciinemaCast {
    path: String,
    id: String,
}

impl AsciinemaCast {
    /// Builds the component from its options record.
    ///
    /// Construction is the only validation point: the factory either
    /// produces a fully configured instance or fails before any renderable
    /// state exists. An omitted `cast_id` falls back to
    /// [`DEFAULT_CAST_ID`]; all other field values pass through verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::MissingOptions`] if the options record is
    /// entirely absent.
    pub fn new(opts: Option<CastOptions>) -> Result<Self, ComponentError> {
        let opts = opts.ok_or(ComponentError::MissingOptions {
            component: "AsciinemaCast",
        })?;

        let id = opts.cast_id.unwrap_or_else(|| DEFAULT_CAST_ID.to_string());
        tracing::debug!(path = %opts.cast_path, id = %id, "constructed asciinema cast component");

        Ok(Self {
            path: opts.cast_path,
            id,
        })
    }

    /// The resolved container element id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The captured recording path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Component for AsciinemaCast {
    fn name(&self) -> &'static str {
        "AsciinemaCast"
    }

    fn render(&self, ctx: &PageContext) -> String {
        format!(
            r#"<div class="{}" id="{}"></div>"#,
            class_names(ctx.display_class, &[CAST_MARKER_CLASS]),
            self.id,
        )
    }

    fn after_dom(&self) -> Option<String> {
        Some(format!(
            "AsciinemaPlayer.create('{}', document.getElementById('{}'));",
            self.path, self.id,
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================
