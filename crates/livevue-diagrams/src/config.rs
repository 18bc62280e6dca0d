//! Configuration types for diagram generation.
//!
//! All types implement [`serde::Deserialize`] so the CLI can load them from
//! TOML. Every field has a default, so an empty document is a valid
//! configuration.
//!
//! - [`AppConfig`] - root combining the sections below
//! - [`OutputConfig`] - where each variant writes its files
//! - [`LayoutConfig`] - spacing used by the layered layout engine
//! - [`StyleConfig`] - colors and fonts of the SVG output
//!
//! # Example
//!
//! ```
//! # use livevue_diagrams::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.output().svg_dir().to_str(), Some("output"));
//! assert_eq!(config.output().mermaid_dir().to_str(), Some("mermaid"));
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use livevue_diagrams_core::color::Color;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    output: OutputConfig,

    #[serde(default)]
    layout: LayoutConfig,

    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    pub fn new(output: OutputConfig, layout: LayoutConfig, style: StyleConfig) -> Self {
        Self {
            output,
            layout,
            style,
        }
    }

    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Replaces the output section.
    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }
}

/// Output directories of the two variants.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving `<topic>.svg` files.
    svg_dir: PathBuf,

    /// Directory receiving `<topic>.md` files and `index.md`.
    mermaid_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            svg_dir: PathBuf::from("output"),
            mermaid_dir: PathBuf::from("mermaid"),
        }
    }
}

impl OutputConfig {
    pub fn svg_dir(&self) -> &Path {
        &self.svg_dir
    }

    pub fn mermaid_dir(&self) -> &Path {
        &self.mermaid_dir
    }

    pub fn with_svg_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.svg_dir = dir.into();
        self
    }

    pub fn with_mermaid_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.mermaid_dir = dir.into();
        self
    }
}

/// Spacing of the layered layout, in pixels.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Gap between neighbouring boxes within a layer.
    node_spacing: f32,

    /// Gap between consecutive layers.
    layer_spacing: f32,

    /// Padding between a cluster border and its content.
    cluster_padding: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_spacing: 40.0,
            layer_spacing: 70.0,
            cluster_padding: 20.0,
        }
    }
}

impl LayoutConfig {
    pub fn new(node_spacing: f32, layer_spacing: f32, cluster_padding: f32) -> Self {
        Self {
            node_spacing,
            layer_spacing,
            cluster_padding,
        }
    }

    pub fn node_spacing(&self) -> f32 {
        self.node_spacing
    }

    pub fn layer_spacing(&self) -> f32 {
        self.layer_spacing
    }

    pub fn cluster_padding(&self) -> f32 {
        self.cluster_padding
    }
}

/// Visual styling of SVG output. Unset colors fall back to renderer defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    background_color: Option<Color>,
    edge_color: Option<Color>,
    font_family: String,
    font_size: u16,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            edge_color: None,
            font_family: "sans-serif".to_string(),
            font_size: 13,
        }
    }
}

impl StyleConfig {
    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    pub fn edge_color(&self) -> Option<Color> {
        self.edge_color
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }
}
