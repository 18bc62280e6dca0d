//! Geometric layout of flow diagrams.
//!
//! The [`Engine`] places every node and cluster of a [`FlowDiagram`] and
//! returns a [`FlowLayout`]: absolute bounds in a coordinate space whose
//! origin is the top-left corner of the diagram content.

mod layered;
mod text;

pub use layered::Engine;
pub use text::measure;

use livevue_diagrams_core::{
    geometry::{Bounds, Size},
    semantic::{Cluster, Direction, FlowDiagram, FlowEdge, FlowNode},
};

/// Font size of the technology caption drawn under a node label.
pub fn caption_font_size(font_size: u16) -> u16 {
    font_size.saturating_sub(3).max(8)
}

/// A node with its final bounds.
#[derive(Debug, Clone)]
pub struct PlacedNode<'a> {
    node: &'a FlowNode,
    bounds: Bounds,
}

impl<'a> PlacedNode<'a> {
    pub fn node(&self) -> &'a FlowNode {
        self.node
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// A cluster box with its final bounds and nesting depth (0 = top level).
#[derive(Debug, Clone)]
pub struct PlacedCluster<'a> {
    cluster: &'a Cluster,
    bounds: Bounds,
    depth: usize,
}

impl<'a> PlacedCluster<'a> {
    pub fn cluster(&self) -> &'a Cluster {
        self.cluster
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// An edge together with the bounds of its two endpoints.
#[derive(Debug, Clone)]
pub struct PlacedEdge<'a> {
    edge: &'a FlowEdge,
    source: Bounds,
    target: Bounds,
}

impl<'a> PlacedEdge<'a> {
    pub fn edge(&self) -> &'a FlowEdge {
        self.edge
    }

    pub fn source(&self) -> Bounds {
        self.source
    }

    pub fn target(&self) -> Bounds {
        self.target
    }
}

/// Result of laying out a [`FlowDiagram`].
#[derive(Debug, Clone)]
pub struct FlowLayout<'a> {
    diagram: &'a FlowDiagram,
    size: Size,
    nodes: Vec<PlacedNode<'a>>,
    clusters: Vec<PlacedCluster<'a>>,
    edges: Vec<PlacedEdge<'a>>,
}

impl<'a> FlowLayout<'a> {
    pub fn title(&self) -> &'a str {
        self.diagram.title()
    }

    pub fn direction(&self) -> Direction {
        self.diagram.direction()
    }

    /// Size of the content, excluding any title or margin added on export.
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn nodes(&self) -> &[PlacedNode<'a>] {
        &self.nodes
    }

    /// Clusters ordered outermost first, so later entries draw on top.
    pub fn clusters(&self) -> &[PlacedCluster<'a>] {
        &self.clusters
    }

    pub fn edges(&self) -> &[PlacedEdge<'a>] {
        &self.edges
    }
}
