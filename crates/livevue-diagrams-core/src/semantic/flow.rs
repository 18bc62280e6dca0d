//! Flow diagrams: nodes grouped into nested clusters, joined by directed edges.
//!
//! A [`FlowDiagram`] is what both renderers consume for topology diagrams:
//! the Mermaid serializer writes it as a `flowchart`, and the layout engine
//! places it for SVG export.
//!
//! # Building
//!
//! ```
//! use livevue_diagrams_core::semantic::{Direction, FlowDiagram, NodeKind};
//!
//! let diagram = FlowDiagram::builder("LiveVue Architecture", Direction::TopToBottom)
//!     .cluster("Client", "Client", |client| {
//!         client.node("Browser", "Browser", NodeKind::Client);
//!     })
//!     .cluster("Server", "Server", |server| {
//!         server
//!             .cluster("LiveVue", "LiveVue", |live_vue| {
//!                 live_vue.node("LiveVueCore", "LiveVue Core", NodeKind::Custom);
//!             })
//!             .node("Phoenix", "Phoenix LiveView", NodeKind::Elixir);
//!     })
//!     .edge("Browser", "Phoenix")
//!     .edge("Phoenix", "LiveVueCore")
//!     .build();
//!
//! assert_eq!(diagram.nodes().len(), 3);
//! assert_eq!(diagram.clusters().len(), 3);
//! assert!(diagram.validate().is_ok());
//! ```

use std::collections::HashSet;

use log::trace;

use super::ModelError;
use crate::identifier::Id;

/// Direction in which layers of a flow diagram are stacked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Layers go downward (Mermaid `TB`).
    #[default]
    TopToBottom,
    /// Layers go rightward (Mermaid `LR`).
    LeftToRight,
    /// Layers go upward (Mermaid `BT`).
    BottomToTop,
    /// Layers go leftward (Mermaid `RL`).
    RightToLeft,
}

impl Direction {
    /// The Mermaid keyword for this direction.
    pub fn mermaid_code(self) -> &'static str {
        match self {
            Self::TopToBottom => "TB",
            Self::LeftToRight => "LR",
            Self::BottomToTop => "BT",
            Self::RightToLeft => "RL",
        }
    }

    /// Whether layers are stacked along the Y axis.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::TopToBottom | Self::BottomToTop)
    }

    /// Whether the layer order runs against the axis (upward or leftward).
    pub fn is_reversed(self) -> bool {
        matches!(self, Self::BottomToTop | Self::RightToLeft)
    }
}

/// Technology a node stands for. Drives node styling in SVG output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Client,
    Elixir,
    Vue,
    TypeScript,
    JavaScript,
    Custom,
}

impl NodeKind {
    /// Short caption printed under the node label.
    pub fn caption(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Elixir => "elixir",
            Self::Vue => "vue",
            Self::TypeScript => "typescript",
            Self::JavaScript => "javascript",
            Self::Custom => "livevue",
        }
    }
}

/// A labelled box in a flow diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowNode {
    id: Id,
    label: String,
    kind: NodeKind,
}

impl FlowNode {
    pub fn id(&self) -> Id {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }
}

/// A directed edge between two nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowEdge {
    source: Id,
    target: Id,
    label: Option<String>,
}

impl FlowEdge {
    pub fn source(&self) -> Id {
        self.source
    }

    pub fn target(&self) -> Id {
        self.target
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// One entry of a scope: either a node or a nested cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Member {
    Node(Id),
    /// Index into [`FlowDiagram::clusters`].
    Cluster(usize),
}

/// A named group of members drawn as a surrounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    id: Id,
    label: String,
    members: Vec<Member>,
}

impl Cluster {
    pub fn id(&self) -> Id {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Members in declaration order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }
}

/// A complete flow diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowDiagram {
    title: String,
    direction: Direction,
    nodes: Vec<FlowNode>,
    clusters: Vec<Cluster>,
    members: Vec<Member>,
    edges: Vec<FlowEdge>,
}

impl FlowDiagram {
    /// Starts building a diagram with the given title and direction.
    pub fn builder(title: impl Into<String>, direction: Direction) -> FlowDiagramBuilder {
        FlowDiagramBuilder {
            diagram: FlowDiagram {
                title: title.into(),
                direction,
                nodes: Vec::new(),
                clusters: Vec::new(),
                members: Vec::new(),
                edges: Vec::new(),
            },
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// All nodes in declaration order, regardless of cluster.
    pub fn nodes(&self) -> &[FlowNode] {
        &self.nodes
    }

    pub fn node(&self, id: Id) -> Option<&FlowNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// All clusters; [`Member::Cluster`] indexes into this slice.
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Top-level members in declaration order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    /// Checks that node ids are unique and every edge endpoint exists.
    ///
    /// # Errors
    ///
    /// Returns the first [`ModelError`] found.
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut seen = HashSet::new();
        for node in &self.nodes {
            if !seen.insert(node.id) {
                return Err(ModelError::DuplicateNode(node.id.to_string()));
            }
        }

        for edge in &self.edges {
            for endpoint in [edge.source, edge.target] {
                if !seen.contains(&endpoint) {
                    return Err(ModelError::UnknownNode(endpoint.to_string()));
                }
            }
        }

        Ok(())
    }
}

/// Builder returned by [`FlowDiagram::builder`].
#[derive(Debug)]
pub struct FlowDiagramBuilder {
    diagram: FlowDiagram,
}

impl FlowDiagramBuilder {
    /// Adds a top-level node.
    pub fn node(mut self, id: &str, label: &str, kind: NodeKind) -> Self {
        ScopeBuilder::new(&mut self.diagram, None).node(id, label, kind);
        self
    }

    /// Adds a top-level cluster, filled in by `fill`.
    pub fn cluster(
        mut self,
        id: &str,
        label: &str,
        fill: impl FnOnce(&mut ScopeBuilder<'_>),
    ) -> Self {
        ScopeBuilder::new(&mut self.diagram, None).cluster(id, label, fill);
        self
    }

    /// Adds an unlabelled edge.
    pub fn edge(mut self, source: &str, target: &str) -> Self {
        self.diagram.edges.push(FlowEdge {
            source: Id::new(source),
            target: Id::new(target),
            label: None,
        });
        self
    }

    /// Adds an edge carrying a label.
    pub fn labeled_edge(mut self, source: &str, target: &str, label: &str) -> Self {
        self.diagram.edges.push(FlowEdge {
            source: Id::new(source),
            target: Id::new(target),
            label: Some(label.to_string()),
        });
        self
    }

    pub fn build(self) -> FlowDiagram {
        trace!(
            title = self.diagram.title,
            nodes = self.diagram.nodes.len(),
            edges = self.diagram.edges.len();
            "Flow diagram built"
        );
        self.diagram
    }
}

/// Adds members to one scope (the top level or a cluster).
#[derive(Debug)]
pub struct ScopeBuilder<'a> {
    diagram: &'a mut FlowDiagram,
    cluster: Option<usize>,
}

impl<'a> ScopeBuilder<'a> {
    fn new(diagram: &'a mut FlowDiagram, cluster: Option<usize>) -> Self {
        Self { diagram, cluster }
    }

    fn push_member(&mut self, member: Member) {
        match self.cluster {
            Some(idx) => self.diagram.clusters[idx].members.push(member),
            None => self.diagram.members.push(member),
        }
    }

    /// Adds a node to this scope.
    pub fn node(&mut self, id: &str, label: &str, kind: NodeKind) -> &mut Self {
        let id = Id::new(id);
        self.diagram.nodes.push(FlowNode {
            id,
            label: label.to_string(),
            kind,
        });
        self.push_member(Member::Node(id));
        self
    }

    /// Adds a nested cluster to this scope, filled in by `fill`.
    pub fn cluster(
        &mut self,
        id: &str,
        label: &str,
        fill: impl FnOnce(&mut ScopeBuilder<'_>),
    ) -> &mut Self {
        let idx = self.diagram.clusters.len();
        self.diagram.clusters.push(Cluster {
            id: Id::new(id),
            label: label.to_string(),
            members: Vec::new(),
        });
        self.push_member(Member::Cluster(idx));

        let mut inner = ScopeBuilder::new(&mut *self.diagram, Some(idx));
        fill(&mut inner);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FlowDiagram {
        FlowDiagram::builder("sample", Direction::LeftToRight)
            .cluster("Outer", "Outer Box", |outer| {
                outer
                    .cluster("Inner", "Inner", |inner| {
                        inner.node("a", "A", NodeKind::Vue);
                    })
                    .node("b", "B", NodeKind::Elixir);
            })
            .node("c", "C", NodeKind::Client)
            .edge("a", "b")
            .labeled_edge("b", "c", "renders")
            .build()
    }

    #[test]
    fn test_member_order_is_preserved() {
        let diagram = sample();

        assert_eq!(diagram.members(), &[Member::Cluster(0), Member::Node(Id::new("c"))]);
        let outer = &diagram.clusters()[0];
        assert_eq!(outer.label(), "Outer Box");
        assert_eq!(
            outer.members(),
            &[Member::Cluster(1), Member::Node(Id::new("b"))]
        );
        assert_eq!(diagram.clusters()[1].members(), &[Member::Node(Id::new("a"))]);
    }

    #[test]
    fn test_nodes_and_edges() {
        let diagram = sample();

        assert_eq!(diagram.nodes().len(), 3);
        assert_eq!(diagram.node(Id::new("b")).unwrap().kind(), NodeKind::Elixir);
        assert_eq!(diagram.edges()[1].label(), Some("renders"));
        assert!(diagram.edges()[0].label().is_none());
        assert!(diagram.validate().is_ok());
    }

    #[test]
    fn test_validate_unknown_endpoint() {
        let diagram = FlowDiagram::builder("broken", Direction::TopToBottom)
            .node("a", "A", NodeKind::Vue)
            .edge("a", "missing")
            .build();

        assert_eq!(
            diagram.validate(),
            Err(ModelError::UnknownNode("missing".to_string()))
        );
    }

    #[test]
    fn test_validate_duplicate_node() {
        let diagram = FlowDiagram::builder("dup", Direction::TopToBottom)
            .node("a", "A", NodeKind::Vue)
            .cluster("g", "G", |group| {
                group.node("a", "Again", NodeKind::Vue);
            })
            .build();

        assert_eq!(
            diagram.validate(),
            Err(ModelError::DuplicateNode("a".to_string()))
        );
    }

    #[test]
    fn test_direction_codes() {
        assert_eq!(Direction::TopToBottom.mermaid_code(), "TB");
        assert_eq!(Direction::RightToLeft.mermaid_code(), "RL");
        assert!(Direction::BottomToTop.is_vertical());
        assert!(Direction::BottomToTop.is_reversed());
        assert!(!Direction::LeftToRight.is_reversed());
    }
}
