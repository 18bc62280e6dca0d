//! Layered layout engine for flow diagrams.
//!
//! Every containment scope (the top level and each cluster) is laid out on
//! its own, innermost first, so a cluster is a single sized box by the time
//! its parent scope is arranged:
//!
//! 1. Edges are lifted to the units (direct nodes or sub-clusters) of the
//!    scope that contain their endpoints; edges inside one unit are dropped.
//! 2. Back edges found by a depth-first search are reversed, then units are
//!    ranked by longest path over a topological order.
//! 3. Units keep their declaration order inside a layer, then one barycenter
//!    sweep pulls them towards their predecessors.
//! 4. Layers are stacked along the main axis of the diagram direction and
//!    centred on the cross axis.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use log::{debug, trace};
use petgraph::{
    Direction as EdgeDirection,
    algo::toposort,
    graph::{DiGraph, NodeIndex},
    visit::{DfsEvent, depth_first_search},
};

use livevue_diagrams_core::{
    geometry::{Bounds, Insets, Point, Size},
    identifier::Id,
    semantic::{Direction, FlowDiagram, Member},
};

use super::{FlowLayout, PlacedCluster, PlacedEdge, PlacedNode, caption_font_size, text};
use crate::{
    config::{LayoutConfig, StyleConfig},
    error::DiagramError,
};

const MIN_NODE_WIDTH: f32 = 120.0;
const MIN_NODE_HEIGHT: f32 = 50.0;
const NODE_PADDING_X: f32 = 16.0;
const NODE_PADDING_Y: f32 = 10.0;
/// Space between a cluster title and the cluster content.
const TITLE_GAP: f32 = 8.0;

/// Places nodes and clusters of a [`FlowDiagram`].
///
/// # Examples
///
/// ```
/// use livevue_diagrams::layout::Engine;
/// use livevue_diagrams::semantic::{Direction, FlowDiagram, NodeKind};
///
/// let diagram = FlowDiagram::builder("Example", Direction::LeftToRight)
///     .node("a", "A", NodeKind::Vue)
///     .node("b", "B", NodeKind::Elixir)
///     .edge("a", "b")
///     .build();
///
/// let layout = Engine::default().with_layer_spacing(50.0).calculate_layout(&diagram)?;
/// let (a, b) = (layout.nodes()[0].bounds(), layout.nodes()[1].bounds());
/// assert!(a.max_x() < b.min_x());
/// # Ok::<(), livevue_diagrams::DiagramError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    node_spacing: f32,
    layer_spacing: f32,
    cluster_padding: f32,
    font_family: String,
    font_size: u16,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(&LayoutConfig::default(), &StyleConfig::default())
    }
}

impl Engine {
    pub fn new(layout: &LayoutConfig, style: &StyleConfig) -> Self {
        Self {
            node_spacing: layout.node_spacing(),
            layer_spacing: layout.layer_spacing(),
            cluster_padding: layout.cluster_padding(),
            font_family: style.font_family().to_string(),
            font_size: style.font_size(),
        }
    }

    /// Set the gap between consecutive layers
    pub fn with_layer_spacing(mut self, spacing: f32) -> Self {
        self.layer_spacing = spacing;
        self
    }

    /// Set the padding between a cluster border and its content
    pub fn with_cluster_padding(mut self, padding: f32) -> Self {
        self.cluster_padding = padding;
        self
    }

    /// Calculate the layout of a whole diagram.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::Graph`] when the diagram has duplicate node ids
    /// or edges to undeclared nodes, and [`DiagramError::Layout`] when
    /// placement fails.
    pub fn calculate_layout<'a>(
        &self,
        diagram: &'a FlowDiagram,
    ) -> Result<FlowLayout<'a>, DiagramError> {
        diagram.validate()?;

        let hierarchy = Hierarchy::new(diagram);
        let scope = self.layout_scope(diagram, &hierarchy, None, diagram.members())?;

        let node_bounds: HashMap<Id, Bounds> = scope.nodes.iter().copied().collect();

        let nodes = diagram
            .nodes()
            .iter()
            .filter_map(|node| {
                node_bounds
                    .get(&node.id())
                    .map(|&bounds| PlacedNode { node, bounds })
            })
            .collect();

        let mut clusters = scope
            .clusters
            .iter()
            .filter_map(|&(idx, bounds)| {
                diagram.clusters().get(idx).map(|cluster| PlacedCluster {
                    cluster,
                    bounds,
                    depth: hierarchy.cluster_depth[idx],
                })
            })
            .collect::<Vec<_>>();
        clusters.sort_by_key(PlacedCluster::depth);

        let edges = diagram
            .edges()
            .iter()
            .map(|edge| {
                let endpoint = |id: Id| {
                    node_bounds.get(&id).copied().ok_or_else(|| {
                        DiagramError::Layout(format!("node `{id}` was not placed"))
                    })
                };
                Ok(PlacedEdge {
                    edge,
                    source: endpoint(edge.source())?,
                    target: endpoint(edge.target())?,
                })
            })
            .collect::<Result<Vec<_>, DiagramError>>()?;

        debug!(
            title = diagram.title(),
            width = scope.size.width(),
            height = scope.size.height();
            "Flow diagram laid out"
        );

        Ok(FlowLayout {
            diagram,
            size: scope.size,
            nodes,
            clusters,
            edges,
        })
    }

    /// Lay out the members of one scope, recursing into sub-clusters first.
    fn layout_scope(
        &self,
        diagram: &FlowDiagram,
        hierarchy: &Hierarchy,
        scope: Option<usize>,
        members: &[Member],
    ) -> Result<ScopeLayout, DiagramError> {
        let mut units: IndexMap<Member, Unit> = IndexMap::new();

        for &member in members {
            let unit = match member {
                Member::Node(id) => {
                    let node = diagram.node(id).ok_or_else(|| {
                        DiagramError::Layout(format!("node `{id}` is not declared"))
                    })?;
                    Unit {
                        size: self.node_size(node.label(), node.kind().caption()),
                        content: None,
                    }
                }
                Member::Cluster(idx) => {
                    let cluster = diagram.clusters().get(idx).ok_or_else(|| {
                        DiagramError::Layout(format!("cluster #{idx} does not exist"))
                    })?;
                    let inner = self.layout_scope(diagram, hierarchy, Some(idx), cluster.members())?;

                    let title = text::measure(cluster.label(), &self.font_family, self.font_size);
                    let insets = Insets::uniform(self.cluster_padding)
                        .with_top(self.cluster_padding + title.height() + TITLE_GAP);
                    let size = Size::new(inner.size.width().max(title.width()), inner.size.height())
                        .add_padding(insets);

                    Unit {
                        size,
                        content: Some((inner, insets)),
                    }
                }
            };
            units.insert(member, unit);
        }

        let layers = self.assign_layers(diagram, hierarchy, scope, &units)?;
        let (positions, size) = self.position_units(diagram.direction(), &layers, &units);

        trace!(
            scope:? = scope,
            units = units.len(),
            layers = layers.len();
            "Scope laid out"
        );

        let mut layout = ScopeLayout {
            size,
            ..ScopeLayout::default()
        };
        for (member, unit) in units {
            let top_left = positions.get(&member).copied().unwrap_or_default();
            let bounds = Bounds::new_from_top_left(top_left, unit.size);
            match member {
                Member::Node(id) => layout.nodes.push((id, bounds)),
                Member::Cluster(idx) => {
                    layout.clusters.push((idx, bounds));
                    if let Some((inner, insets)) = unit.content {
                        let offset = top_left.add_point(Point::new(insets.left(), insets.top()));
                        layout.absorb(inner, offset);
                    }
                }
            }
        }

        Ok(layout)
    }

    /// Size of a node box: label above caption, padded, never below the minimum.
    fn node_size(&self, label: &str, caption: &str) -> Size {
        let label_size = text::measure(label, &self.font_family, self.font_size);
        let caption_size = text::measure(
            caption,
            &self.font_family,
            caption_font_size(self.font_size),
        );

        let width = label_size.width().max(caption_size.width()) + 2.0 * NODE_PADDING_X;
        let height = label_size.height() + caption_size.height() + 2.0 * NODE_PADDING_Y;

        Size::new(width.max(MIN_NODE_WIDTH), height.max(MIN_NODE_HEIGHT))
    }

    /// Group the units of a scope into ordered layers.
    fn assign_layers(
        &self,
        diagram: &FlowDiagram,
        hierarchy: &Hierarchy,
        scope: Option<usize>,
        units: &IndexMap<Member, Unit>,
    ) -> Result<Vec<Vec<Member>>, DiagramError> {
        let mut graph = DiGraph::<Member, ()>::new();
        let indices: HashMap<Member, NodeIndex> = units
            .keys()
            .map(|&member| (member, graph.add_node(member)))
            .collect();

        let mut seen = HashSet::new();
        for edge in diagram.edges() {
            let (Some(source), Some(target)) = (
                hierarchy.unit_in_scope(edge.source(), scope),
                hierarchy.unit_in_scope(edge.target(), scope),
            ) else {
                continue;
            };
            if source == target || !seen.insert((source, target)) {
                continue;
            }
            if let (Some(&source), Some(&target)) = (indices.get(&source), indices.get(&target)) {
                graph.add_edge(source, target, ());
            }
        }

        let acyclic = break_cycles(&graph);
        let order = toposort(&acyclic, None).map_err(|cycle| {
            DiagramError::Layout(format!(
                "cycle through {:?} remained after reversing back edges",
                acyclic[cycle.node_id()]
            ))
        })?;

        // Longest path from any source
        let mut rank = vec![0usize; acyclic.node_count()];
        for idx in order {
            rank[idx.index()] = acyclic
                .neighbors_directed(idx, EdgeDirection::Incoming)
                .map(|pred| rank[pred.index()] + 1)
                .max()
                .unwrap_or(0);
        }

        let layer_count = rank.iter().max().map_or(0, |max| max + 1);
        let mut layers: Vec<Vec<Member>> = vec![Vec::new(); layer_count];
        for idx in acyclic.node_indices() {
            layers[rank[idx.index()]].push(acyclic[idx]);
        }

        order_by_barycenter(&acyclic, &indices, &mut layers);

        Ok(layers)
    }

    /// Top-left corner of every unit, plus the size of the whole scope.
    fn position_units(
        &self,
        direction: Direction,
        layers: &[Vec<Member>],
        units: &IndexMap<Member, Unit>,
    ) -> (HashMap<Member, Point>, Size) {
        let vertical = direction.is_vertical();
        let size_of = |member: &Member| units.get(member).map_or_else(Size::default, |unit| unit.size);
        let main = |size: Size| if vertical { size.height() } else { size.width() };
        let cross = |size: Size| if vertical { size.width() } else { size.height() };

        let layer_main: Vec<f32> = layers
            .iter()
            .map(|layer| {
                layer
                    .iter()
                    .map(|member| main(size_of(member)))
                    .fold(0.0, f32::max)
            })
            .collect();
        let layer_cross: Vec<f32> = layers
            .iter()
            .map(|layer| {
                let sum: f32 = layer.iter().map(|member| cross(size_of(member))).sum();
                sum + self.node_spacing * layer.len().saturating_sub(1) as f32
            })
            .collect();

        let total_main = layer_main.iter().sum::<f32>()
            + self.layer_spacing * layers.len().saturating_sub(1) as f32;
        let total_cross = layer_cross.iter().copied().fold(0.0, f32::max);

        let mut positions = HashMap::new();
        let mut main_offset = 0.0;
        for ((layer, &extent), &span) in layers.iter().zip(&layer_main).zip(&layer_cross) {
            let mut cross_offset = (total_cross - span) / 2.0;
            for member in layer {
                let size = size_of(member);
                let mut main_pos = main_offset + (extent - main(size)) / 2.0;
                if direction.is_reversed() {
                    main_pos = total_main - main_pos - main(size);
                }

                let top_left = if vertical {
                    Point::new(cross_offset, main_pos)
                } else {
                    Point::new(main_pos, cross_offset)
                };
                positions.insert(*member, top_left);
                cross_offset += cross(size) + self.node_spacing;
            }
            main_offset += extent + self.layer_spacing;
        }

        let size = if vertical {
            Size::new(total_cross, total_main)
        } else {
            Size::new(total_main, total_cross)
        };
        (positions, size)
    }
}

/// A box to place within a scope; clusters carry their laid-out content.
#[derive(Debug)]
struct Unit {
    size: Size,
    content: Option<(ScopeLayout, Insets)>,
}

/// Placement of one scope relative to its own top-left corner.
#[derive(Debug, Default)]
struct ScopeLayout {
    size: Size,
    nodes: Vec<(Id, Bounds)>,
    clusters: Vec<(usize, Bounds)>,
}

impl ScopeLayout {
    fn absorb(&mut self, inner: ScopeLayout, offset: Point) {
        self.nodes.extend(
            inner
                .nodes
                .into_iter()
                .map(|(id, bounds)| (id, bounds.translate(offset))),
        );
        self.clusters.extend(
            inner
                .clusters
                .into_iter()
                .map(|(idx, bounds)| (idx, bounds.translate(offset))),
        );
    }
}

/// Parent links of the cluster tree.
#[derive(Debug)]
struct Hierarchy {
    node_parent: HashMap<Id, Option<usize>>,
    cluster_parent: Vec<Option<usize>>,
    cluster_depth: Vec<usize>,
}

impl Hierarchy {
    fn new(diagram: &FlowDiagram) -> Self {
        let cluster_count = diagram.clusters().len();
        let mut hierarchy = Self {
            node_parent: HashMap::new(),
            cluster_parent: vec![None; cluster_count],
            cluster_depth: vec![0; cluster_count],
        };
        hierarchy.visit(diagram, None, 0, diagram.members());
        hierarchy
    }

    fn visit(&mut self, diagram: &FlowDiagram, parent: Option<usize>, depth: usize, members: &[Member]) {
        for &member in members {
            match member {
                Member::Node(id) => {
                    self.node_parent.insert(id, parent);
                }
                Member::Cluster(idx) => {
                    self.cluster_parent[idx] = parent;
                    self.cluster_depth[idx] = depth;
                    if let Some(cluster) = diagram.clusters().get(idx) {
                        self.visit(diagram, Some(idx), depth + 1, cluster.members());
                    }
                }
            }
        }
    }

    /// The member of `scope` that contains node `id`, if the node lies inside it.
    fn unit_in_scope(&self, id: Id, scope: Option<usize>) -> Option<Member> {
        let mut unit = Member::Node(id);
        let mut parent = *self.node_parent.get(&id)?;
        loop {
            if parent == scope {
                return Some(unit);
            }
            let idx = parent?;
            unit = Member::Cluster(idx);
            parent = *self.cluster_parent.get(idx)?;
        }
    }
}

/// Copy of `graph` with every DFS back edge reversed.
fn break_cycles(graph: &DiGraph<Member, ()>) -> DiGraph<Member, ()> {
    let mut back_edges = HashSet::new();
    depth_first_search(graph, graph.node_indices(), |event| {
        if let DfsEvent::BackEdge(source, target) = event {
            back_edges.insert((source, target));
        }
    });

    let mut acyclic = graph.clone();
    acyclic.clear_edges();
    for edge in graph.raw_edges() {
        let (source, target) = (edge.source(), edge.target());
        if back_edges.contains(&(source, target)) {
            acyclic.add_edge(target, source, ());
        } else {
            acyclic.add_edge(source, target, ());
        }
    }
    acyclic
}

/// Reorder each layer after the first by the mean slot of its predecessors.
///
/// Units without predecessors keep their current slot as their key; the sort
/// is stable so ties keep declaration order.
fn order_by_barycenter(
    graph: &DiGraph<Member, ()>,
    indices: &HashMap<Member, NodeIndex>,
    layers: &mut [Vec<Member>],
) {
    let mut slots: HashMap<Member, usize> = HashMap::new();
    if let Some(first) = layers.first() {
        slots.extend(first.iter().enumerate().map(|(slot, member)| (*member, slot)));
    }

    for layer in layers.iter_mut().skip(1) {
        let mut keyed: Vec<(f32, Member)> = layer
            .iter()
            .enumerate()
            .map(|(slot, &member)| {
                let preds: Vec<f32> = indices
                    .get(&member)
                    .into_iter()
                    .flat_map(|&idx| graph.neighbors_directed(idx, EdgeDirection::Incoming))
                    .filter_map(|pred| slots.get(&graph[pred]))
                    .map(|&pred_slot| pred_slot as f32)
                    .collect();
                let key = if preds.is_empty() {
                    slot as f32
                } else {
                    preds.iter().sum::<f32>() / preds.len() as f32
                };
                (key, member)
            })
            .collect();
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

        *layer = keyed.into_iter().map(|(_, member)| member).collect();
        slots.extend(layer.iter().enumerate().map(|(slot, member)| (*member, slot)));
    }
}
