//! SVG rendering of flow layout elements.

use svg::node::element as svg_element;

use livevue_diagrams_core::{
    geometry::{Bounds, Point},
    semantic::NodeKind,
};

use super::{Svg, arrows, px, round};
use crate::layout::{self, FlowLayout, PlacedEdge, PlacedNode};

/// Fill and stroke of a node box.
struct NodePalette {
    fill: &'static str,
    stroke: &'static str,
}

fn node_palette(kind: NodeKind) -> NodePalette {
    let (fill, stroke) = match kind {
        NodeKind::Client => ("#e3f2fd", "#1e88e5"),
        NodeKind::Elixir => ("#ede7f6", "#4b275f"),
        NodeKind::Vue => ("#e8f5e9", "#41b883"),
        NodeKind::TypeScript => ("#e1ecf7", "#3178c6"),
        NodeKind::JavaScript => ("#fffde7", "#c9a700"),
        NodeKind::Custom => ("#fff3e0", "#fb8c00"),
    };
    NodePalette { fill, stroke }
}

/// Cluster fills alternate with nesting depth.
const CLUSTER_FILLS: [&str; 2] = ["#f5f7fa", "#e9eef4"];
const CLUSTER_STROKE: &str = "#90a4ae";
const TEXT_COLOR: &str = "#263238";
const CAPTION_COLOR: &str = "#607d8b";
/// How far a self-loop bulges out of its node.
const LOOP_REACH: f32 = 40.0;

impl Svg {
    pub(super) fn render_clusters(&self, layout: &FlowLayout<'_>) -> svg_element::Group {
        let font_px = px(self.font_size);

        layout
            .clusters()
            .iter()
            .fold(svg_element::Group::new(), |group, placed| {
                let bounds = placed.bounds();
                let fill = CLUSTER_FILLS[placed.depth() % CLUSTER_FILLS.len()];

                group
                    .add(
                        svg_element::Rectangle::new()
                            .set("x", round(bounds.min_x()))
                            .set("y", round(bounds.min_y()))
                            .set("width", round(bounds.width()))
                            .set("height", round(bounds.height()))
                            .set("rx", 8)
                            .set("fill", fill)
                            .set("stroke", CLUSTER_STROKE)
                            .set("stroke-dasharray", "6 3"),
                    )
                    .add(
                        svg_element::Text::new(placed.cluster().label())
                            .set("x", round(bounds.min_x() + 10.0))
                            .set("y", round(bounds.min_y() + 8.0 + font_px))
                            .set("font-size", round(font_px))
                            .set("font-weight", "bold")
                            .set("fill", TEXT_COLOR),
                    )
            })
    }

    pub(super) fn render_edges(&self, layout: &FlowLayout<'_>) -> svg_element::Group {
        layout
            .edges()
            .iter()
            .fold(svg_element::Group::new(), |group, placed| {
                let (path_data, label_anchor) = if placed.edge().is_self_loop() {
                    self_loop_path(placed.source())
                } else {
                    straight_path(placed)
                };

                let group = group.add(
                    svg_element::Path::new()
                        .set("d", path_data)
                        .set("fill", "none")
                        .set("stroke", self.edge_color)
                        .set("stroke-width", 1.5)
                        .set("marker-end", arrows::marker_reference(self.edge_color)),
                );

                match placed.edge().label() {
                    Some(label) => group.add(self.render_edge_label(label, label_anchor)),
                    None => group,
                }
            })
    }

    /// Label centred on `anchor` over a translucent background.
    fn render_edge_label(&self, label: &str, anchor: Point) -> svg_element::Group {
        let font_size = layout::caption_font_size(self.font_size);
        let size = layout::measure(label, &self.font_family, font_size);
        let background = Bounds::new_from_center(anchor, size);

        svg_element::Group::new()
            .add(
                svg_element::Rectangle::new()
                    .set("x", round(background.min_x() - 4.0))
                    .set("y", round(background.min_y() - 2.0))
                    .set("width", round(background.width() + 8.0))
                    .set("height", round(background.height() + 4.0))
                    .set("rx", 3)
                    .set("fill", self.background_color)
                    .set("fill-opacity", 0.85),
            )
            .add(
                svg_element::Text::new(label)
                    .set("x", round(anchor.x()))
                    .set("y", round(anchor.y()))
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "central")
                    .set("font-size", round(px(font_size)))
                    .set("fill", TEXT_COLOR),
            )
    }

    pub(super) fn render_nodes(&self, layout: &FlowLayout<'_>) -> svg_element::Group {
        layout
            .nodes()
            .iter()
            .fold(svg_element::Group::new(), |group, placed| {
                group.add(self.render_node(placed))
            })
    }

    /// Rounded box with the label above the technology caption.
    fn render_node(&self, placed: &PlacedNode<'_>) -> svg_element::Group {
        let node = placed.node();
        let bounds = placed.bounds();
        let center = bounds.center();
        let palette = node_palette(node.kind());
        let label_px = px(self.font_size);
        let caption_px = px(layout::caption_font_size(self.font_size));

        svg_element::Group::new()
            .set("id", format!("node-{}", node.id()))
            .add(
                svg_element::Rectangle::new()
                    .set("x", round(bounds.min_x()))
                    .set("y", round(bounds.min_y()))
                    .set("width", round(bounds.width()))
                    .set("height", round(bounds.height()))
                    .set("rx", 6)
                    .set("fill", palette.fill)
                    .set("stroke", palette.stroke)
                    .set("stroke-width", 1.5),
            )
            .add(
                svg_element::Text::new(node.label())
                    .set("x", round(center.x()))
                    .set("y", round(center.y() - caption_px * 0.6))
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "central")
                    .set("font-size", round(label_px))
                    .set("fill", TEXT_COLOR),
            )
            .add(
                svg_element::Text::new(node.kind().caption())
                    .set("x", round(center.x()))
                    .set("y", round(center.y() + label_px * 0.6))
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "central")
                    .set("font-size", round(caption_px))
                    .set("font-style", "italic")
                    .set("fill", CAPTION_COLOR),
            )
    }
}

/// Straight segment between the node borders, with its midpoint.
fn straight_path(placed: &PlacedEdge<'_>) -> (String, Point) {
    let (source, target) = (placed.source(), placed.target());
    let start = source.boundary_point_towards(target.center());
    let end = target.boundary_point_towards(source.center());

    let data = format!(
        "M {} {} L {} {}",
        round(start.x()),
        round(start.y()),
        round(end.x()),
        round(end.y())
    );
    (data, start.midpoint(end))
}

/// Arc leaving the right side of the node and coming back into it.
fn self_loop_path(bounds: Bounds) -> (String, Point) {
    let quarter = bounds.height() / 4.0;
    let center_y = bounds.center().y();
    let start = Point::new(bounds.max_x(), center_y - quarter);
    let end = Point::new(bounds.max_x(), center_y + quarter);
    let reach = bounds.max_x() + LOOP_REACH;

    let data = format!(
        "M {} {} C {} {}, {} {}, {} {}",
        round(start.x()),
        round(start.y()),
        round(reach),
        round(start.y() - quarter),
        round(reach),
        round(end.y() + quarter),
        round(end.x()),
        round(end.y())
    );
    (data, Point::new(reach, center_y))
}
