//! SVG backend.
//!
//! [`Svg`] holds the document-wide styling (background, edge color, fonts)
//! and renders a [`FlowLayout`] into an [`svg::Document`]. The document is
//! laid out as:
//!
//! ```text
//! +------------------------------------+
//! |               title                |
//! |  +------------------------------+  |
//! |  | clusters, edges, nodes       |  |
//! |  +------------------------------+  |
//! +------------------------------------+
//! ```
//!
//! Coordinates are rounded to one decimal so output is stable across runs.

mod arrows;
mod flow;

use log::debug;
use svg::{Document, node::element as svg_element};

use livevue_diagrams_core::{color::Color, geometry::Size};

use super::Error;
use crate::{config::StyleConfig, layout::FlowLayout};

const DEFAULT_BACKGROUND: &str = "white";
const DEFAULT_EDGE_COLOR: &str = "#555555";
const DEFAULT_MARGIN: f32 = 30.0;
/// Points added to the base font size for the diagram title.
const TITLE_FONT_DELTA: u16 = 5;

/// SVG exporter for flow layouts.
///
/// # Examples
///
/// ```
/// use livevue_diagrams::export::svg::Svg;
/// use livevue_diagrams::layout::Engine;
/// use livevue_diagrams::semantic::{Direction, FlowDiagram, NodeKind};
///
/// let diagram = FlowDiagram::builder("Tiny", Direction::LeftToRight)
///     .node("a", "A", NodeKind::Vue)
///     .build();
/// let layout = Engine::default().calculate_layout(&diagram)?;
///
/// let content = Svg::default().render_to_string(&layout)?;
/// assert!(content.starts_with("<svg"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Svg {
    background_color: Color,
    edge_color: Color,
    font_family: String,
    font_size: u16,
    margin: f32,
}

impl Default for Svg {
    fn default() -> Self {
        Self::new(&StyleConfig::default())
    }
}

impl Svg {
    pub fn new(style: &StyleConfig) -> Self {
        Self {
            background_color: style
                .background_color()
                .unwrap_or_else(|| fallback_color(DEFAULT_BACKGROUND)),
            edge_color: style
                .edge_color()
                .unwrap_or_else(|| fallback_color(DEFAULT_EDGE_COLOR)),
            font_family: style.font_family().to_string(),
            font_size: style.font_size(),
            margin: DEFAULT_MARGIN,
        }
    }

    /// Set the empty space around the diagram
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Renders a flow layout into a complete SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] when the layout holds non-finite coordinates.
    pub fn render_flow(&self, layout: &FlowLayout<'_>) -> Result<Document, Error> {
        let content_size = layout.size();
        if !content_size.width().is_finite() || !content_size.height().is_finite() {
            return Err(Error::Render(format!(
                "layout of `{}` has a non-finite size",
                layout.title()
            )));
        }

        let title_px = px(self.font_size + TITLE_FONT_DELTA);
        let title_band = title_px * 1.15 + 16.0;
        let svg_size = self.calculate_svg_dimensions(content_size, title_band);

        let mut doc = Document::new()
            .set(
                "viewBox",
                (0, 0, round(svg_size.width()), round(svg_size.height())),
            )
            .set("width", round(svg_size.width()))
            .set("height", round(svg_size.height()))
            .set("font-family", self.font_family.as_str());

        doc = doc
            .add(
                svg_element::Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", round(svg_size.width()))
                    .set("height", round(svg_size.height()))
                    .set("fill", self.background_color),
            )
            .add(arrows::create_marker_definitions([self.edge_color]))
            .add(
                svg_element::Text::new(layout.title())
                    .set("x", round(svg_size.width() / 2.0))
                    .set("y", round(self.margin + title_px))
                    .set("text-anchor", "middle")
                    .set("font-size", title_px)
                    .set("font-weight", "bold")
                    .set("fill", "#263238"),
            );

        let content = svg_element::Group::new()
            .set(
                "transform",
                format!(
                    "translate({}, {})",
                    round(self.margin),
                    round(self.margin + title_band)
                ),
            )
            .add(self.render_clusters(layout))
            .add(self.render_edges(layout))
            .add(self.render_nodes(layout));

        debug!(
            title = layout.title(),
            width = svg_size.width(),
            height = svg_size.height();
            "SVG document rendered"
        );

        Ok(doc.add(content))
    }

    /// Renders a flow layout and serializes the document.
    ///
    /// # Errors
    ///
    /// See [`Svg::render_flow`].
    pub fn render_to_string(&self, layout: &FlowLayout<'_>) -> Result<String, Error> {
        self.render_flow(layout).map(|doc| doc.to_string())
    }

    /// Final document size: content plus margins and the title band.
    fn calculate_svg_dimensions(&self, content_size: Size, title_band: f32) -> Size {
        Size::new(
            content_size.width() + 2.0 * self.margin,
            content_size.height() + 2.0 * self.margin + title_band,
        )
    }
}

fn fallback_color(value: &str) -> Color {
    Color::new(value).unwrap_or_default()
}

/// Pixel size of a font given in points.
fn px(font_size: u16) -> f32 {
    f32::from(font_size) * 1.33
}

/// Rounds to one decimal place.
fn round(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use livevue_diagrams_core::semantic::{Direction, FlowDiagram, NodeKind};

    use super::*;
    use crate::layout::Engine;

    fn sample() -> FlowDiagram {
        FlowDiagram::builder("Sample Diagram", Direction::LeftToRight)
            .cluster("server", "Server", |server| {
                server.node("phoenix", "Phoenix LiveView", NodeKind::Elixir);
            })
            .node("browser", "Browser", NodeKind::Client)
            .labeled_edge("browser", "phoenix", "HTTP & <ws>")
            .build()
    }

    #[test]
    fn test_round() {
        assert_eq!(round(1.04), 1.0);
        assert_eq!(round(1.05001), 1.1);
        assert_eq!(round(-2.26), -2.3);
    }

    #[test]
    fn test_document_contains_all_elements() {
        let diagram = sample();
        let layout = Engine::default().calculate_layout(&diagram).unwrap();
        let content = Svg::default().render_to_string(&layout).unwrap();

        assert!(content.starts_with("<svg"));
        assert!(content.contains("Sample Diagram"));
        assert!(content.contains("Phoenix LiveView"));
        assert!(content.contains("\nServer\n"));
        assert!(content.contains("<marker"));
        assert!(content.contains("marker-end"));
        assert!(content.contains("HTTP &amp; &lt;ws&gt;"));
    }

    #[test]
    fn test_style_colors_are_used() {
        let style: StyleConfig = toml::from_str(
            r##"
            background_color = "#fafafa"
            edge_color = "#ff0000"
            font_family = "monospace"
            "##,
        )
        .unwrap();
        let diagram = sample();
        let layout = Engine::default().calculate_layout(&diagram).unwrap();
        let content = Svg::new(&style).render_to_string(&layout).unwrap();

        let edge_color = Color::new("#ff0000").unwrap();
        assert!(content.contains(&format!("fill=\"{}\"", Color::new("#fafafa").unwrap())));
        assert!(content.contains(&format!("stroke=\"{edge_color}\"")));
        assert!(content.contains("font-family=\"monospace\""));
    }

    #[test]
    fn test_margin_changes_document_size() {
        let diagram = sample();
        let layout = Engine::default().calculate_layout(&diagram).unwrap();

        let narrow = Svg::default().with_margin(0.0).render_flow(&layout).unwrap();
        let wide = Svg::default().with_margin(50.0).render_flow(&layout).unwrap();

        let width = |doc: &Document| {
            let rendered = doc.to_string();
            let start = rendered.find("width=\"").unwrap() + 7;
            let end = start + rendered[start..].find('"').unwrap();
            rendered[start..end].parse::<f32>().unwrap()
        };
        assert!(width(&wide) - width(&narrow) > 99.0);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let diagram = sample();
        let engine = Engine::default();

        let first = Svg::default()
            .render_to_string(&engine.calculate_layout(&diagram).unwrap())
            .unwrap();
        let second = Svg::default()
            .render_to_string(&engine.calculate_layout(&diagram).unwrap())
            .unwrap();

        assert_eq!(first, second);
    }
}
