//! LiveVue architecture diagrams.
//!
//! Hard-coded builders describe the LiveVue architecture as typed diagram
//! models. Two renderers turn them into files:
//!
//! - the graphical variant lays flow diagrams out and exports them as SVG
//! - the textual variant serializes every diagram to Mermaid Markdown and
//!   aggregates them into an `index.md`
//!
//! # Pipeline
//!
//! ```text
//! catalog builders
//!     ↓
//! semantic model (FlowDiagram, SequenceDiagram, ...)
//!     ↓ layout::Engine + export::svg::Svg     ↓ mermaid::MermaidWriter
//! <topic>.svg                               <topic>.md + index.md
//! ```

pub mod catalog;
pub mod config;
pub mod export;
pub mod layout;
pub mod mermaid;

mod descriptor;
mod error;
mod writer;

pub use livevue_diagrams_core::{color, geometry, identifier, semantic};

pub use descriptor::{DiagramDescriptor, Format, title_case};
pub use error::DiagramError;
pub use writer::{INDEX_FILE, OutputWriter, render_index};

use std::path::{Path, PathBuf};

use log::{debug, info};

use catalog::{graphical, textual};
use config::AppConfig;
use mermaid::MermaidWriter;
use semantic::{Diagram, FlowDiagram};

/// Entry point for producing the LiveVue diagrams.
///
/// # Examples
///
/// ```rust,no_run
/// use livevue_diagrams::{Generator, config::AppConfig};
///
/// let generator = Generator::new(AppConfig::default());
///
/// let svg_files = generator.generate_svg("output")?;
/// let markdown_files = generator.generate_mermaid("mermaid")?;
///
/// assert_eq!(svg_files.len(), 4);
/// assert_eq!(markdown_files.len(), 7);
/// # Ok::<(), livevue_diagrams::DiagramError>(())
/// ```
#[derive(Debug, Default)]
pub struct Generator {
    config: AppConfig,
}

impl Generator {
    /// Create a generator with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Lay out and render one flow diagram to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::Graph`] for an invalid diagram,
    /// [`DiagramError::Layout`] when placement fails and
    /// [`DiagramError::Export`] when the SVG cannot be rendered.
    pub fn render_svg(&self, diagram: &FlowDiagram) -> Result<String, DiagramError> {
        info!(title = diagram.title(); "Rendering SVG diagram");

        let engine = layout::Engine::new(self.config.layout(), self.config.style());
        let flow_layout = engine.calculate_layout(diagram)?;
        debug!(
            nodes = flow_layout.nodes().len(),
            clusters = flow_layout.clusters().len();
            "Layout calculated"
        );

        let content = export::svg::Svg::new(self.config.style()).render_to_string(&flow_layout)?;
        Ok(content)
    }

    /// Serialize any diagram to a fenced Mermaid block.
    pub fn render_mermaid(&self, diagram: &Diagram) -> String {
        MermaidWriter::render(diagram)
    }

    /// Render every graphical topic, in builder order.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`Generator::render_svg`].
    pub fn svg_descriptors(&self) -> Result<Vec<DiagramDescriptor>, DiagramError> {
        graphical::diagrams()
            .iter()
            .map(|(topic, diagram)| {
                let content = self.render_svg(diagram)?;
                Ok(DiagramDescriptor::new(topic.name(), Format::Svg, content))
            })
            .collect()
    }

    /// Render every textual topic, in builder order.
    pub fn mermaid_descriptors(&self) -> Vec<DiagramDescriptor> {
        textual::diagrams()
            .iter()
            .map(|(topic, diagram)| {
                debug!(topic = topic.name(), diagram_kind:? = diagram.kind(); "Rendering Mermaid diagram");
                DiagramDescriptor::new(topic.name(), Format::Markdown, self.render_mermaid(diagram))
            })
            .collect()
    }

    /// Write `<topic>.svg` for every graphical topic into `dir`.
    ///
    /// # Errors
    ///
    /// Returns the first rendering or I/O error; no retries are made.
    pub fn generate_svg(&self, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, DiagramError> {
        let descriptors = self.svg_descriptors()?;
        OutputWriter::new(dir.as_ref()).write_all(&descriptors)
    }

    /// Write `<topic>.md` for every textual topic plus `index.md` into `dir`.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error; no retries are made.
    pub fn generate_mermaid(&self, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, DiagramError> {
        let descriptors = self.mermaid_descriptors();
        OutputWriter::new(dir.as_ref()).write_all_with_index(&descriptors)
    }
}
