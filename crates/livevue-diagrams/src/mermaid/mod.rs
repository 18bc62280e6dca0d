//! Mermaid serialization of semantic diagrams.
//!
//! [`MermaidWriter::render`] turns any [`Diagram`] into a fenced Markdown
//! block:
//!
//! ````text
//! ```mermaid
//! flowchart TB
//!     subgraph Client
//!         Browser["Browser"]
//!     end
//! ```
//! ````
//!
//! Each diagram kind lives in its own submodule as an `impl MermaidWriter`
//! block. Body lines are indented by four spaces per nesting level.

mod class;
mod flowchart;
mod sequence;
mod state;

use log::debug;

use livevue_diagrams_core::semantic::Diagram;

const INDENT: &str = "    ";

/// Accumulates the lines of one Mermaid block.
#[derive(Debug, Default)]
pub struct MermaidWriter {
    lines: Vec<String>,
    depth: usize,
}

impl MermaidWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `diagram` as a complete fenced block ending with a newline.
    pub fn render(diagram: &Diagram) -> String {
        let mut writer = Self::new();
        match diagram {
            Diagram::Flow(flow) => writer.write_flowchart(flow),
            Diagram::Sequence(sequence) => writer.write_sequence(sequence),
            Diagram::Class(class) => writer.write_class_diagram(class),
            Diagram::State(state) => writer.write_state_diagram(state),
        }

        let content = writer.finish();
        debug!(
            diagram_kind:? = diagram.kind(),
            bytes = content.len();
            "Mermaid block rendered"
        );
        content
    }

    /// Writes an unindented header line such as `flowchart LR`.
    fn header(&mut self, header: &str) {
        self.lines.push(header.to_string());
        self.depth = 1;
    }

    /// Writes `line` at the current depth.
    fn line(&mut self, line: impl AsRef<str>) {
        let mut indented = INDENT.repeat(self.depth);
        indented.push_str(line.as_ref());
        self.lines.push(indented);
    }

    /// Writes an empty separator line, never two in a row.
    fn blank(&mut self) {
        if self.lines.last().is_some_and(|last| !last.is_empty()) {
            self.lines.push(String::new());
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn finish(mut self) -> String {
        while self.lines.last().is_some_and(String::is_empty) {
            self.lines.pop();
        }

        let mut out = String::from("```mermaid\n");
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("```\n");
        out
    }
}

/// Escapes text placed inside a quoted Mermaid label.
pub fn escape_label(label: &str) -> String {
    label.replace('"', "#quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_label() {
        assert_eq!(escape_label("Template (HEEx)"), "Template (HEEx)");
        assert_eq!(escape_label(r#"say "hi""#), "say #quot;hi#quot;");
    }

    #[test]
    fn test_writer_indents_and_fences() {
        let mut writer = MermaidWriter::new();
        writer.header("flowchart LR");
        writer.line("subgraph A");
        writer.indent();
        writer.line("x[\"X\"]");
        writer.dedent();
        writer.line("end");
        writer.blank();
        writer.blank();

        assert_eq!(
            writer.finish(),
            "```mermaid\nflowchart LR\n    subgraph A\n        x[\"X\"]\n    end\n```\n"
        );
    }
}
