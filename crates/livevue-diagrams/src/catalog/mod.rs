//! The fixed set of LiveVue diagrams.
//!
//! Each topic has a hard-coded builder. The graphical variant covers the
//! four topology topics and is laid out for SVG; the textual variant covers
//! all six topics and is serialized to Mermaid.

pub mod graphical;
pub mod textual;

/// Heading of the aggregated Mermaid index.
pub const INDEX_TITLE: &str = "LiveVue Architecture Diagrams";

/// Paragraph under the index heading.
pub const INDEX_DESCRIPTION: &str =
    "This document contains various diagrams explaining the architecture of LiveVue.";

/// Architectural topics, in builder invocation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Architecture,
    ComponentFlow,
    DataFlow,
    SsrProcess,
    ClassDiagram,
    Lifecycle,
}

impl Topic {
    pub const ALL: [Topic; 6] = [
        Topic::Architecture,
        Topic::ComponentFlow,
        Topic::DataFlow,
        Topic::SsrProcess,
        Topic::ClassDiagram,
        Topic::Lifecycle,
    ];

    /// File stem of the topic's output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Architecture => "architecture",
            Self::ComponentFlow => "component_flow",
            Self::DataFlow => "data_flow",
            Self::SsrProcess => "ssr_process",
            Self::ClassDiagram => "class_diagram",
            Self::Lifecycle => "lifecycle",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_topic_names_are_unique() {
        let names: HashSet<_> = Topic::ALL.iter().map(|topic| topic.name()).collect();
        assert_eq!(names.len(), Topic::ALL.len());
    }

    #[test]
    fn test_variants_follow_topic_order() {
        let graphical: Vec<_> = graphical::diagrams().into_iter().map(|(t, _)| t).collect();
        let textual: Vec<_> = textual::diagrams().into_iter().map(|(t, _)| t).collect();

        assert_eq!(graphical, Topic::ALL[..4].to_vec());
        assert_eq!(textual, Topic::ALL.to_vec());
    }
}
