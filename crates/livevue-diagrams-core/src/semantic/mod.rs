//! Renderer-independent diagram models.
//!
//! Builders describe a diagram once as one of these models; the Mermaid
//! serializer and the SVG pipeline turn it into file content.

mod class;
mod flow;
mod sequence;
mod state;

pub use class::{Class, ClassDiagram, ClassMember, ClassRelation, Visibility};
pub use flow::{
    Cluster, Direction, FlowDiagram, FlowDiagramBuilder, FlowEdge, FlowNode, Member, NodeKind,
    ScopeBuilder,
};
pub use sequence::{Message, MessageKind, Participant, SequenceDiagram};
pub use state::{StateDiagram, StateRef, Transition};

use thiserror::Error;

/// Structural problems detected in a model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("node `{0}` is declared more than once")]
    DuplicateNode(String),

    #[error("edge refers to unknown node `{0}`")]
    UnknownNode(String),
}

/// Kind of a [`Diagram`], used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramKind {
    Flow,
    Sequence,
    Class,
    State,
}

/// Any diagram the generator can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagram {
    Flow(FlowDiagram),
    Sequence(SequenceDiagram),
    Class(ClassDiagram),
    State(StateDiagram),
}

impl Diagram {
    pub fn kind(&self) -> DiagramKind {
        match self {
            Self::Flow(_) => DiagramKind::Flow,
            Self::Sequence(_) => DiagramKind::Sequence,
            Self::Class(_) => DiagramKind::Class,
            Self::State(_) => DiagramKind::State,
        }
    }
}

impl From<FlowDiagram> for Diagram {
    fn from(diagram: FlowDiagram) -> Self {
        Self::Flow(diagram)
    }
}

impl From<SequenceDiagram> for Diagram {
    fn from(diagram: SequenceDiagram) -> Self {
        Self::Sequence(diagram)
    }
}

impl From<ClassDiagram> for Diagram {
    fn from(diagram: ClassDiagram) -> Self {
        Self::Class(diagram)
    }
}

impl From<StateDiagram> for Diagram {
    fn from(diagram: StateDiagram) -> Self {
        Self::State(diagram)
    }
}
