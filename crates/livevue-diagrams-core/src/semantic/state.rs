//! State diagrams: a component lifecycle as labelled transitions.

use crate::identifier::Id;

/// Endpoint of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateRef {
    /// The initial pseudo-state.
    Start,
    /// The final pseudo-state.
    End,
    Named(Id),
}

impl From<&str> for StateRef {
    fn from(name: &str) -> Self {
        Self::Named(Id::new(name))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    from: StateRef,
    to: StateRef,
    label: Option<String>,
}

impl Transition {
    pub fn from(&self) -> StateRef {
        self.from
    }

    pub fn to(&self) -> StateRef {
        self.to
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Transitions grouped into paragraphs; renderers separate paragraphs with
/// blank lines.
///
/// # Examples
///
/// ```
/// use livevue_diagrams_core::semantic::{StateDiagram, StateRef};
///
/// let diagram = StateDiagram::new()
///     .transition(StateRef::Start, "Mounted", "created")
///     .paragraph()
///     .transition("Mounted", StateRef::End, "destroyed");
///
/// assert_eq!(diagram.paragraphs().len(), 2);
/// assert_eq!(diagram.transitions().count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StateDiagram {
    paragraphs: Vec<Vec<Transition>>,
}

impl Default for StateDiagram {
    fn default() -> Self {
        Self {
            paragraphs: vec![Vec::new()],
        }
    }
}

impl StateDiagram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a labelled transition to the current paragraph.
    pub fn transition(
        mut self,
        from: impl Into<StateRef>,
        to: impl Into<StateRef>,
        label: &str,
    ) -> Self {
        let transition = Transition {
            from: from.into(),
            to: to.into(),
            label: Some(label.to_string()),
        };
        if let Some(current) = self.paragraphs.last_mut() {
            current.push(transition);
        }
        self
    }

    /// Starts a new paragraph. Consecutive calls do not create empty ones.
    pub fn paragraph(mut self) -> Self {
        if self.paragraphs.last().is_some_and(|current| !current.is_empty()) {
            self.paragraphs.push(Vec::new());
        }
        self
    }

    /// Non-empty paragraphs in order.
    pub fn paragraphs(&self) -> Vec<&[Transition]> {
        self.paragraphs
            .iter()
            .filter(|paragraph| !paragraph.is_empty())
            .map(Vec::as_slice)
            .collect()
    }

    pub fn transitions(&self) -> impl Iterator<Item = &Transition> {
        self.paragraphs.iter().flatten()
    }
}
