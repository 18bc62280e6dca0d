//! `stateDiagram-v2` serialization.

use livevue_diagrams_core::semantic::{StateDiagram, StateRef};

use super::{MermaidWriter, escape_label};

fn state_name(state: StateRef) -> String {
    match state {
        StateRef::Start | StateRef::End => "[*]".to_string(),
        StateRef::Named(id) => id.to_string(),
    }
}

impl MermaidWriter {
    pub(super) fn write_state_diagram(&mut self, diagram: &StateDiagram) {
        self.header("stateDiagram-v2");

        for paragraph in diagram.paragraphs() {
            for transition in paragraph {
                let from = state_name(transition.from());
                let to = state_name(transition.to());
                match transition.label() {
                    Some(label) => {
                        self.line(format!("{from} --> {to}: {}", escape_label(label)))
                    }
                    None => self.line(format!("{from} --> {to}")),
                }
            }
            self.blank();
        }
    }
}

#[cfg(test)]
mod tests {
    use livevue_diagrams_core::semantic::Diagram;

    use super::*;

    #[test]
    fn test_paragraphs_and_pseudo_states() {
        let diagram = StateDiagram::new()
            .transition(StateRef::Start, "Mounted", "created")
            .transition("Mounted", "Mounted", "event")
            .paragraph()
            .transition("Mounted", StateRef::End, "destroyed");

        assert_eq!(
            MermaidWriter::render(&Diagram::State(diagram)),
            "```mermaid
stateDiagram-v2
    [*] --> Mounted: created
    Mounted --> Mounted: event

    Mounted --> [*]: destroyed
```
"
        );
    }

    #[test]
    fn test_quotes_in_transition_label_are_escaped() {
        let diagram = StateDiagram::new().transition("Idle", "Busy", "on \"click\"");

        let rendered = MermaidWriter::render(&Diagram::State(diagram));

        assert!(rendered.contains("    Idle --> Busy: on #quot;click#quot;\n"));
    }
}
