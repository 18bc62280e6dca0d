//! `sequenceDiagram` serialization.

use livevue_diagrams_core::semantic::{MessageKind, SequenceDiagram};

use super::{MermaidWriter, escape_label};

impl MermaidWriter {
    pub(super) fn write_sequence(&mut self, diagram: &SequenceDiagram) {
        self.header("sequenceDiagram");

        for participant in diagram.participants() {
            match participant.label() {
                Some(label) => self.line(format!(
                    "participant {} as {}",
                    participant.id(),
                    escape_label(label)
                )),
                None => self.line(format!("participant {}", participant.id())),
            }
        }

        if !diagram.messages().is_empty() {
            self.blank();
        }
        for message in diagram.messages() {
            let arrow = match message.kind() {
                MessageKind::Sync => "->>",
                MessageKind::Reply => "-->>",
            };
            self.line(format!(
                "{}{arrow}{}: {}",
                message.from(),
                message.to(),
                escape_label(message.text())
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use livevue_diagrams_core::semantic::Diagram;

    use super::*;

    #[test]
    fn test_participants_then_messages() {
        let diagram = SequenceDiagram::new()
            .participant_as("LV", "LiveView")
            .participant("Browser")
            .message("LV", "Browser", "Complete HTML")
            .reply("Browser", "LV", "Event");

        assert_eq!(
            MermaidWriter::render(&Diagram::Sequence(diagram)),
            "```mermaid
sequenceDiagram
    participant LV as LiveView
    participant Browser

    LV->>Browser: Complete HTML
    Browser-->>LV: Event
```
"
        );
    }

    #[test]
    fn test_quotes_in_message_text_are_escaped() {
        let diagram = SequenceDiagram::new()
            .participant_as("LV", "\"Live\" View")
            .participant("Browser")
            .message("LV", "Browser", "push \"update\"");

        let rendered = MermaidWriter::render(&Diagram::Sequence(diagram));

        assert!(rendered.contains("    participant LV as #quot;Live#quot; View\n"));
        assert!(rendered.contains("    LV->>Browser: push #quot;update#quot;\n"));
    }
}
