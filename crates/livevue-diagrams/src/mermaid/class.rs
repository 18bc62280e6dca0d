//! `classDiagram` serialization.

use livevue_diagrams_core::semantic::ClassDiagram;

use super::{MermaidWriter, escape_label};

impl MermaidWriter {
    pub(super) fn write_class_diagram(&mut self, diagram: &ClassDiagram) {
        self.header("classDiagram");

        for class in diagram.classes() {
            self.line(format!("class {} {{", class.name()));
            self.indent();
            for member in class.members() {
                self.line(format!(
                    "{}{}",
                    member.visibility().marker(),
                    member.signature()
                ));
            }
            self.dedent();
            self.line("}");
            self.blank();
        }

        for relation in diagram.relations() {
            match relation.label() {
                Some(label) => self.line(format!(
                    "{} --> {} : {}",
                    relation.from(),
                    relation.to(),
                    escape_label(label)
                )),
                None => self.line(format!("{} --> {}", relation.from(), relation.to())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use livevue_diagrams_core::semantic::{Class, Diagram};

    use super::*;

    #[test]
    fn test_members_and_relations() {
        let diagram = ClassDiagram::new()
            .class(Class::new("LiveVue").public("vue(assigns)").private("json(data)"))
            .class(Class::new("Vue_App").public("createApp()"))
            .relation("LiveVue", "Vue_App", "renders with");

        assert_eq!(
            MermaidWriter::render(&Diagram::Class(diagram)),
            "```mermaid
classDiagram
    class LiveVue {
        +vue(assigns)
        -json(data)
    }

    class Vue_App {
        +createApp()
    }

    LiveVue --> Vue_App : renders with
```
"
        );
    }

    #[test]
    fn test_quotes_in_relation_label_are_escaped() {
        let diagram = ClassDiagram::new()
            .class(Class::new("A"))
            .class(Class::new("B"))
            .relation("A", "B", "calls \"render\"");

        let rendered = MermaidWriter::render(&Diagram::Class(diagram));

        assert!(rendered.contains("    A --> B : calls #quot;render#quot;\n"));
    }
}
