//! `flowchart` serialization.

use livevue_diagrams_core::semantic::{Cluster, FlowDiagram, Member};

use super::{MermaidWriter, escape_label};

impl MermaidWriter {
    pub(super) fn write_flowchart(&mut self, diagram: &FlowDiagram) {
        self.header(&format!("flowchart {}", diagram.direction().mermaid_code()));

        let members = diagram.members();
        for (idx, member) in members.iter().enumerate() {
            let next_is_cluster = members
                .get(idx + 1)
                .is_some_and(|next| matches!(next, Member::Cluster(_)));
            self.write_member(diagram, *member);
            if matches!(member, Member::Cluster(_)) || next_is_cluster {
                self.blank();
            }
        }

        if !diagram.edges().is_empty() {
            self.blank();
        }
        for edge in diagram.edges() {
            match edge.label() {
                Some(label) => self.line(format!(
                    "{} -->|{}| {}",
                    edge.source(),
                    escape_label(label),
                    edge.target()
                )),
                None => self.line(format!("{} --> {}", edge.source(), edge.target())),
            }
        }
    }

    fn write_member(&mut self, diagram: &FlowDiagram, member: Member) {
        match member {
            Member::Node(id) => {
                let label = diagram
                    .node(id)
                    .map_or_else(|| id.to_string(), |node| node.label().to_string());
                self.line(format!("{id}[\"{}\"]", escape_label(&label)));
            }
            Member::Cluster(idx) => {
                if let Some(cluster) = diagram.clusters().get(idx) {
                    self.write_cluster(diagram, cluster);
                }
            }
        }
    }

    fn write_cluster(&mut self, diagram: &FlowDiagram, cluster: &Cluster) {
        let id = cluster.id();
        if id.is_bare() && id == cluster.label() {
            self.line(format!("subgraph {id}"));
        } else {
            self.line(format!("subgraph {id}[\"{}\"]", escape_label(cluster.label())));
        }

        self.indent();
        for member in cluster.members() {
            self.write_member(diagram, *member);
        }
        self.dedent();
        self.line("end");
    }
}

#[cfg(test)]
mod tests {
    use livevue_diagrams_core::semantic::{Diagram, Direction, NodeKind};

    use super::*;

    #[test]
    fn test_nested_subgraphs_and_edges() {
        let diagram = FlowDiagram::builder("t", Direction::TopToBottom)
            .cluster("Client", "Client", |client| {
                client.node("Browser", "Browser", NodeKind::Client);
            })
            .cluster("Server", "Server", |server| {
                server
                    .cluster("LiveVue", "LiveVue", |live_vue| {
                        live_vue.node("Core", "LiveVue Core", NodeKind::Custom);
                    })
                    .node("Phoenix", "Phoenix LiveView", NodeKind::Elixir);
            })
            .edge("Browser", "Phoenix")
            .labeled_edge("Phoenix", "Core", "mounts")
            .build();

        let expected = "```mermaid
flowchart TB
    subgraph Client
        Browser[\"Browser\"]
    end

    subgraph Server
        subgraph LiveVue
            Core[\"LiveVue Core\"]
        end
        Phoenix[\"Phoenix LiveView\"]
    end

    Browser --> Phoenix
    Phoenix -->|mounts| Core
```
";
        assert_eq!(MermaidWriter::render(&Diagram::Flow(diagram)), expected);
    }

    #[test]
    fn test_labelled_subgraph_and_top_level_node() {
        let diagram = FlowDiagram::builder("t", Direction::LeftToRight)
            .cluster("js", "JavaScript Runtime", |js| {
                js.node("hook", "Vue \"Hook\"", NodeKind::TypeScript);
            })
            .node("client", "Browser", NodeKind::Client)
            .edge("hook", "client")
            .build();

        let rendered = MermaidWriter::render(&Diagram::Flow(diagram));

        assert!(rendered.contains("    subgraph js[\"JavaScript Runtime\"]\n"));
        assert!(rendered.contains("hook[\"Vue #quot;Hook#quot;\"]"));
        assert!(rendered.contains("    end\n\n    client[\"Browser\"]\n\n    hook --> client\n"));
    }

    #[test]
    fn test_no_edges_has_no_trailing_blank() {
        let diagram = FlowDiagram::builder("t", Direction::RightToLeft)
            .node("a", "A", NodeKind::Vue)
            .build();

        assert_eq!(
            MermaidWriter::render(&Diagram::Flow(diagram)),
            "```mermaid\nflowchart RL\n    a[\"A\"]\n```\n"
        );
    }
}
