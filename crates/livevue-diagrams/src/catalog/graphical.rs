//! Topology diagrams rendered to SVG.
//!
//! Layers run left to right. Node kinds select the technology styling.

use livevue_diagrams_core::semantic::{Direction, FlowDiagram, NodeKind};

use super::Topic;

/// Every graphical diagram in invocation order.
pub fn diagrams() -> Vec<(Topic, FlowDiagram)> {
    vec![
        (Topic::Architecture, high_level_architecture()),
        (Topic::ComponentFlow, component_flow()),
        (Topic::DataFlow, data_flow()),
        (Topic::SsrProcess, ssr_process()),
    ]
}

/// Main components of LiveVue across client and server.
pub fn high_level_architecture() -> FlowDiagram {
    FlowDiagram::builder("LiveVue Architecture", Direction::LeftToRight)
        .cluster("client", "Client", |client| {
            client
                .node("browser", "Browser", NodeKind::Client)
                .node("vue_client", "Vue.js Components", NodeKind::Vue);
        })
        .cluster("server", "Server", |server| {
            server
                .node("phoenix", "Phoenix LiveView", NodeKind::Elixir)
                .cluster("live_vue", "LiveVue", |live_vue| {
                    live_vue
                        .node("live_vue_core", "LiveVue Core", NodeKind::Custom)
                        .node("ssr", "SSR Module", NodeKind::Custom);
                });
        })
        .edge("browser", "vue_client")
        .edge("browser", "phoenix")
        .edge("phoenix", "live_vue_core")
        .edge("live_vue_core", "ssr")
        .edge("ssr", "vue_client")
        .build()
}

/// How a component travels from a HEEx template to the browser.
pub fn component_flow() -> FlowDiagram {
    FlowDiagram::builder("LiveVue Component Flow", Direction::LeftToRight)
        .cluster("elixir", "Elixir", |elixir| {
            elixir
                .node("template", "Template (HEEx)", NodeKind::Elixir)
                .node("live_component", "LiveVue.vue Component", NodeKind::Elixir)
                .node("ssr_module", "SSR Module", NodeKind::Elixir);
        })
        .cluster("javascript", "JavaScript", |javascript| {
            javascript
                .node("hooks", "Vue Hooks", NodeKind::TypeScript)
                .node("vue_app", "Vue Application", NodeKind::Vue)
                .node("components", "Vue Components", NodeKind::Vue);
        })
        .node("client", "Browser", NodeKind::Client)
        .edge("template", "live_component")
        .edge("live_component", "ssr_module")
        .edge("live_component", "hooks")
        .edge("hooks", "vue_app")
        .edge("vue_app", "components")
        .edge("components", "client")
        .build()
}

/// Round trip of assigns into props and events back into the LiveView.
pub fn data_flow() -> FlowDiagram {
    FlowDiagram::builder("LiveVue Data Flow", Direction::LeftToRight)
        .cluster("phoenix_live_view", "Phoenix LiveView", |phoenix| {
            phoenix
                .node("live_view", "LiveView", NodeKind::Elixir)
                .node("assigns", "Assigns", NodeKind::Elixir)
                .node("live_vue", "LiveVue Component", NodeKind::Elixir);
        })
        .cluster("javascript_runtime", "JavaScript Runtime", |runtime| {
            runtime
                .node("hook", "Vue Hook", NodeKind::TypeScript)
                .node("vue_app", "Vue Application", NodeKind::Vue)
                .node("props", "Props", NodeKind::TypeScript)
                .node("events", "Events", NodeKind::TypeScript);
        })
        .cluster("dom", "DOM", |dom| {
            dom.node("element", "Vue Component Element", NodeKind::Client);
        })
        .edge("live_view", "assigns")
        .edge("assigns", "live_vue")
        .edge("live_vue", "element")
        .edge("element", "hook")
        .edge("hook", "props")
        .edge("props", "vue_app")
        .edge("vue_app", "events")
        .edge("events", "live_view")
        .build()
}

/// Server-side rendering through the Node.js renderer and client hydration.
pub fn ssr_process() -> FlowDiagram {
    FlowDiagram::builder("LiveVue SSR Process", Direction::LeftToRight)
        .cluster("server", "Server", |server| {
            server
                .node("live_view", "LiveView Render", NodeKind::Elixir)
                .node(
                    "live_vue_component",
                    "LiveVue.vue Component",
                    NodeKind::Elixir,
                )
                .node("ssr_module", "SSR Module", NodeKind::Elixir)
                .node("node_server", "Node.js SSR Server", NodeKind::JavaScript)
                .node("vue_renderer", "Vue SSR Renderer", NodeKind::Vue);
        })
        .cluster("client", "Client", |client| {
            client
                .node("browser", "Browser", NodeKind::Client)
                .node("client_vue", "Vue Hydration", NodeKind::Vue);
        })
        .edge("live_view", "live_vue_component")
        .edge("live_vue_component", "ssr_module")
        .edge("ssr_module", "node_server")
        .edge("node_server", "vue_renderer")
        .edge("vue_renderer", "live_vue_component")
        .edge("live_vue_component", "browser")
        .edge("browser", "client_vue")
        .build()
}
