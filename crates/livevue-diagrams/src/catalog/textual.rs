//! Diagrams serialized to Mermaid for the Markdown documentation.

use livevue_diagrams_core::semantic::{
    Class, ClassDiagram, Diagram, Direction, FlowDiagram, NodeKind, SequenceDiagram,
    StateDiagram, StateRef,
};

use super::Topic;

/// Every textual diagram in invocation order.
pub fn diagrams() -> Vec<(Topic, Diagram)> {
    vec![
        (Topic::Architecture, high_level_architecture().into()),
        (Topic::ComponentFlow, component_flow().into()),
        (Topic::DataFlow, data_flow().into()),
        (Topic::SsrProcess, ssr_process().into()),
        (Topic::ClassDiagram, class_diagram().into()),
        (Topic::Lifecycle, lifecycle().into()),
    ]
}

pub fn high_level_architecture() -> FlowDiagram {
    FlowDiagram::builder("LiveVue Architecture", Direction::TopToBottom)
        .cluster("Client", "Client", |client| {
            client
                .node("Browser", "Browser", NodeKind::Client)
                .node("VueComponents", "Vue.js Components", NodeKind::Vue);
        })
        .cluster("Server", "Server", |server| {
            server
                .cluster("LiveVue", "LiveVue", |live_vue| {
                    live_vue
                        .node("LiveVueCore", "LiveVue Core", NodeKind::Custom)
                        .node("SSRModule", "Server-Side Rendering", NodeKind::Custom);
                })
                .node("Phoenix", "Phoenix LiveView", NodeKind::Elixir);
        })
        .edge("Browser", "VueComponents")
        .edge("Browser", "Phoenix")
        .edge("Phoenix", "LiveVueCore")
        .edge("LiveVueCore", "SSRModule")
        .edge("SSRModule", "VueComponents")
        .build()
}

pub fn component_flow() -> FlowDiagram {
    FlowDiagram::builder("LiveVue Component Flow", Direction::LeftToRight)
        .cluster("Elixir", "Elixir", |elixir| {
            elixir
                .node("Template", "Template (HEEx)", NodeKind::Elixir)
                .node("LiveVueComponent", "LiveVue.vue Component", NodeKind::Elixir)
                .node("SSRModule", "SSR Module", NodeKind::Elixir);
        })
        .cluster("JavaScript", "JavaScript", |javascript| {
            javascript
                .node("Hooks", "Vue Hooks", NodeKind::TypeScript)
                .node("VueApp", "Vue Application", NodeKind::Vue)
                .node("Components", "Vue Components", NodeKind::Vue);
        })
        .node("Client", "Browser", NodeKind::Client)
        .edge("Template", "LiveVueComponent")
        .edge("LiveVueComponent", "SSRModule")
        .edge("LiveVueComponent", "Hooks")
        .edge("Hooks", "VueApp")
        .edge("VueApp", "Components")
        .edge("Components", "Client")
        .build()
}

pub fn data_flow() -> FlowDiagram {
    FlowDiagram::builder("LiveVue Data Flow", Direction::TopToBottom)
        .cluster("PhoenixLiveView", "PhoenixLiveView", |phoenix| {
            phoenix
                .node("LiveView", "LiveView", NodeKind::Elixir)
                .node("Assigns", "Assigns", NodeKind::Elixir)
                .node("LiveVueComponent", "LiveVue Component", NodeKind::Elixir);
        })
        .cluster("JavaScriptRuntime", "JavaScriptRuntime", |runtime| {
            runtime
                .node("Hook", "Vue Hook", NodeKind::TypeScript)
                .node("VueApp", "Vue Application", NodeKind::Vue)
                .node("Props", "Props", NodeKind::TypeScript)
                .node("Events", "Events", NodeKind::TypeScript);
        })
        .cluster("DOM", "DOM", |dom| {
            dom.node("Element", "Vue Component Element", NodeKind::Client);
        })
        .edge("LiveView", "Assigns")
        .edge("Assigns", "LiveVueComponent")
        .edge("LiveVueComponent", "Element")
        .edge("Element", "Hook")
        .edge("Hook", "Props")
        .edge("Props", "VueApp")
        .edge("VueApp", "Events")
        .edge("Events", "LiveView")
        .build()
}

pub fn ssr_process() -> SequenceDiagram {
    SequenceDiagram::new()
        .participant_as("LV", "LiveView")
        .participant_as("LVC", "LiveVue.vue Component")
        .participant_as("SSR", "SSR Module")
        .participant_as("Node", "Node.js SSR Server")
        .participant_as("VueSSR", "Vue SSR Renderer")
        .participant("Browser")
        .participant_as("Client", "Client Vue")
        .message("LV", "LVC", "Render component")
        .message("LVC", "SSR", "Request SSR")
        .message("SSR", "Node", "Forward component data")
        .message("Node", "VueSSR", "Render component")
        .reply("VueSSR", "Node", "HTML & preload links")
        .reply("Node", "SSR", "HTML & preload links")
        .reply("SSR", "LVC", "HTML & preload links")
        .reply("LVC", "Browser", "Complete HTML")
        .message("Browser", "Client", "Hydrate Vue component")
}

pub fn class_diagram() -> ClassDiagram {
    ClassDiagram::new()
        .class(
            Class::new("LiveVue")
                .public("vue(assigns)")
                .public("__using__(opts)")
                .private("extract(assigns, type)")
                .private("normalize_key(key, val)")
                .private("key_changed(assigns, key)")
                .private("ssr_render(assigns)")
                .private("json(data)")
                .private("id(name)"),
        )
        .class(Class::new("LiveVue_SSR").public("render(name, props, slots)"))
        .class(
            Class::new("LiveVue_Components")
                .public("__using__(opts)")
                .private("name_to_function(name)"),
        )
        .class(
            Class::new("LiveVue_Slots")
                .public("rendered_slot_map(slots)")
                .public("base_encode_64(slots)"),
        )
        .class(
            Class::new("Vue_Hooks")
                .public("mounted()")
                .public("updated()")
                .public("destroyed()"),
        )
        .class(
            Class::new("Vue_App")
                .public("createApp()")
                .public("createSSRApp()"),
        )
        .relation("LiveVue", "LiveVue_SSR", "uses")
        .relation("LiveVue", "LiveVue_Slots", "uses")
        .relation("LiveVue", "LiveVue_Components", "provides")
        .relation("Vue_Hooks", "Vue_App", "creates")
        .relation("LiveVue_SSR", "Vue_App", "renders with")
}

pub fn lifecycle() -> StateDiagram {
    StateDiagram::new()
        .transition(
            StateRef::Start,
            "TemplateRender",
            "Elixir template includes LiveVue component",
        )
        .transition("TemplateRender", "SSRCheck", "LiveVue.vue function called")
        .paragraph()
        .transition("SSRCheck", "SSRRender", "If initial render and not connected")
        .transition("SSRCheck", "NoSSR", "If connected or SSR disabled")
        .paragraph()
        .transition("SSRRender", "HTMLGeneration", "SSR module renders component")
        .transition("NoSSR", "HTMLGeneration", "Skip SSR, generate placeholder")
        .paragraph()
        .transition("HTMLGeneration", "DOMMount", "HTML rendered to page")
        .paragraph()
        .transition("DOMMount", "HookMount", "Vue hook mounted")
        .transition("HookMount", "VueApp", "Vue app created")
        .transition("VueApp", "ClientHydration", "Vue app hydrates component")
        .paragraph()
        .transition(
            "ClientHydration",
            "EventHandling",
            "Component ready for interaction",
        )
        .transition(
            "EventHandling",
            "EventHandling",
            "User interacts with component",
        )
        .paragraph()
        .transition("EventHandling", "LiveViewUpdate", "Events sent to LiveView")
        .transition(
            "LiveViewUpdate",
            "ComponentUpdate",
            "LiveView updates component props",
        )
        .transition(
            "ComponentUpdate",
            "EventHandling",
            "Component re-renders with new props",
        )
        .paragraph()
        .transition(
            "ComponentUpdate",
            "HookDestroy",
            "When LiveView navigates away",
        )
        .transition("HookDestroy", StateRef::End, "Vue app unmounted")
}
