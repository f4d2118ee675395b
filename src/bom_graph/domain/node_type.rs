use serde::Serialize;

/// Visualization-facing semantic type of a graph node
///
/// Derived from the `bom-ref` prefix, never from the CycloneDX `type`
/// field carried in the component payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeType {
    Model,
    Agent,
    Library,
    McpServer,
    McpClient,
    McpResource,
    Tool,
    Service,
    Application,
    Data,
}

/// Ordered prefix table. The first matching prefix wins.
const PREFIX_TABLE: &[(&str, NodeType)] = &[
    ("model:", NodeType::Model),
    ("agent:", NodeType::Agent),
    ("pkg:", NodeType::Library),
    ("mcp-server:", NodeType::McpServer),
    ("mcp-client:", NodeType::McpClient),
    ("mcp-resource:", NodeType::McpResource),
    ("tool:", NodeType::Tool),
    ("service:", NodeType::Service),
    ("application:", NodeType::Application),
];

/// Colours and glyph used when drawing a node type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    pub color: &'static str,
    pub background: &'static str,
    pub border: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

impl NodeType {
    /// Every node type, in classification table order with `Data` last
    pub const ALL: [NodeType; 10] = [
        NodeType::Model,
        NodeType::Agent,
        NodeType::Library,
        NodeType::McpServer,
        NodeType::McpClient,
        NodeType::McpResource,
        NodeType::Tool,
        NodeType::Service,
        NodeType::Application,
        NodeType::Data,
    ];

    /// Classifies a `bom-ref` by its prefix
    ///
    /// Total: any string that matches no known prefix is `Data`.
    ///
    /// # Examples
    /// ```
    /// use ai_bom_visualizer::bom_graph::domain::NodeType;
    ///
    /// assert_eq!(NodeType::classify("model:gpt-4o-mini"), NodeType::Model);
    /// assert_eq!(NodeType::classify("pkg:openai"), NodeType::Library);
    /// assert_eq!(NodeType::classify("dataset:squad"), NodeType::Data);
    /// ```
    pub fn classify(bom_ref: &str) -> Self {
        PREFIX_TABLE
            .iter()
            .find(|(prefix, _)| bom_ref.starts_with(prefix))
            .map(|(_, node_type)| *node_type)
            .unwrap_or(NodeType::Data)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Model => "model",
            NodeType::Agent => "agent",
            NodeType::Library => "library",
            NodeType::McpServer => "mcp-server",
            NodeType::McpClient => "mcp-client",
            NodeType::McpResource => "mcp-resource",
            NodeType::Tool => "tool",
            NodeType::Service => "service",
            NodeType::Application => "application",
            NodeType::Data => "data",
        }
    }

    pub fn style(&self) -> NodeStyle {
        match self {
            NodeType::Model => NodeStyle {
                color: "#22c55e",
                background: "rgba(34,197,94,0.12)",
                border: "rgba(34,197,94,0.35)",
                icon: "◉",
                label: "Model",
            },
            NodeType::Agent => NodeStyle {
                color: "#3b82f6",
                background: "rgba(59,130,246,0.12)",
                border: "rgba(59,130,246,0.35)",
                icon: "●",
                label: "Agent",
            },
            NodeType::Library => NodeStyle {
                color: "#ec4899",
                background: "rgba(236,72,153,0.12)",
                border: "rgba(236,72,153,0.35)",
                icon: "◈",
                label: "Library",
            },
            NodeType::McpServer => NodeStyle {
                color: "#a855f7",
                background: "rgba(168,85,247,0.12)",
                border: "rgba(168,85,247,0.35)",
                icon: "⬢",
                label: "MCP Server",
            },
            NodeType::McpClient => NodeStyle {
                color: "#c084fc",
                background: "rgba(192,132,252,0.12)",
                border: "rgba(192,132,252,0.35)",
                icon: "⬡",
                label: "MCP Client",
            },
            NodeType::McpResource => NodeStyle {
                color: "#06b6d4",
                background: "rgba(6,182,212,0.12)",
                border: "rgba(6,182,212,0.35)",
                icon: "▣",
                label: "MCP Resource",
            },
            NodeType::Tool => NodeStyle {
                color: "#f59e0b",
                background: "rgba(245,158,11,0.12)",
                border: "rgba(245,158,11,0.35)",
                icon: "⚙",
                label: "Tool",
            },
            NodeType::Service => NodeStyle {
                color: "#ef4444",
                background: "rgba(239,68,68,0.12)",
                border: "rgba(239,68,68,0.35)",
                icon: "◎",
                label: "Service",
            },
            NodeType::Application => NodeStyle {
                color: "#ffffff",
                background: "rgba(255,255,255,0.08)",
                border: "rgba(255,255,255,0.25)",
                icon: "◆",
                label: "Application",
            },
            NodeType::Data => NodeStyle {
                color: "#06b6d4",
                background: "rgba(6,182,212,0.12)",
                border: "rgba(6,182,212,0.35)",
                icon: "▤",
                label: "Data",
            },
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
