use super::table::MarkdownTable;
use super::{MAX_EDGES, MAX_NODES};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Arrow tokens marking an edge line: plain, dotted with label, solid with label
pub const EDGE_TOKENS: [&str; 3] = ["-->", "-.->|", "-->|"];

const HEADING: &str = "#### 流程图表\n\n";
const ARROW_GLYPH: &str = "→";

fn node_regex() -> &'static Regex {
    static NODE_REGEX: OnceLock<Regex> = OnceLock::new();
    NODE_REGEX
        .get_or_init(|| Regex::new(r#"(\w+)\["?([^"\]]+)"?\]"#).expect("Invalid node regex"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    pub label: String,
}

/// Nodes and edges of a flow-graph block, in encounter order and uncapped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowGraph {
    pub nodes: Vec<Node>,
    /// Edge lines, trimmed but otherwise raw
    pub edges: Vec<String>,
}

impl FlowGraph {
    pub fn parse(body: &str) -> Self {
        let mut graph = FlowGraph::default();
        let mut seen = HashSet::new();

        for line in body.lines() {
            if is_edge_line(line) {
                graph.edges.push(line.trim().to_string());
            } else if line.contains('[') && line.contains(']') {
                let Some(node) = parse_node(line) else {
                    continue;
                };
                if seen.insert(node.id.clone()) {
                    graph.nodes.push(node);
                }
            }
        }

        graph
    }
}

fn is_edge_line(line: &str) -> bool {
    EDGE_TOKENS.iter().any(|token| line.contains(token))
}

fn parse_node(line: &str) -> Option<Node> {
    let caps = node_regex().captures(line)?;
    Some(Node {
        id: caps[1].to_string(),
        label: caps[2].replace("<br/>", " "),
    })
}

/// Collapse every edge token to a single arrow glyph
pub fn normalize_arrows(edge: &str) -> String {
    EDGE_TOKENS
        .iter()
        .fold(edge.to_string(), |acc, token| acc.replace(token, ARROW_GLYPH))
}

pub fn render(body: &str) -> String {
    let graph = FlowGraph::parse(body);
    let mut out = String::from(HEADING);

    if !graph.nodes.is_empty() {
        let mut table = MarkdownTable::new(&[("节点", 6), ("描述", 6)]);
        for node in graph.nodes.iter().take(MAX_NODES) {
            table.push_row([node.id.as_str(), node.label.as_str()]);
        }
        out.push_str("**节点说明：**\n\n");
        out.push_str(&table.to_string());
    }

    if !graph.edges.is_empty() {
        out.push_str("\n**关系流向：**\n```\n");
        for edge in graph.edges.iter().take(MAX_EDGES) {
            out.push_str(&normalize_arrows(edge));
            out.push('\n');
        }
        out.push_str("```");
    }

    out
}
