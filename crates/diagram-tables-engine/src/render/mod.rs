//! Turning a diagram block body into plain markdown.
//!
//! Classification is a substring search over the body, first match wins in
//! [`CLASSIFICATION_ORDER`]. Sub-grammars share keywords (a sequence diagram
//! can mention a "graph" in a message), so the order is part of the contract.
//!
//! Rendering is best effort: lines that do not fit a sub-grammar are left out
//! of the output and never reported as errors.

pub mod class;
pub mod flow;
pub mod sequence;
pub mod table;

/// Maximum number of nodes listed in a flow-graph table
pub const MAX_NODES: usize = 10;
/// Maximum number of edges listed under a flow-graph table
pub const MAX_EDGES: usize = 5;

/// Output for blocks whose diagram type is not recognised
pub const PLACEHOLDER: &str = "#### 图表内容\n\n*[Mermaid图表已转换为表格形式]*\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramKind {
    FlowGraph,
    StepSequence,
    ClassStub,
    Unrecognized,
}

/// Keyword markers per diagram kind, checked in this order
pub const CLASSIFICATION_ORDER: [(DiagramKind, &[&str]); 3] = [
    (DiagramKind::FlowGraph, &["flowchart", "graph"]),
    (DiagramKind::StepSequence, &["sequenceDiagram"]),
    (DiagramKind::ClassStub, &["classDiagram"]),
];

pub fn classify(body: &str) -> DiagramKind {
    CLASSIFICATION_ORDER
        .iter()
        .find(|(_, markers)| markers.iter().any(|marker| body.contains(marker)))
        .map(|(kind, _)| *kind)
        .unwrap_or(DiagramKind::Unrecognized)
}

/// Render a diagram block body as markdown
pub fn render(body: &str) -> String {
    match classify(body) {
        DiagramKind::FlowGraph => flow::render(body),
        DiagramKind::StepSequence => sequence::render(body),
        DiagramKind::ClassStub => class::render(),
        DiagramKind::Unrecognized => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("flowchart TD\n  A --> B\n", DiagramKind::FlowGraph)]
    #[case("graph LR\n  A --> B\n", DiagramKind::FlowGraph)]
    #[case("sequenceDiagram\n  A->>B: hi\n", DiagramKind::StepSequence)]
    #[case("classDiagram\n  class Animal\n", DiagramKind::ClassStub)]
    #[case("gantt\n  title Plan\n", DiagramKind::Unrecognized)]
    #[case("pie title Pets\n", DiagramKind::Unrecognized)]
    #[case("", DiagramKind::Unrecognized)]
    fn classifies_by_keyword(#[case] body: &str, #[case] expected: DiagramKind) {
        assert_eq!(classify(body), expected);
    }

    #[test]
    fn flow_keyword_wins_over_class_keyword() {
        let body = "classDiagram\n%% flowchart notes\n  class A\n";
        assert_eq!(classify(body), DiagramKind::FlowGraph);
    }

    #[test]
    fn sequence_mentioning_graph_is_a_flow_graph() {
        let body = "sequenceDiagram\n  A->>B: build the graph\n";
        assert_eq!(classify(body), DiagramKind::FlowGraph);
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(classify("Flowchart TD\n"), DiagramKind::Unrecognized);
        assert_eq!(classify("gitGraph\n"), DiagramKind::Unrecognized);
        assert_eq!(classify("sequencediagram\n"), DiagramKind::Unrecognized);
    }

    #[test]
    fn unrecognised_block_renders_placeholder_exactly() {
        assert_eq!(
            render("gantt\n  title Plan\n"),
            "#### 图表内容\n\n*[Mermaid图表已转换为表格形式]*\n"
        );
    }

    #[test]
    fn class_block_renders_stub() {
        assert_eq!(render("classDiagram\n  Animal <|-- Duck\n"), class::render());
    }

    #[test]
    fn rendering_is_deterministic() {
        let body = "graph TD\n  A[Start] --> B[End]\n";
        assert_eq!(render(body), render(body));
    }
}
