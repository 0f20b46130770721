pub mod blocks;
pub mod enhance;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use blocks::{DiagramBlock, Replacement, contains_diagram, find_blocks, locate_and_replace};
pub use enhance::{
    CategoryRule, ColorScheme, EnhanceRules, StyledDiagram, StyledFlowchart, StyledNode,
    StyledSequence, StyledStep, enhance_document,
};
pub use io::*;
pub use models::Article;
pub use pipeline::{FileOutcome, RunSummary, convert_document};
pub use render::{DiagramKind, classify, render};
