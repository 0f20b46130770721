//! Locating fenced mermaid blocks inside an article and substituting them.
//!
//! A block starts at a ```` ```mermaid ```` fence line and ends at the nearest
//! following ```` ``` ````. The whole span, fences included, is replaced, so a
//! converted document contains no diagram fences and converting it again is a
//! no-op.

use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

/// Opening fence of a diagram block, without the line break
pub const DIAGRAM_FENCE: &str = "```mermaid";

fn block_regex() -> &'static Regex {
    static BLOCK_REGEX: OnceLock<Regex> = OnceLock::new();
    // Lazy `.*?` keeps a block from running into the next one.
    BLOCK_REGEX.get_or_init(|| {
        Regex::new(r"(?s)```mermaid\r?\n(.*?)```").expect("Invalid diagram block regex")
    })
}

/// A diagram block found in a document, borrowed from the document text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramBlock<'a> {
    /// Text between the opening fence line and the closing fence
    pub body: &'a str,
    /// Byte range of the whole block, fences included
    pub span: Range<usize>,
}

/// Result of a locate-and-replace pass over one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement {
    /// No diagram block was found; the document is unchanged and should not be written
    NoBlocks,
    Replaced { text: String, blocks: usize },
}

impl Replacement {
    pub fn is_changed(&self) -> bool {
        matches!(self, Replacement::Replaced { .. })
    }

    /// Number of blocks that were transformed
    pub fn block_count(&self) -> usize {
        match self {
            Replacement::NoBlocks => 0,
            Replacement::Replaced { blocks, .. } => *blocks,
        }
    }

    /// The resulting document text, falling back to `original` when nothing was replaced
    pub fn into_text(self, original: &str) -> String {
        match self {
            Replacement::NoBlocks => original.to_string(),
            Replacement::Replaced { text, .. } => text,
        }
    }
}

/// Cheap check used to skip documents before running the full scan
pub fn contains_diagram(document: &str) -> bool {
    document.contains(DIAGRAM_FENCE)
}

/// Find every diagram block in encounter order
pub fn find_blocks(document: &str) -> Vec<DiagramBlock<'_>> {
    block_regex()
        .captures_iter(document)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let body = caps.get(1)?;
            Some(DiagramBlock {
                body: body.as_str(),
                span: whole.range(),
            })
        })
        .collect()
}

/// Replace every diagram block with `transform(body)`, leaving all other text untouched
pub fn locate_and_replace<F>(document: &str, mut transform: F) -> Replacement
where
    F: FnMut(&str) -> String,
{
    let blocks = find_blocks(document);
    if blocks.is_empty() {
        return Replacement::NoBlocks;
    }

    let mut text = String::with_capacity(document.len());
    let mut last_end = 0;
    for block in &blocks {
        text.push_str(&document[last_end..block.span.start]);
        text.push_str(&transform(block.body));
        last_end = block.span.end;
    }
    text.push_str(&document[last_end..]);

    Replacement::Replaced {
        text,
        blocks: blocks.len(),
    }
}
