//! Replacing the generic diagram placeholder with styled markup.
//!
//! Which markup an article gets is decided by [`EnhanceRules`], supplied by the
//! caller (normally loaded from the config file):
//!
//! 1. styled diagrams listed for the article's identifier in `articles`, one per
//!    placeholder occurrence, in order;
//! 2. otherwise the callout of the first category whose keyword appears in the
//!    identifier, or the fallback category.

pub mod category;
pub mod scheme;
pub mod styled;

pub use category::CategoryRule;
pub use scheme::ColorScheme;
pub use styled::{StyledDiagram, StyledFlowchart, StyledNode, StyledSequence, StyledStep};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder text the enhancer looks for: the converter's output for unrecognised diagrams
pub const DEFAULT_TARGET: &str = "#### 图表内容\n\n*[Mermaid图表已转换为表格形式]*";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhanceRules {
    /// Literal text replaced in each article
    pub target: String,
    pub categories: Vec<CategoryRule>,
    pub fallback: CategoryRule,
    /// Article identifier (file name) to hand-written diagrams
    pub articles: BTreeMap<String, Vec<StyledDiagram>>,
}

impl Default for EnhanceRules {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            categories: CategoryRule::default_categories(),
            fallback: CategoryRule::default_fallback(),
            articles: BTreeMap::new(),
        }
    }
}

impl EnhanceRules {
    pub fn category_for(&self, article_id: &str) -> &CategoryRule {
        self.categories
            .iter()
            .find(|rule| rule.matches(article_id))
            .unwrap_or(&self.fallback)
    }

    pub fn overrides_for(&self, article_id: &str) -> &[StyledDiagram] {
        self.articles
            .get(article_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of placeholder occurrences in `text`
    pub fn count_targets(&self, text: &str) -> usize {
        if self.target.is_empty() {
            return 0;
        }
        text.matches(self.target.as_str()).count()
    }
}

/// Enhance one article; `None` when the placeholder does not occur
pub fn enhance_document(article_id: &str, text: &str, rules: &EnhanceRules) -> Option<String> {
    let target = rules.target.as_str();
    if target.is_empty() || !text.contains(target) {
        return None;
    }

    let overrides = rules.overrides_for(article_id);
    let mut callout: Option<String> = None;
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut index = 0;

    while let Some(pos) = rest.find(target) {
        out.push_str(&rest[..pos]);
        match overrides.get(index) {
            Some(diagram) => out.push_str(&diagram.render()),
            None => out.push_str(
                callout.get_or_insert_with(|| rules.category_for(article_id).render_callout()),
            ),
        }
        rest = &rest[pos + target.len()..];
        index += 1;
    }
    out.push_str(rest);

    Some(out)
}
