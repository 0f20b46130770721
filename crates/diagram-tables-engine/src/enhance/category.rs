use super::scheme::ColorScheme;
use super::styled::write_panel_open;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Callout used for articles without a hand-written override
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    /// Substring of the article file name selecting this rule; empty for the fallback
    #[serde(default)]
    pub keyword: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub scheme: ColorScheme,
}

impl CategoryRule {
    pub fn new(keyword: &str, title: &str, description: &str, scheme: ColorScheme) -> Self {
        Self {
            keyword: keyword.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            scheme,
        }
    }

    pub fn matches(&self, article_id: &str) -> bool {
        !self.keyword.is_empty() && article_id.contains(&self.keyword)
    }

    pub fn render_callout(&self) -> String {
        Callout(self).to_string()
    }

    pub fn default_categories() -> Vec<CategoryRule> {
        vec![
            CategoryRule::new(
                "data-structure",
                "数据结构可视化",
                "直观展示数据结构的组织方式和操作过程",
                ColorScheme::Blue,
            ),
            CategoryRule::new(
                "algorithm",
                "算法流程可视化",
                "展示算法的执行步骤和处理逻辑",
                ColorScheme::Green,
            ),
            CategoryRule::new(
                "distributed",
                "分布式系统架构图",
                "展示分布式系统的组件和交互关系",
                ColorScheme::Purple,
            ),
        ]
    }

    pub fn default_fallback() -> CategoryRule {
        CategoryRule::new("", "流程图表", "系统流程和数据流向展示", ColorScheme::Blue)
    }
}

struct Callout<'a>(&'a CategoryRule);

impl fmt::Display for Callout<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = self.0;
        write_panel_open(f, "🎯", "📊", &rule.title, &rule.description, rule.scheme)?;
        f.write_str(
            "<div style=\"background: rgba(255,255,255,0.1); padding: 20px; border-radius: 12px; text-align: center;\">\n\
             <div style=\"font-size: 18px; font-weight: bold; margin-bottom: 15px;\">🔍 详细内容</div>\n\
             <div style=\"font-size: 16px; line-height: 1.6;\">\n\
             此图表展示了相关概念的核心要点和处理流程。<br/>\n\
             通过可视化的方式帮助理解复杂的技术概念，<br/>\n\
             让学习过程更加直观和高效。\n\
             </div>\n\
             </div>\n\n\
             <div style=\"background: rgba(255,255,255,0.1); padding: 15px; border-radius: 10px; text-align: center; margin-top: 15px;\">\n\
             <div style=\"font-size: 16px; font-weight: bold; margin-bottom: 8px;\">💡 学习建议</div>\n\
             <div style=\"font-size: 14px; opacity: 0.9;\">结合代码实例和实际应用场景来理解概念</div>\n\
             </div>\n\n\
             </div>",
        )
    }
}
