//! Decorative HTML renderings of hand-described diagrams.
//!
//! These are written into markdown articles, so every piece of user text is
//! HTML-escaped before it lands inside a `<div>`.

use super::scheme::ColorScheme;
use html_escape::encode_text;
use serde::{Deserialize, Serialize};
use std::fmt;

const CARD: &str = "background: rgba(255,255,255,0.15); backdrop-filter: blur(10px); border-radius: 12px; padding: 15px; text-align: center; min-width: 120px; border: 2px solid rgba(255,255,255,0.3);";
const CELL: &str = "background: rgba(255,255,255,0.1); padding: 8px; border-radius: 8px; text-align: center;";
const GRID_HEADER: &str = "font-weight: bold; text-align: center; color: #FFD700;";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledNode {
    pub id: String,
    /// Caption under the node; the id is shown when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    /// Value shown in a badge inside the node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledFlowchart {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub nodes: Vec<StyledNode>,
    #[serde(default)]
    pub relationships: Vec<String>,
    #[serde(default)]
    pub scheme: ColorScheme,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledStep {
    #[serde(default)]
    pub participant: String,
    #[serde(default = "default_action")]
    pub action: String,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledSequence {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub steps: Vec<StyledStep>,
    #[serde(default = "default_sequence_scheme")]
    pub scheme: ColorScheme,
}

/// A styled replacement for one converted diagram
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StyledDiagram {
    Flowchart(StyledFlowchart),
    Sequence(StyledSequence),
}

fn default_action() -> String {
    crate::render::sequence::SEND_ACTION.to_string()
}

fn default_sequence_scheme() -> ColorScheme {
    ColorScheme::Pink
}

impl StyledDiagram {
    pub fn render(&self) -> String {
        match self {
            StyledDiagram::Flowchart(chart) => chart.render(),
            StyledDiagram::Sequence(sequence) => sequence.render(),
        }
    }
}

impl StyledFlowchart {
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl StyledSequence {
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// Heading plus the opening of the outer panel with its title block
pub(crate) fn write_panel_open(
    f: &mut fmt::Formatter<'_>,
    heading_icon: &str,
    title_icon: &str,
    title: &str,
    description: &str,
    scheme: ColorScheme,
) -> fmt::Result {
    let title = encode_text(title);
    let description = encode_text(description);
    write!(
        f,
        "#### {heading_icon} {title}\n\n\
         <div style=\"background: {gradient}; padding: 25px; border-radius: 15px; margin: 20px 0; color: white; box-shadow: 0 8px 32px rgba(0,0,0,0.3);\">\n\n\
         <div style=\"text-align: center; margin-bottom: 20px;\">\n\
         <div style=\"font-size: 20px; font-weight: bold; margin-bottom: 10px;\">{title_icon} {title}</div>\n\
         <div style=\"font-size: 14px; opacity: 0.9;\">{description}</div>\n\
         </div>\n\n",
        gradient = scheme.gradient(),
    )
}

impl fmt::Display for StyledFlowchart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_panel_open(f, "🎯", "📊", &self.title, &self.description, self.scheme)?;
        f.write_str("<div style=\"display: flex; justify-content: center; align-items: center; gap: 15px; flex-wrap: wrap; margin: 25px 0;\">\n")?;

        for (i, node) in self.nodes.iter().enumerate() {
            let id = encode_text(&node.id);
            let desc = node.desc.as_deref().map(encode_text).unwrap_or(id.clone());
            write!(
                f,
                "\n<!-- {id} -->\n\
                 <div style=\"{CARD}\">\n\
                 <div style=\"font-weight: bold; color: #FFD700; margin-bottom: 8px;\">{id}</div>\n"
            )?;
            if let Some(data) = node.data.as_deref().filter(|d| !d.is_empty()) {
                write!(
                    f,
                    "<div style=\"background: {accent}; padding: 8px; border-radius: 8px; margin-bottom: 8px;\">\n\
                     <div style=\"font-size: 12px; opacity: 0.8;\">数据</div>\n\
                     <div style=\"font-size: 18px; font-weight: bold;\">{data}</div>\n\
                     </div>",
                    accent = self.scheme.accent(),
                    data = encode_text(data),
                )?;
            }
            write!(
                f,
                "<div style=\"font-size: 14px; margin-top: 5px;\">{desc}</div>\n</div>"
            )?;
            if i + 1 < self.nodes.len() {
                f.write_str("\n<div style=\"font-size: 24px; color: #FFD700;\">➡️</div>")?;
            }
        }

        f.write_str(
            "\n</div>\n\n\
             <div style=\"background: rgba(255,255,255,0.1); padding: 15px; border-radius: 10px; text-align: center;\">\n\
             <div style=\"font-size: 16px; font-weight: bold; margin-bottom: 10px;\">🔄 处理流程</div>\n\
             <div style=\"display: flex; justify-content: center; gap: 15px; flex-wrap: wrap;\">\n",
        )?;
        for relationship in &self.relationships {
            write!(
                f,
                "<span style=\"background: rgba(255,255,255,0.2); padding: 8px 12px; border-radius: 8px; font-size: 14px;\">{}</span>",
                encode_text(relationship)
            )?;
        }
        f.write_str("\n</div>\n</div>\n\n</div>")
    }
}

impl fmt::Display for StyledSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_panel_open(f, "🎬", "📋", &self.title, &self.description, self.scheme)?;
        f.write_str(
            "<div style=\"background: rgba(255,255,255,0.1); padding: 20px; border-radius: 12px;\">\n\
             <div style=\"display: grid; grid-template-columns: auto 1fr auto 1fr auto; gap: 15px; align-items: center;\">\n",
        )?;
        for header in ["步骤", "参与者", "操作", "目标", "说明"] {
            writeln!(f, "<div style=\"{GRID_HEADER}\">{header}</div>")?;
        }

        for (i, step) in self.steps.iter().enumerate() {
            write!(
                f,
                "\n<div style=\"background: {accent}; padding: 8px; border-radius: 8px; text-align: center; font-weight: bold;\">{n}</div>\n",
                accent = self.scheme.accent(),
                n = i + 1,
            )?;
            for cell in [&step.participant, &step.action, &step.target, &step.desc] {
                writeln!(f, "<div style=\"{CELL}\">{}</div>", encode_text(cell))?;
            }
        }

        f.write_str("\n</div>\n</div>\n\n</div>")
    }
}
