use super::table::MarkdownTable;
use regex::Regex;
use std::sync::OnceLock;

/// Message arrow present on every qualifying line; also matches the dashed `-->>`
pub const MESSAGE_ARROW: &str = "->>";
/// Action label written for every step
pub const SEND_ACTION: &str = "发送";

const HEADING: &str = "#### 序列图\n\n";

fn split_regex() -> &'static Regex {
    static SPLIT_REGEX: OnceLock<Regex> = OnceLock::new();
    SPLIT_REGEX.get_or_init(|| Regex::new(r"->>|-->>|:").expect("Invalid message split regex"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// 1-based position among the qualifying lines
    pub ordinal: usize,
    pub source: String,
    pub destination: String,
    pub message: String,
}

pub fn parse(body: &str) -> Vec<Step> {
    body.lines()
        .filter(|line| line.contains(MESSAGE_ARROW))
        .enumerate()
        .map(|(index, line)| {
            let mut parts = split_regex().splitn(line, 3).map(str::trim);
            Step {
                ordinal: index + 1,
                source: parts.next().unwrap_or_default().to_string(),
                destination: parts.next().unwrap_or_default().to_string(),
                message: parts.next().unwrap_or_default().to_string(),
            }
        })
        .collect()
}

pub fn render(body: &str) -> String {
    let mut table = MarkdownTable::new(&[
        ("步骤", 6),
        ("参与者", 8),
        ("动作", 6),
        ("目标", 6),
        ("说明", 6),
    ]);
    for step in parse(body) {
        table.push_row([
            step.ordinal.to_string(),
            step.source,
            SEND_ACTION.to_string(),
            step.destination,
            step.message,
        ]);
    }

    format!("{HEADING}{table}")
}
