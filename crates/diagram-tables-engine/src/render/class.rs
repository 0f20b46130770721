use super::table::MarkdownTable;

const HEADING: &str = "#### 类图\n\n";

/// Class diagrams are not parsed; readers are pointed at the source instead.
pub fn render() -> String {
    let mut table = MarkdownTable::new(&[("类名", 6), ("属性", 6), ("方法", 6), ("关系", 6)]);
    table.push_row(["详见代码", "-", "-", "-"]);
    format!("{HEADING}{table}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_single_placeholder_row() {
        assert_eq!(
            render(),
            "#### 类图\n\n\
             | 类名 | 属性 | 方法 | 关系 |\n\
             |------|------|------|------|\n\
             | 详见代码 | - | - | - |\n"
        );
    }
}
