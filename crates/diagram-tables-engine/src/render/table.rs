use std::fmt;

/// A pipe table with fixed headers and free-form cells
#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownTable {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
struct Column {
    title: String,
    rule_width: usize,
}

impl MarkdownTable {
    /// Create a table from `(title, rule_width)` pairs; `rule_width` is the dash count under the header
    pub fn new(columns: &[(&str, usize)]) -> Self {
        Self {
            columns: columns
                .iter()
                .map(|(title, rule_width)| Column {
                    title: (*title).to_string(),
                    rule_width: *rule_width,
                })
                .collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for MarkdownTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_row(f, self.columns.iter().map(|c| c.title.as_str()))?;

        f.write_str("|")?;
        for column in &self.columns {
            write!(f, "{}|", "-".repeat(column.rule_width))?;
        }
        f.write_str("\n")?;

        for row in &self.rows {
            write_row(f, row.iter().map(String::as_str))?;
        }
        Ok(())
    }
}

fn write_row<'a>(f: &mut fmt::Formatter<'_>, cells: impl Iterator<Item = &'a str>) -> fmt::Result {
    f.write_str("|")?;
    for cell in cells {
        write!(f, " {cell} |")?;
    }
    f.write_str("\n")
}
